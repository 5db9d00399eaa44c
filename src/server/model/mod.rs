//! Server-internal state types.

pub mod app;
