//! HTTP request handlers.
//!
//! One handler per RPC-style procedure, each annotated with its OpenAPI
//! specification. Handlers construct the service they need from the shared
//! application state, delegate, and map the result onto a status code;
//! failures propagate as [`crate::server::error::Error`] responses.

pub mod flashcard;
pub mod user;
pub mod wellness;
