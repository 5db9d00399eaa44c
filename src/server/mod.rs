//! Server application core modules.
//!
//! This module contains all server-side functionality for the Wellspring
//! application: HTTP routing, request handlers, the repository and service
//! layers over the relational store, and the wellness score computation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
