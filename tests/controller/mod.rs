//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP
//! controllers, verifying request handling, response status codes, and error
//! mapping for all API endpoints. Handlers are invoked directly with their
//! extractors rather than through a running server.

mod flashcard;
mod wellness;
