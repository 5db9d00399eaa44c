//! Data transfer objects shared by the HTTP surface.
//!
//! Every request and response body on the API is one of these types. They are
//! kept separate from the `entity` crate so the wire contract can evolve
//! independently of the persisted schema.

pub mod api;
pub mod flashcard;
pub mod user;
pub mod wellness;
