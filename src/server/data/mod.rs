//! Repository layer.
//!
//! One repository struct per table. Repositories issue single-statement
//! sea-orm queries and return `DbErr` untranslated; mapping constraint
//! violations onto domain errors happens in the service layer.

pub mod flashcard;
pub mod user;
pub mod wellness_entry;
