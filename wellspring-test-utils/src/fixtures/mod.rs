//! Test fixture modules for seeding the in-memory database.
//!
//! Each submodule provides insert helpers on [`crate::TestSetup`] plus factory
//! functions for in-memory model instances:
//!
//! - `user` - Wellspring user records
//! - `wellness` - daily wellness entries
//! - `flashcard` - flashcards in various review states

pub mod flashcard;
pub mod user;
pub mod wellness;
