//! Database model type aliases for test utilities.
//!
//! Convenient aliases for the SeaORM entity models used throughout the test
//! utilities, matching the names used in the main wellspring crate.

/// Type alias for the Wellspring user database model.
pub type UserModel = entity::wellspring_user::Model;

/// Type alias for the wellness entry database model.
pub type WellnessEntryModel = entity::wellness_entry::Model;

/// Type alias for the flashcard database model.
pub type FlashcardModel = entity::flashcard::Model;
