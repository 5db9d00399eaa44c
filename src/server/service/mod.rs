//! Business logic services.
//!
//! Services validate request fields, run the score computation, and translate
//! constraint violations reported by the repositories into domain errors.
//! Each operation performs at most one read followed by at most one write;
//! there is no retry logic and no multi-statement transaction.

pub mod flashcard;
pub mod score;
pub mod user;
pub mod wellness;
