//! Wellspring: a personal wellness and spaced-review tracker backend.
//!
//! Exposes a JSON API over a relational store for user accounts, daily
//! wellness entries with a derived 0-100 score, and flashcards scheduled on
//! a simple review-interval ladder.

pub mod model;
pub mod server;
