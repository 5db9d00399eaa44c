pub mod prelude;

pub mod flashcard;
pub mod wellness_entry;
pub mod wellspring_user;
