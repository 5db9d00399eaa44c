pub use super::flashcard::Entity as Flashcard;
pub use super::wellness_entry::Entity as WellnessEntry;
pub use super::wellspring_user::Entity as WellspringUser;
