pub mod feedback_banner;
pub mod flashcard;
pub mod header;
pub mod letter_strip;
pub mod option_grid;
