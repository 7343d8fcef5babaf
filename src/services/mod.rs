//! Application services consumed by the presentation layer.

pub mod catalog;
pub mod flashcard;

pub use catalog::{CatalogService, CategorySet};
pub use flashcard::FlashcardService;
