//! Core flashcard record types

pub mod models;

pub use models::{Category, Certification, Flashcard, NewFlashcard};
