//! Flashcard retrieval service.
//!
//! Currently a pass-through to the repository; flashcard-specific behaviour
//! such as review scheduling would live here.

use crate::core::Flashcard;
use crate::error::Result;
use crate::storage::{FlashcardRepository, SqliteStore};

pub struct FlashcardService {
    repo: Box<dyn FlashcardRepository>,
}

impl std::fmt::Debug for FlashcardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashcardService").finish_non_exhaustive()
    }
}

impl FlashcardService {
    pub fn new(repo: impl FlashcardRepository + 'static) -> Self {
        Self {
            repo: Box::new(repo),
        }
    }

    pub fn sqlite(store: &SqliteStore) -> Self {
        Self::new(store.flashcards())
    }

    pub fn get_flashcards(&self, cat_id: i64) -> Result<Vec<Flashcard>> {
        self.repo.get_all_by_category(cat_id)
    }
}
