//! In-memory store implementing the repository traits.
//!
//! Used in tests and anywhere a throwaway catalog is enough. Clones share the
//! same underlying tables.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;

use crate::core::{Category, Certification, Flashcard, NewFlashcard};
use crate::error::Result;
use crate::storage::repository::{CategoryRepository, CertificationRepository, FlashcardRepository};

#[derive(Debug, Default)]
struct Tables {
    certifications: Vec<Certification>,
    categories: Vec<Category>,
    flashcards: Vec<Flashcard>,
    next_id: i64,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Seeding inserts always append. Unlike the SQLite writer they neither reuse
/// natural keys nor check that the parent exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Rc<RefCell<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_certification(&self, name: &str) -> Certification {
        let mut tables = self.tables.borrow_mut();
        let record = Certification {
            id: tables.allocate_id(),
            name: name.to_string(),
        };
        tables.certifications.push(record.clone());
        record
    }

    pub fn insert_category(&self, cert_id: i64, name: &str) -> Category {
        let mut tables = self.tables.borrow_mut();
        let record = Category {
            id: tables.allocate_id(),
            cert_id,
            name: name.to_string(),
        };
        tables.categories.push(record.clone());
        record
    }

    pub fn insert_flashcard(&self, cat_id: i64, card: &NewFlashcard) -> Flashcard {
        let mut tables = self.tables.borrow_mut();
        let record = Flashcard {
            id: tables.allocate_id(),
            cat_id,
            question: card.question.clone(),
            answer: card.answer.clone(),
            view_count: 0,
            last_viewed_at: Utc::now(),
        };
        tables.flashcards.push(record.clone());
        record
    }
}

impl CertificationRepository for MemoryStore {
    fn get_all(&self) -> Result<Vec<Certification>> {
        Ok(self.tables.borrow().certifications.clone())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Certification>> {
        Ok(self
            .tables
            .borrow()
            .certifications
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }
}

impl CategoryRepository for MemoryStore {
    fn get_all_by_certification(&self, cert_id: i64) -> Result<Vec<Category>> {
        Ok(self
            .tables
            .borrow()
            .categories
            .iter()
            .filter(|c| c.cert_id == cert_id)
            .cloned()
            .collect())
    }

    fn get_by_name(&self, cert_id: i64, name: &str) -> Result<Option<Category>> {
        Ok(self
            .tables
            .borrow()
            .categories
            .iter()
            .find(|c| c.cert_id == cert_id && c.name == name)
            .cloned())
    }
}

impl FlashcardRepository for MemoryStore {
    fn get_all_by_category(&self, cat_id: i64) -> Result<Vec<Flashcard>> {
        Ok(self
            .tables
            .borrow()
            .flashcards
            .iter()
            .filter(|c| c.cat_id == cat_id)
            .cloned()
            .collect())
    }
}
