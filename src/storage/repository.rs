//! Read-side capability traits, one per record kind.
//!
//! Implementations return `Ok(None)` or an empty `Vec` when nothing matches.
//! `Err` means the store itself failed.

use crate::core::{Category, Certification, Flashcard};
use crate::error::Result;

pub trait CertificationRepository {
    /// All certifications, ordered by id.
    fn get_all(&self) -> Result<Vec<Certification>>;

    /// First certification with exactly this name.
    fn get_by_name(&self, name: &str) -> Result<Option<Certification>>;
}

pub trait CategoryRepository {
    /// Categories belonging to `cert_id`, ordered by id.
    fn get_all_by_certification(&self, cert_id: i64) -> Result<Vec<Category>>;

    /// Category matching the natural key `(cert_id, name)`.
    fn get_by_name(&self, cert_id: i64, name: &str) -> Result<Option<Category>>;
}

pub trait FlashcardRepository {
    /// Flashcards belonging to `cat_id`, in insertion order.
    fn get_all_by_category(&self, cat_id: i64) -> Result<Vec<Flashcard>>;
}
