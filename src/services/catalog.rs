//! Data-access façade over the three repositories.

use crate::core::{Category, Certification, Flashcard};
use crate::error::Result;
use crate::storage::{CategoryRepository, CertificationRepository, FlashcardRepository, SqliteStore};

/// Read-only entry point used by the presentation layer.
///
/// Holds no selection state. Category lookups by name go through the
/// [`CategorySet`] returned from [`CatalogService::list_categories`].
pub struct CatalogService {
    certifications: Box<dyn CertificationRepository>,
    categories: Box<dyn CategoryRepository>,
    flashcards: Box<dyn FlashcardRepository>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    pub fn new(
        certifications: impl CertificationRepository + 'static,
        categories: impl CategoryRepository + 'static,
        flashcards: impl FlashcardRepository + 'static,
    ) -> Self {
        Self {
            certifications: Box::new(certifications),
            categories: Box::new(categories),
            flashcards: Box::new(flashcards),
        }
    }

    /// Façade backed by the SQLite repositories of `store`.
    pub fn sqlite(store: &SqliteStore) -> Self {
        Self::new(store.certifications(), store.categories(), store.flashcards())
    }

    pub fn list_certifications(&self) -> Result<Vec<Certification>> {
        self.certifications.get_all()
    }

    pub fn find_certification_by_name(&self, name: &str) -> Result<Option<Certification>> {
        self.certifications.get_by_name(name)
    }

    /// Fetch the categories of one certification in a single round-trip.
    pub fn list_categories(&self, cert_id: i64) -> Result<CategorySet> {
        Ok(CategorySet {
            cert_id,
            categories: self.categories.get_all_by_certification(cert_id)?,
        })
    }

    pub fn list_flashcards(&self, cat_id: i64) -> Result<Vec<Flashcard>> {
        self.flashcards.get_all_by_category(cat_id)
    }
}

/// Categories fetched for one certification.
///
/// Short-lived: the caller keeps it for as long as that certification stays
/// selected and resolves category names against it without re-querying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    cert_id: i64,
    categories: Vec<Category>,
}

impl CategorySet {
    pub const fn cert_id(&self) -> i64 {
        self.cert_id
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
