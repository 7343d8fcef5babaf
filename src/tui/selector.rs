//! Cascading certification -> category -> flashcard selection state.
//!
//! Terminal-independent so the selection rules can be driven directly in
//! tests. The [`CategorySet`] fetched for the current certification lives
//! here, never on the services.

use tracing::debug;

use crate::core::{Category, Certification, Flashcard};
use crate::error::Result;
use crate::services::{CatalogService, CategorySet, FlashcardService};

#[derive(Debug)]
pub struct Selector {
    catalog: CatalogService,
    flashcard_service: FlashcardService,
    certifications: Vec<Certification>,
    certification: Option<Certification>,
    categories: Option<CategorySet>,
    category: Option<Category>,
    flashcards: Vec<Flashcard>,
}

impl Selector {
    /// Build the selector and load the certification choices.
    pub fn new(catalog: CatalogService, flashcard_service: FlashcardService) -> Result<Self> {
        let certifications = catalog.list_certifications()?;
        Ok(Self {
            catalog,
            flashcard_service,
            certifications,
            certification: None,
            categories: None,
            category: None,
            flashcards: Vec::new(),
        })
    }

    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    pub const fn selected_certification(&self) -> Option<&Certification> {
        self.certification.as_ref()
    }

    /// Category choices for the selected certification; empty before one is chosen.
    pub fn categories(&self) -> &[Category] {
        match &self.categories {
            Some(set) => set.categories(),
            None => &[],
        }
    }

    pub const fn selected_category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    /// Select a certification by name.
    ///
    /// Any previously chosen category and displayed flashcards are cleared
    /// first, even if `name` does not resolve. Returns whether it resolved.
    pub fn select_certification(&mut self, name: &str) -> Result<bool> {
        self.certification = None;
        self.categories = None;
        self.category = None;
        self.flashcards.clear();

        let Some(cert) = self.catalog.find_certification_by_name(name)? else {
            debug!(certification = name, "certification not found");
            return Ok(false);
        };

        let categories = self.catalog.list_categories(cert.id)?;
        debug!(certification = name, categories = categories.len(), "certification selected");
        self.certification = Some(cert);
        self.categories = Some(categories);
        Ok(true)
    }

    /// Select a category of the current certification by name.
    ///
    /// Resolved against the already-fetched category set. Unknown names leave
    /// the current selection untouched.
    pub fn select_category(&mut self, name: &str) -> Result<bool> {
        let Some(category) = self
            .categories
            .as_ref()
            .and_then(|set| set.find_category_by_name(name))
            .cloned()
        else {
            debug!(category = name, "category not in current set");
            return Ok(false);
        };

        self.flashcards = self.flashcard_service.get_flashcards(category.id)?;
        debug!(category = name, flashcards = self.flashcards.len(), "category selected");
        self.category = Some(category);
        Ok(true)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::NewFlashcard;
    use crate::storage::MemoryStore;

    /// Two certifications, each with categories and cards.
    pub(crate) fn sample_store() -> MemoryStore {
        let store = MemoryStore::new();
        let aws = store.insert_certification("AWS");
        let gcp = store.insert_certification("GCP");
        let iam = store.insert_category(aws.id, "IAM");
        let s3 = store.insert_category(aws.id, "S3");
        let gke = store.insert_category(gcp.id, "GKE");
        for (cat, q, a) in [
            (iam.id, "What is a role?", "An identity with permissions"),
            (iam.id, "What is a policy?", "A JSON permissions document"),
            (s3.id, "Max object size?", "5 TB"),
            (gke.id, "What is a node pool?", "A group of nodes"),
        ] {
            store.insert_flashcard(
                cat,
                &NewFlashcard {
                    question: q.to_string(),
                    answer: a.to_string(),
                },
            );
        }
        store
    }

    pub(crate) fn sample_selector() -> Selector {
        let store = sample_store();
        Selector::new(
            CatalogService::new(store.clone(), store.clone(), store.clone()),
            FlashcardService::new(store),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_state_lists_certifications_only() {
        let selector = sample_selector();
        let names: Vec<_> = selector.certifications().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["AWS", "GCP"]);
        assert!(selector.categories().is_empty());
        assert!(selector.flashcards().is_empty());
    }

    #[test]
    fn test_select_certification_populates_categories() {
        let mut selector = sample_selector();
        assert!(selector.select_certification("AWS").unwrap());

        let names: Vec<_> = selector.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["IAM", "S3"]);
        assert!(selector.selected_category().is_none());
    }

    #[test]
    fn test_select_category_loads_flashcards() {
        let mut selector = sample_selector();
        selector.select_certification("AWS").unwrap();
        assert!(selector.select_category("IAM").unwrap());

        assert_eq!(selector.flashcards().len(), 2);
        assert_eq!(selector.selected_category().unwrap().name, "IAM");
    }

    #[test]
    fn test_switching_certification_clears_flashcards() {
        let mut selector = sample_selector();
        selector.select_certification("AWS").unwrap();
        selector.select_category("IAM").unwrap();
        assert!(!selector.flashcards().is_empty());

        selector.select_certification("GCP").unwrap();
        assert!(selector.flashcards().is_empty());
        assert!(selector.selected_category().is_none());
        let names: Vec<_> = selector.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["GKE"]);
    }

    #[test]
    fn test_category_from_other_certification_is_not_selectable() {
        let mut selector = sample_selector();
        selector.select_certification("GCP").unwrap();
        assert!(!selector.select_category("IAM").unwrap());
        assert!(selector.flashcards().is_empty());
    }

    #[test]
    fn test_unknown_certification_clears_everything() {
        let mut selector = sample_selector();
        selector.select_certification("AWS").unwrap();
        selector.select_category("S3").unwrap();

        assert!(!selector.select_certification("Azure").unwrap());
        assert!(selector.selected_certification().is_none());
        assert!(selector.categories().is_empty());
        assert!(selector.flashcards().is_empty());
    }

    #[test]
    fn test_category_before_certification_is_noop() {
        let mut selector = sample_selector();
        assert!(!selector.select_category("IAM").unwrap());
    }
}
