use proptest::prelude::*;

use flashdeck::core::NewFlashcard;
use flashdeck::services::CatalogService;
use flashdeck::storage::MemoryStore;

fn catalog(store: &MemoryStore) -> CatalogService {
    CatalogService::new(store.clone(), store.clone(), store.clone())
}

proptest! {
    #[test]
    fn find_certification_absent_then_present(
        existing in prop::collection::hash_set("[A-Za-z0-9 ]{1,12}", 0..6),
        name in "[A-Za-z0-9 ]{1,12}",
    ) {
        prop_assume!(!existing.contains(&name));
        let store = MemoryStore::new();
        for n in &existing {
            store.insert_certification(n);
        }
        let service = catalog(&store);

        prop_assert!(service.find_certification_by_name(&name).unwrap().is_none());
        let created = store.insert_certification(&name);
        prop_assert_eq!(service.find_certification_by_name(&name).unwrap(), Some(created));
    }

    #[test]
    fn list_categories_never_leaks_other_certifications(
        layout in prop::collection::vec((0usize..4, "[a-z]{1,8}"), 0..20),
    ) {
        let store = MemoryStore::new();
        let certs: Vec<_> = (0..4)
            .map(|i| store.insert_certification(&format!("cert-{i}")))
            .collect();
        for (owner, name) in &layout {
            store.insert_category(certs[*owner].id, name);
        }
        let service = catalog(&store);

        for (idx, cert) in certs.iter().enumerate() {
            let set = service.list_categories(cert.id).unwrap();
            let expected = layout.iter().filter(|(owner, _)| *owner == idx).count();
            prop_assert_eq!(set.len(), expected);
            prop_assert!(set.categories().iter().all(|c| c.cert_id == cert.id));
        }
    }

    #[test]
    fn repeated_rows_produce_distinct_flashcards(copies in 1usize..8) {
        let store = MemoryStore::new();
        let cert = store.insert_certification("C");
        let cat = store.insert_category(cert.id, "X");
        let row = NewFlashcard::from_fields(["Q", "A"]).unwrap();
        for _ in 0..copies {
            store.insert_flashcard(cat.id, &row);
        }

        let cards = catalog(&store).list_flashcards(cat.id).unwrap();
        prop_assert_eq!(cards.len(), copies);
        let mut ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), copies);
    }
}
