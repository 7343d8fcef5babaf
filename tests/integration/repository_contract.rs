//! Both repository backends must agree on the read contract.

use flashdeck::core::NewFlashcard;
use flashdeck::storage::{
    CategoryRepository, CertificationRepository, FlashcardRepository, MemoryStore, SqliteStore,
};
use tempfile::TempDir;

struct Ids {
    cert_a: i64,
    cert_b: i64,
    cat_a: i64,
}

fn seed_memory(store: &MemoryStore) -> Ids {
    let a = store.insert_certification("A");
    let b = store.insert_certification("B");
    let cat_a = store.insert_category(a.id, "Shared");
    store.insert_category(b.id, "Shared");
    store.insert_flashcard(cat_a.id, &card());
    Ids {
        cert_a: a.id,
        cert_b: b.id,
        cat_a: cat_a.id,
    }
}

fn seed_sqlite(store: &SqliteStore) -> Ids {
    let mut writer = store.writer().unwrap();
    writer
        .transaction(|tx| {
            let a = tx.get_or_create_certification("A")?.record;
            let b = tx.get_or_create_certification("B")?.record;
            let cat_a = tx.get_or_create_category(a.id, "Shared")?.record;
            tx.get_or_create_category(b.id, "Shared")?;
            tx.insert_flashcard(cat_a.id, &card())?;
            Ok(Ids {
                cert_a: a.id,
                cert_b: b.id,
                cat_a: cat_a.id,
            })
        })
        .unwrap()
}

fn card() -> NewFlashcard {
    NewFlashcard {
        question: "Q".to_string(),
        answer: "A".to_string(),
    }
}

fn check_contract<C, K, F>(certs: &C, cats: &K, cards: &F, ids: &Ids)
where
    C: CertificationRepository,
    K: CategoryRepository,
    F: FlashcardRepository,
{
    assert_eq!(certs.get_all().unwrap().len(), 2);
    assert_eq!(certs.get_by_name("A").unwrap().unwrap().id, ids.cert_a);
    assert!(certs.get_by_name("missing").unwrap().is_none());

    let under_a = cats.get_all_by_certification(ids.cert_a).unwrap();
    assert_eq!(under_a.len(), 1);
    assert!(under_a.iter().all(|c| c.cert_id == ids.cert_a));
    assert_eq!(
        cats.get_by_name(ids.cert_b, "Shared").unwrap().unwrap().cert_id,
        ids.cert_b
    );
    assert!(cats.get_by_name(ids.cert_a, "Other").unwrap().is_none());

    assert_eq!(cards.get_all_by_category(ids.cat_a).unwrap().len(), 1);
    assert!(cards.get_all_by_category(-1).unwrap().is_empty());
}

#[test]
fn test_memory_backend_contract() {
    let store = MemoryStore::new();
    let ids = seed_memory(&store);
    check_contract(&store, &store, &store, &ids);
}

#[test]
fn test_sqlite_backend_contract() {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(dir.path().join("contract.db")).unwrap();
    let ids = seed_sqlite(&store);
    check_contract(
        &store.certifications(),
        &store.categories(),
        &store.flashcards(),
        &ids,
    );
}
