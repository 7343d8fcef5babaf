use flashdeck::config::IngestConfig;
use flashdeck::ingest::Ingestor;
use flashdeck::services::{CatalogService, FlashcardService};
use flashdeck::storage::SqliteStore;
use flashdeck::test_utils::{ResourcesFixture, TestLogger};
use flashdeck::tui::Selector;

fn pairs(cards: &[flashdeck::core::Flashcard]) -> Vec<(&str, &str)> {
    cards
        .iter()
        .map(|c| (c.question.as_str(), c.answer.as_str()))
        .collect()
}

#[test]
fn test_multi_certification_tree_end_to_end() {
    let log = TestLogger::new("test_multi_certification_tree_end_to_end");
    let fixture = ResourcesFixture::new();
    fixture.create_csv("AWS", "IAM.csv", "What is a role?,An identity\nWhat is MFA?,Second factor\n");
    fixture.create_csv("AWS", "S3.csv", "Max object size?,5 TB\n");
    fixture.create_csv("GCP", "IAM.csv", "What is a service account?,A robot identity\n");
    fixture.create_csv("corrections", "AWS.csv", "Wrong,Right\n");
    fixture.create_dir("Empty");

    log.step("ingesting");
    let store = SqliteStore::open(fixture.db_path()).unwrap();
    let report = Ingestor::new(IngestConfig::default())
        .ingest(&store, fixture.resources_path())
        .unwrap();
    log.log_value("report", &report);

    assert_eq!(report.certifications_created, 3);
    assert_eq!(report.categories_created, 3);
    assert_eq!(report.flashcards_inserted, 4);

    log.step("browsing");
    let catalog = CatalogService::sqlite(&store);
    let names: Vec<String> = catalog
        .list_certifications()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["AWS", "Empty", "GCP"]);

    let empty = catalog.find_certification_by_name("Empty").unwrap().unwrap();
    assert!(catalog.list_categories(empty.id).unwrap().is_empty());

    // Same category name under two certifications stays separate.
    let aws = catalog.find_certification_by_name("AWS").unwrap().unwrap();
    let gcp = catalog.find_certification_by_name("GCP").unwrap().unwrap();
    let aws_iam = catalog.list_categories(aws.id).unwrap();
    let gcp_iam = catalog.list_categories(gcp.id).unwrap();
    let aws_iam = aws_iam.find_category_by_name("IAM").unwrap();
    let gcp_iam = gcp_iam.find_category_by_name("IAM").unwrap();
    assert_ne!(aws_iam.id, gcp_iam.id);

    let service = FlashcardService::sqlite(&store);
    assert_eq!(
        pairs(&service.get_flashcards(aws_iam.id).unwrap()),
        vec![
            ("What is a role?", "An identity"),
            ("What is MFA?", "Second factor")
        ]
    );
    assert_eq!(service.get_flashcards(gcp_iam.id).unwrap().len(), 1);
    log.pass();
}

#[test]
fn test_selector_against_sqlite_store() {
    let fixture = ResourcesFixture::new();
    fixture.create_csv("CertA", "CatX.csv", "Q1,A1\nQ2,A2\n");
    fixture.create_csv("CertB", "CatY.csv", "Q3,A3\n");

    let store = SqliteStore::open(fixture.db_path()).unwrap();
    Ingestor::default()
        .ingest(&store, fixture.resources_path())
        .unwrap();

    let mut selector = Selector::new(
        CatalogService::sqlite(&store),
        FlashcardService::sqlite(&store),
    )
    .unwrap();

    assert!(selector.select_certification("CertA").unwrap());
    assert!(selector.select_category("CatX").unwrap());
    assert_eq!(pairs(selector.flashcards()), vec![("Q1", "A1"), ("Q2", "A2")]);

    assert!(selector.select_certification("CertB").unwrap());
    assert!(selector.flashcards().is_empty());
    assert!(!selector.select_category("CatX").unwrap());
    assert!(selector.select_category("CatY").unwrap());
    assert_eq!(pairs(selector.flashcards()), vec![("Q3", "A3")]);
}

#[test]
fn test_reingest_keeps_natural_keys_unique() {
    let fixture = ResourcesFixture::new();
    fixture.create_csv("CertA", "CatX.csv", "Q1,A1\n");

    let store = SqliteStore::open(fixture.db_path()).unwrap();
    let ingestor = Ingestor::default();
    for _ in 0..3 {
        ingestor.ingest(&store, fixture.resources_path()).unwrap();
    }

    let catalog = CatalogService::sqlite(&store);
    assert_eq!(catalog.list_certifications().unwrap().len(), 1);
    let cert = catalog.find_certification_by_name("CertA").unwrap().unwrap();
    let set = catalog.list_categories(cert.id).unwrap();
    assert_eq!(set.len(), 1);

    let cards = catalog
        .list_flashcards(set.find_category_by_name("CatX").unwrap().id)
        .unwrap();
    assert_eq!(cards.len(), 3);
    let mut ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_store_survives_reopen() {
    let fixture = ResourcesFixture::new();
    fixture.create_csv("CertA", "CatX.csv", "Q1,A1\n");

    {
        let store = SqliteStore::open(fixture.db_path()).unwrap();
        Ingestor::default()
            .ingest(&store, fixture.resources_path())
            .unwrap();
    }

    let reopened = SqliteStore::open(fixture.db_path()).unwrap();
    let catalog = CatalogService::sqlite(&reopened);
    assert!(catalog.find_certification_by_name("CertA").unwrap().is_some());
}
