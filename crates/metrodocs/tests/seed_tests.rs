//! Loading seed fixtures from disk.

use std::io::Write;

use metrodocs::seed::load_seed_from_str;
use metrodocs::{load_seed, QrStatus, RecordStore, SeedData, SeedError};

const MINIMAL_SEED: &str = r#"{
    "documents": [],
    "workflowItems": [],
    "qrCodes": [
        {
            "code": "MJC-2030-001",
            "title": "Job Card",
            "equipment": "Lift 2",
            "description": "Door sensor check"
        }
    ],
    "stats": [{ "metric": "documents_processed", "value": 5 }]
}"#;

#[test]
fn test_builtin_fixture_populates_every_collection() {
    let store = RecordStore::from_seed(SeedData::builtin().unwrap()).unwrap();
    assert_eq!(store.documents().len(), 6);
    assert_eq!(store.workflow_items().len(), 4);
    assert_eq!(store.qr_codes().len(), 3);
    assert_eq!(store.stats().len(), 4);

    let codes: Vec<String> = store.list_qr_codes().into_iter().map(|qr| qr.code).collect();
    assert_eq!(codes, ["MJC-2025-892", "MJC-2025-893", "MJC-2025-891"]);

    let done = store.get_qr_code_by_code("MJC-2025-891").unwrap();
    assert_eq!(done.status, QrStatus::Completed);
    assert!(done.updated_at > done.created_at);
}

#[test]
fn test_load_seed_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", MINIMAL_SEED).unwrap();

    let store = RecordStore::from_seed(load_seed(file.path()).unwrap()).unwrap();
    let qr = store.get_qr_code_by_code("MJC-2030-001").unwrap();
    assert_eq!(qr.status, QrStatus::Pending);
    assert_eq!(metrodocs::stats::get(&store, "documents_processed"), Some(5));
}

#[test]
fn test_missing_seed_file_is_fatal() {
    let result = load_seed("/nonexistent/metrodocs-seed.json");
    assert!(matches!(result, Err(SeedError::ReadFile { .. })));
}

#[test]
fn test_missing_collection_is_rejected() {
    let result = load_seed_from_str(r#"{"documents": [], "workflowItems": [], "qrCodes": []}"#);
    assert!(matches!(result, Err(SeedError::ParseJson(_))));
}

#[test]
fn test_invalid_record_names_collection_and_index() {
    let seed = r#"{
        "documents": [],
        "workflowItems": [],
        "qrCodes": [
            { "code": "A", "title": "ok", "equipment": "x", "description": "y" },
            { "code": "", "title": "bad", "equipment": "x", "description": "y" }
        ],
        "stats": []
    }"#;
    match load_seed_from_str(seed) {
        Err(SeedError::InvalidRecord {
            collection, index, ..
        }) => {
            assert_eq!(collection, "QR code");
            assert_eq!(index, 1);
        }
        other => panic!("expected invalid record, got {:?}", other),
    }
}
