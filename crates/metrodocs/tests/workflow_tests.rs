//! Workflow lifecycle and derived-counter tests.

mod common;

use common::{seeded_store, DocumentBuilder, WorkflowBuilder};
use metrodocs::stats::{self, DOCUMENTS_PROCESSED};
use metrodocs::{RecordStore, Stage, WorkflowEngine, WorkflowError, WorkflowPatch};

#[test]
fn test_approve_four_times_reaches_complete() {
    let store = RecordStore::new();
    let item = store
        .create_workflow_item(WorkflowBuilder::new("Signal upgrade").build())
        .unwrap();
    assert_eq!(item.current_stage, Stage::Submitted);

    let engine = WorkflowEngine::new(&store);
    let stages: Vec<Stage> = (0..4)
        .map(|_| engine.approve(&item.id).unwrap().current_stage)
        .collect();
    assert_eq!(
        stages,
        [Stage::Review, Stage::Approved, Stage::Complete, Stage::Complete]
    );
}

#[test]
fn test_reject_returns_to_submitted_from_any_stage() {
    let store = RecordStore::new();
    let engine = WorkflowEngine::new(&store);

    for stage in Stage::ORDER {
        let item = store
            .create_workflow_item(WorkflowBuilder::new("Budget").stage(stage).build())
            .unwrap();
        let rejected = engine.reject(&item.id).unwrap();
        assert_eq!(
            rejected.current_stage,
            Stage::Submitted,
            "reject from {}",
            stage
        );
        assert!(rejected.updated_at >= item.updated_at);
    }
}

#[test]
fn test_unknown_id_is_not_found() {
    let store = seeded_store();
    let engine = WorkflowEngine::new(&store);
    assert_eq!(
        engine.approve("missing"),
        Err(WorkflowError::NotFound("missing".to_string()))
    );
    assert!(engine.reject("missing").is_err());
    assert_eq!(
        store
            .update_workflow_item("missing", WorkflowPatch::stage(Stage::Review))
            .unwrap(),
        None
    );
}

#[test]
fn test_pending_excludes_complete_and_keeps_order() {
    let store = seeded_store();
    let engine = WorkflowEngine::new(&store);

    let before = engine.pending_items();
    assert_eq!(before.len(), 4);

    let done = store
        .create_workflow_item(WorkflowBuilder::new("Closed out").stage(Stage::Complete).build())
        .unwrap();
    let pending = engine.pending_items();
    assert_eq!(pending, before);
    assert!(pending.iter().all(|item| item.id != done.id));

    let urgent: Vec<String> = engine
        .urgent_pending()
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(
        urgent,
        [
            "Safety Audit Report - Q1 2025",
            "Budget Revision - Infrastructure Upgrades"
        ]
    );
}

#[test]
fn test_direct_stage_write_is_not_guarded() {
    let store = RecordStore::new();
    let item = store
        .create_workflow_item(WorkflowBuilder::new("Skip ahead").urgent().build())
        .unwrap();
    let updated = store
        .update_workflow_item(&item.id, WorkflowPatch::stage(Stage::Complete))
        .unwrap()
        .unwrap();
    assert_eq!(updated.current_stage, Stage::Complete);
    assert_eq!(updated.title, "Skip ahead");
    assert!(WorkflowEngine::new(&store).pending_items().is_empty());
}

#[test]
fn test_document_creation_bumps_seeded_counter() {
    let store = seeded_store();
    assert_eq!(stats::get(&store, DOCUMENTS_PROCESSED), Some(2847));

    for i in 0..3 {
        store
            .create_document(DocumentBuilder::new(&format!("Report {}", i)).build())
            .unwrap();
    }
    assert_eq!(stats::get(&store, DOCUMENTS_PROCESSED), Some(2850));
    assert_eq!(stats::get(&store, "pending_approvals"), Some(23));
}

#[test]
fn test_invalid_document_leaves_counter_alone() {
    let store = seeded_store();
    let err = store
        .create_document(DocumentBuilder::new("   ").build())
        .unwrap_err();
    assert_eq!(err.field, "title");
    assert_eq!(stats::get(&store, DOCUMENTS_PROCESSED), Some(2847));
    assert_eq!(store.list_documents().len(), 6);
}
