//! In-memory record store.
//!
//! A `RecordStore` owns four independent collections (documents, workflow
//! items, QR job cards and stats). It is constructed explicitly, usually
//! from seed data, and shared behind an `Arc` by whatever serves requests.
//! Nothing is ever deleted.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

pub mod collection;

pub use collection::Collection;

use crate::error::{SeedError, ValidationError};
use crate::model::{
    Document, DocumentDraft, DocumentPatch, QrCode, QrCodeDraft, QrCodePatch, StatRow,
    WorkflowDraft, WorkflowItem, WorkflowPatch,
};
use crate::seed::SeedData;
use crate::stats;

/// A record held by a [`Collection`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Collection key. The generated id for everything except stats,
    /// which are keyed by metric name.
    fn key(&self) -> &str;

    /// Ordering used by [`Collection::list`].
    fn list_order(_a: &Self, _b: &Self) -> Ordering {
        Ordering::Equal
    }

    /// Refreshes the modification timestamp, if the record has one.
    fn touch(&mut self, now: DateTime<Utc>);
}

/// A creation payload. Defaults for status, stage, priority and timestamps
/// are filled in by `into_record`.
pub trait Draft {
    type Record: Record;

    fn validate(&self) -> Result<(), ValidationError>;

    fn into_record(self, id: String, now: DateTime<Utc>) -> Self::Record;
}

/// A partial update listing exactly the fields that may change.
pub trait Patch<R> {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn apply(self, record: &mut R);
}

pub struct RecordStore {
    documents: Collection<Document>,
    workflow_items: Collection<WorkflowItem>,
    qr_codes: Collection<QrCode>,
    stats: Collection<StatRow>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            documents: Collection::new("documents"),
            workflow_items: Collection::new("workflow items"),
            qr_codes: Collection::new("QR codes"),
            stats: Collection::new("stats"),
        }
    }

    /// Creates a store populated from seed data.
    pub fn from_seed(seed: SeedData) -> Result<Self, SeedError> {
        let store = Self::new();
        seed.populate(&store)?;
        log::info!(
            "Record store seeded: {} documents, {} workflow items, {} QR codes, {} stats",
            store.documents.len(),
            store.workflow_items.len(),
            store.qr_codes.len(),
            store.stats.len()
        );
        Ok(store)
    }

    pub fn documents(&self) -> &Collection<Document> {
        &self.documents
    }

    pub fn workflow_items(&self) -> &Collection<WorkflowItem> {
        &self.workflow_items
    }

    pub fn qr_codes(&self) -> &Collection<QrCode> {
        &self.qr_codes
    }

    pub fn stats(&self) -> &Collection<StatRow> {
        &self.stats
    }

    // ─── Documents ──────────────────────────────────────────────────────────

    pub fn list_documents(&self) -> Vec<Document> {
        self.documents.list()
    }

    pub fn get_document(&self, id: &str) -> Option<Document> {
        self.documents.get(id)
    }

    /// Creates a document and bumps `documents_processed`.
    pub fn create_document(&self, draft: DocumentDraft) -> Result<Document, ValidationError> {
        let doc = self.documents.create(draft)?;
        stats::bump(self, stats::DOCUMENTS_PROCESSED);
        log::info!("Created document {} ({})", doc.id, doc.doc_type);
        Ok(doc)
    }

    pub fn update_document(
        &self,
        id: &str,
        patch: DocumentPatch,
    ) -> Result<Option<Document>, ValidationError> {
        self.documents.update(id, patch)
    }

    // ─── Workflow items ─────────────────────────────────────────────────────

    pub fn list_workflow_items(&self) -> Vec<WorkflowItem> {
        self.workflow_items.list()
    }

    pub fn get_workflow_item(&self, id: &str) -> Option<WorkflowItem> {
        self.workflow_items.get(id)
    }

    pub fn create_workflow_item(
        &self,
        draft: WorkflowDraft,
    ) -> Result<WorkflowItem, ValidationError> {
        let item = self.workflow_items.create(draft)?;
        log::info!(
            "Created workflow item {} at stage {}",
            item.id,
            item.current_stage
        );
        Ok(item)
    }

    pub fn update_workflow_item(
        &self,
        id: &str,
        patch: WorkflowPatch,
    ) -> Result<Option<WorkflowItem>, ValidationError> {
        self.workflow_items.update(id, patch)
    }

    // ─── QR codes ───────────────────────────────────────────────────────────

    pub fn list_qr_codes(&self) -> Vec<QrCode> {
        self.qr_codes.list()
    }

    pub fn get_qr_code(&self, id: &str) -> Option<QrCode> {
        self.qr_codes.get(id)
    }

    /// Codes are not unique; the first job card inserted with this code
    /// wins, even though newer cards list before it.
    pub fn get_qr_code_by_code(&self, code: &str) -> Option<QrCode> {
        self.qr_codes.find(|qr| qr.code == code)
    }

    pub fn create_qr_code(&self, draft: QrCodeDraft) -> Result<QrCode, ValidationError> {
        let qr = self.qr_codes.create(draft)?;
        log::info!("Created QR job card {} ({})", qr.code, qr.id);
        Ok(qr)
    }

    pub fn update_qr_code(
        &self,
        id: &str,
        patch: QrCodePatch,
    ) -> Result<Option<QrCode>, ValidationError> {
        self.qr_codes.update(id, patch)
    }
}
