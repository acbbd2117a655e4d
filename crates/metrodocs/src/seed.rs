//! Seed fixtures loaded once at startup.
//!
//! A fixture is one JSON object holding four arrays: `documents`,
//! `workflowItems`, `qrCodes` and `stats`. Records omit ids; timestamps are
//! optional and default to load time. Any malformed record fails the whole
//! load.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{SeedError, ValidationError};
use crate::model::{
    DocumentDraft, DocumentStatus, DocumentType, Priority, QrCodeDraft, QrStatus, Stage,
    WorkflowDraft,
};
use crate::stats;
use crate::store::{Draft, RecordStore};

const BUILTIN_SEED: &str = include_str!("../fixtures/seed.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedData {
    pub documents: Vec<SeedDocument>,
    pub workflow_items: Vec<SeedWorkflowItem>,
    pub qr_codes: Vec<SeedQrCode>,
    pub stats: Vec<SeedStat>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedDocument {
    pub title: String,
    pub department: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub summary: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl SeedDocument {
    fn draft(&self) -> DocumentDraft {
        DocumentDraft {
            title: self.title.clone(),
            department: self.department.clone(),
            doc_type: self.doc_type,
            summary: self.summary.clone(),
            content: self.content.clone(),
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedWorkflowItem {
    pub title: String,
    pub description: String,
    pub department: String,
    #[serde(default)]
    pub current_stage: Option<Stage>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SeedWorkflowItem {
    fn draft(&self) -> WorkflowDraft {
        WorkflowDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            department: self.department.clone(),
            current_stage: self.current_stage,
            priority: self.priority,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedQrCode {
    pub code: String,
    pub title: String,
    pub equipment: String,
    pub description: String,
    #[serde(default)]
    pub status: Option<QrStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SeedQrCode {
    fn draft(&self) -> QrCodeDraft {
        QrCodeDraft {
            code: self.code.clone(),
            title: self.title.clone(),
            equipment: self.equipment.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }
}

/// Stat values may be written as JSON strings or integers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeedStatValue {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedStat {
    pub metric: String,
    pub value: SeedStatValue,
}

impl SeedStat {
    fn text_value(&self) -> String {
        match &self.value {
            SeedStatValue::Number(n) => n.to_string(),
            SeedStatValue::Text(s) => s.trim().to_string(),
        }
    }
}

fn invalid(collection: &'static str, index: usize) -> impl FnOnce(ValidationError) -> SeedError {
    move |source| SeedError::InvalidRecord {
        collection,
        index,
        source,
    }
}

impl SeedData {
    /// The fixture compiled into the crate: six documents, four workflow
    /// items, three job cards and four dashboard metrics.
    pub fn builtin() -> Result<Self, SeedError> {
        load_seed_from_str(BUILTIN_SEED)
    }

    /// Checks every record without touching a store.
    pub fn validate(&self) -> Result<(), SeedError> {
        for (i, doc) in self.documents.iter().enumerate() {
            doc.draft().validate().map_err(invalid("document", i))?;
        }
        for (i, item) in self.workflow_items.iter().enumerate() {
            item.draft().validate().map_err(invalid("workflow item", i))?;
        }
        for (i, qr) in self.qr_codes.iter().enumerate() {
            qr.draft().validate().map_err(invalid("QR code", i))?;
        }

        let mut metrics = HashSet::new();
        for (i, stat) in self.stats.iter().enumerate() {
            if stat.metric.trim().is_empty() {
                return Err(invalid("stat", i)(ValidationError::blank("metric")));
            }
            if stat.text_value().parse::<i64>().is_err() {
                return Err(invalid("stat", i)(ValidationError::new(
                    "value",
                    format!("'{}' is not an integer", stat.text_value()),
                )));
            }
            if !metrics.insert(stat.metric.as_str()) {
                return Err(SeedError::DuplicateMetric(stat.metric.clone()));
            }
        }

        Ok(())
    }

    /// Inserts every record into the store in fixture order. Does not bump
    /// `documents_processed`.
    pub fn populate(self, store: &RecordStore) -> Result<(), SeedError> {
        self.validate()?;
        let now = Utc::now();

        for (i, doc) in self.documents.iter().enumerate() {
            store
                .documents()
                .create_at(doc.draft(), doc.uploaded_at.unwrap_or(now))
                .map_err(invalid("document", i))?;
        }

        for (i, seed) in self.workflow_items.iter().enumerate() {
            let mut item = store
                .workflow_items()
                .create_at(seed.draft(), seed.submitted_at.unwrap_or(now))
                .map_err(invalid("workflow item", i))?;
            if let Some(updated_at) = seed.updated_at {
                item.updated_at = updated_at;
                store.workflow_items().insert(item);
            }
        }

        for (i, seed) in self.qr_codes.iter().enumerate() {
            let mut qr = store
                .qr_codes()
                .create_at(seed.draft(), seed.created_at.unwrap_or(now))
                .map_err(invalid("QR code", i))?;
            if let Some(updated_at) = seed.updated_at {
                qr.updated_at = updated_at;
                store.qr_codes().insert(qr);
            }
        }

        for stat in &self.stats {
            stats::set(store, &stat.metric, &stat.text_value());
        }

        Ok(())
    }
}

pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedData, SeedError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| SeedError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let seed = load_seed_from_str(&content)?;
    log::info!("Loaded seed fixture from {}", path.display());
    Ok(seed)
}

pub fn load_seed_from_str(content: &str) -> Result<SeedData, SeedError> {
    let seed: SeedData = serde_json::from_str(content)?;
    seed.validate()?;
    Ok(seed)
}
