//! Documents: uploaded or seeded files with a classification and summary.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::require_text;
use crate::error::ValidationError;
use crate::store::{Draft, Patch, Record};

/// Document category used for routing and search filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Maintenance,
    Safety,
    Finance,
    Hr,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Maintenance,
        DocumentType::Safety,
        DocumentType::Finance,
        DocumentType::Hr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Maintenance => "maintenance",
            DocumentType::Safety => "safety",
            DocumentType::Finance => "finance",
            DocumentType::Hr => "hr",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    "type",
                    format!("unknown document type '{}' (expected maintenance, safety, finance or hr)", s),
                )
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Active,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub department: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub summary: String,
    /// Full text, when known.
    pub content: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub status: DocumentStatus,
}

impl Record for Document {
    fn key(&self) -> &str {
        &self.id
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        b.uploaded_at.cmp(&a.uploaded_at)
    }

    // Documents carry no modification timestamp.
    fn touch(&mut self, _now: DateTime<Utc>) {}
}

/// Payload for creating a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocumentDraft {
    pub title: String,
    pub department: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub summary: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
}

impl Draft for DocumentDraft {
    type Record = Document;

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("department", &self.department)?;
        require_text("summary", &self.summary)
    }

    fn into_record(self, id: String, now: DateTime<Utc>) -> Document {
        Document {
            id,
            title: self.title,
            department: self.department,
            doc_type: self.doc_type,
            summary: self.summary,
            content: self.content,
            uploaded_at: now,
            status: self.status.unwrap_or_default(),
        }
    }
}

/// The mutable subset of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocumentPatch {
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Patch<Document> for DocumentPatch {
    fn apply(self, doc: &mut Document) {
        if let Some(status) = self.status {
            doc.status = status;
        }
        if let Some(content) = self.content {
            doc.content = Some(content);
        }
    }
}
