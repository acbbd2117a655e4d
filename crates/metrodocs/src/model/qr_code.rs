//! Maintenance job cards addressed by a printed QR code.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_optional_text, require_text};
use crate::error::ValidationError;
use crate::store::{Draft, Patch, Record};

/// Job card status. Unordered; any value may replace any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    pub id: String,
    /// Printed code content, e.g. `MJC-2025-892`. Expected but not enforced unique.
    pub code: String,
    pub title: String,
    pub equipment: String,
    pub status: QrStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for QrCode {
    fn key(&self) -> &str {
        &self.id
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QrCodeDraft {
    pub code: String,
    pub title: String,
    pub equipment: String,
    pub description: String,
    #[serde(default)]
    pub status: Option<QrStatus>,
}

impl Draft for QrCodeDraft {
    type Record = QrCode;

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("code", &self.code)?;
        require_text("title", &self.title)?;
        require_text("equipment", &self.equipment)?;
        require_text("description", &self.description)
    }

    fn into_record(self, id: String, now: DateTime<Utc>) -> QrCode {
        QrCode {
            id,
            code: self.code,
            title: self.title,
            equipment: self.equipment,
            status: self.status.unwrap_or_default(),
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QrCodePatch {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub status: Option<QrStatus>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Patch<QrCode> for QrCodePatch {
    fn validate(&self) -> Result<(), ValidationError> {
        require_optional_text("code", self.code.as_deref())?;
        require_optional_text("title", self.title.as_deref())?;
        require_optional_text("equipment", self.equipment.as_deref())?;
        require_optional_text("description", self.description.as_deref())
    }

    fn apply(self, qr: &mut QrCode) {
        if let Some(code) = self.code {
            qr.code = code;
        }
        if let Some(title) = self.title {
            qr.title = title;
        }
        if let Some(equipment) = self.equipment {
            qr.equipment = equipment;
        }
        if let Some(status) = self.status {
            qr.status = status;
        }
        if let Some(description) = self.description {
            qr.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(QrStatus::InProgress).unwrap(),
            serde_json::json!("in_progress")
        );
        let s: QrStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(s, QrStatus::Completed);
    }

    #[test]
    fn test_status_moves_freely() {
        let mut qr = QrCodeDraft {
            code: "MJC-1".to_string(),
            title: "Card".to_string(),
            equipment: "Car 1".to_string(),
            description: "Brakes".to_string(),
            status: Some(QrStatus::Completed),
        }
        .into_record("q1".to_string(), Utc::now());

        QrCodePatch {
            status: Some(QrStatus::Pending),
            ..Default::default()
        }
        .apply(&mut qr);
        assert_eq!(qr.status, QrStatus::Pending);
    }

    #[test]
    fn test_draft_requires_code() {
        let draft = QrCodeDraft {
            code: String::new(),
            title: "Card".to_string(),
            equipment: "Car 1".to_string(),
            description: "Brakes".to_string(),
            status: None,
        };
        assert_eq!(draft.validate().unwrap_err().field, "code");
    }
}
