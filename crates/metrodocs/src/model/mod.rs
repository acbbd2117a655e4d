//! Typed records, their creation drafts and their patches.

pub mod document;
pub mod qr_code;
pub mod stat;
pub mod workflow;

pub use document::{Document, DocumentDraft, DocumentPatch, DocumentStatus, DocumentType};
pub use qr_code::{QrCode, QrCodeDraft, QrCodePatch, QrStatus};
pub use stat::StatRow;
pub use workflow::{Priority, Stage, WorkflowDraft, WorkflowItem, WorkflowPatch};

use crate::error::ValidationError;

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::blank(field));
    }
    Ok(())
}

pub(crate) fn require_optional_text(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}
