//! Upload intake and simulated job-card scans.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info_span;

use crate::classifier::Classifier;
use crate::error::IntakeError;
use crate::model::{Document, DocumentDraft, DocumentStatus, QrStatus};
use crate::store::RecordStore;

/// Upload limit applied when the configuration does not set one.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Classification details echoed back to the uploader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingSummary {
    pub classification: String,
    pub summary: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub document: Document,
    pub processing: ProcessingSummary,
}

/// Classifies an uploaded file and stores it as a new active document.
///
/// The document counts towards `documents_processed` like any other
/// created document.
pub fn ingest_upload(
    store: &RecordStore,
    classifier: &dyn Classifier,
    filename: &str,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<UploadOutcome, IntakeError> {
    let _span = info_span!("intake.upload", filename, size = bytes.len()).entered();

    let filename = filename.trim();
    if filename.is_empty() || bytes.is_empty() {
        return Err(IntakeError::NoFile);
    }
    if bytes.len() > max_bytes {
        log::warn!(
            "Rejected upload '{}': {} bytes exceeds {} byte limit",
            filename,
            bytes.len(),
            max_bytes
        );
        return Err(IntakeError::TooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    let classification = classifier.classify(filename, bytes);
    let draft = DocumentDraft {
        title: format!("{} - {}", classification.label, filename),
        department: classification.department.clone(),
        doc_type: classification.category,
        summary: classification.summary.clone(),
        content: Some(format!("Uploaded file: {} ({} bytes)", filename, bytes.len())),
        status: Some(DocumentStatus::Active),
    };
    let document = store.create_document(draft)?;

    log::info!(
        "Ingested '{}' as {} via {} classifier",
        filename,
        classification.label,
        classifier.name()
    );

    Ok(UploadOutcome {
        document,
        processing: ProcessingSummary {
            classification: classification.label,
            summary: classification.summary,
            department: classification.department,
        },
    })
}

/// What a scanner shows after reading a job-card code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// The scanned code, e.g. `MJC-2025-892`.
    pub document_id: String,
    pub title: String,
    pub equipment: String,
    pub status: QrStatus,
    pub description: String,
}

/// Stands in for a camera scan by picking a random stored job card.
/// Returns `None` when there are no job cards.
pub fn simulate_scan<R: Rng + ?Sized>(store: &RecordStore, rng: &mut R) -> Option<ScanResult> {
    let cards = store.list_qr_codes();
    let card = cards.choose(rng)?;
    log::debug!("Simulated scan of {}", card.code);
    Some(ScanResult {
        document_id: card.code.clone(),
        title: card.title.clone(),
        equipment: card.equipment.clone(),
        status: card.status,
        description: card.description.clone(),
    })
}
