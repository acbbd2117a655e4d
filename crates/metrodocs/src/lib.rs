pub mod classifier;
pub mod config;
pub mod error;
pub mod intake;
pub mod logging;
pub mod model;
pub mod search;
pub mod seed;
pub mod stats;
pub mod store;
pub mod workflow;

pub use classifier::{Classification, Classifier, ClassifierKind, KeywordClassifier, RandomClassifier};
pub use config::{load_config, resolve_config, ServerConfig};
pub use error::{
    ConfigError, IntakeError, MetrodocsError, Result, SeedError, ValidationError, WorkflowError,
};
pub use intake::{ingest_upload, simulate_scan, ScanResult, UploadOutcome};
pub use model::{
    Document, DocumentDraft, DocumentPatch, DocumentStatus, DocumentType, Priority, QrCode,
    QrCodeDraft, QrCodePatch, QrStatus, Stage, StatRow, WorkflowDraft, WorkflowItem,
    WorkflowPatch,
};
pub use search::{search, search_documents, SearchParams, SearchResult, TypeFilter};
pub use seed::{load_seed, SeedData};
pub use store::{Collection, RecordStore};
pub use workflow::WorkflowEngine;
