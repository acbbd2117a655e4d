use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetrodocsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),
}

/// A rejected creation payload, patch or filter, naming the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid field '{field}': {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a required text field that was empty or whitespace.
    pub fn blank(field: &str) -> Self {
        Self::new(field, "must not be blank")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Workflow item not found: {0}")]
    NotFound(String),

    #[error("Invalid workflow transition: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed fixture '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Invalid {collection} record at index {index}: {source}")]
    InvalidRecord {
        collection: &'static str,
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Duplicate stat metric '{0}'")]
    DuplicateMetric(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Upload of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("Upload rejected: {0}")]
    Invalid(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, MetrodocsError>;
