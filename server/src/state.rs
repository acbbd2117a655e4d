//! Shared request state.

use std::sync::Arc;

use metrodocs::{Classifier, RecordStore, SeedData, ServerConfig};

use crate::error::ServerError;

/// State handed to every handler. Cloning is cheap (inner `Arc`s).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub classifier: Arc<dyn Classifier>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(store: RecordStore, classifier: Box<dyn Classifier>, max_upload_bytes: usize) -> Self {
        Self {
            store: Arc::new(store),
            classifier: Arc::from(classifier),
            max_upload_bytes,
        }
    }

    /// Loads the configured seed fixture (or the built-in one) and builds
    /// the configured classifier.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ServerError> {
        let seed = match &config.seed_path {
            Some(path) => metrodocs::load_seed(path)?,
            None => {
                log::info!("No seed path configured, using built-in fixture");
                SeedData::builtin()?
            }
        };
        let store = RecordStore::from_seed(seed)?;
        let classifier = config.classifier.build();
        log::info!("Using {} classifier", classifier.name());

        Ok(Self::new(store, classifier, config.max_upload_bytes))
    }
}
