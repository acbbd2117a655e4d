//! Shared helpers for metrodocs integration tests.

pub mod builders;

pub use builders::*;

use metrodocs::{RecordStore, SeedData};

/// A store populated from the built-in fixture.
pub fn seeded_store() -> RecordStore {
    RecordStore::from_seed(SeedData::builtin().unwrap()).unwrap()
}
