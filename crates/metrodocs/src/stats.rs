//! Dashboard statistics: a flat metric name → integer-as-text table.

use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::model::StatRow;
use crate::store::RecordStore;

/// Incremented once per successful document creation.
pub const DOCUMENTS_PROCESSED: &str = "documents_processed";

/// Increments a metric by one, treating an absent or unparseable value as 0.
/// A metric already at `i64::MAX` stays there.
///
/// The read and the write happen under one lock, so concurrent bumps are
/// never lost. The row keeps its id across updates.
pub fn bump(store: &RecordStore, metric: &str) -> StatRow {
    store.stats().upsert_with(metric, |existing| {
        let current = match existing {
            Some(row) => row.parsed_value().unwrap_or_else(|| {
                log::warn!(
                    "Stat '{}' has non-numeric value '{}', restarting from 0",
                    metric,
                    row.value
                );
                0
            }),
            None => 0,
        };
        let next = current.checked_add(1).unwrap_or_else(|| {
            log::warn!("Stat '{}' is at its maximum value, not incrementing", metric);
            current
        });
        StatRow {
            id: existing
                .map(|row| row.id.clone())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            metric: metric.to_string(),
            value: next.to_string(),
            updated_at: Utc::now(),
        }
    })
}

/// Writes a raw metric value.
pub fn set(store: &RecordStore, metric: &str, value: &str) -> StatRow {
    store.stats().upsert_with(metric, |existing| StatRow {
        id: existing
            .map(|row| row.id.clone())
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        metric: metric.to_string(),
        value: value.to_string(),
        updated_at: Utc::now(),
    })
}

/// Parsed value of one metric.
pub fn get(store: &RecordStore, metric: &str) -> Option<i64> {
    store.stats().get(metric).and_then(|row| row.parsed_value())
}

/// Every metric with a numeric value, keyed by name.
pub fn get_all(store: &RecordStore) -> BTreeMap<String, i64> {
    store
        .stats()
        .list()
        .into_iter()
        .filter_map(|row| match row.parsed_value() {
            Some(value) => Some((row.metric, value)),
            None => {
                log::warn!("Skipping stat '{}' with non-numeric value '{}'", row.metric, row.value);
                None
            }
        })
        .collect()
}
