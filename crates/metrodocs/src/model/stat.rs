use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// One named dashboard metric. The value is an integer kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRow {
    pub id: String,
    pub metric: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl StatRow {
    pub fn parsed_value(&self) -> Option<i64> {
        self.value.trim().parse().ok()
    }
}

impl Record for StatRow {
    fn key(&self) -> &str {
        &self.metric
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        a.metric.cmp(&b.metric)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
