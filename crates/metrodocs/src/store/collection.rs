//! Generic keyed collection backing every record type.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Draft, Patch, Record};
use crate::error::ValidationError;

struct Inner<R> {
    records: HashMap<String, R>,
    /// Keys in first-insertion order; used to break list-order ties.
    order: Vec<String>,
}

impl<R: Record> Inner<R> {
    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.records.contains_key(&id) {
                return id;
            }
        }
    }

    fn put(&mut self, record: R) {
        let key = record.key().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }
}

/// In-memory collection of one record type.
///
/// Uses `std::sync::RwLock`; every operation holds the lock only for the
/// duration of a map access. Two overlapping updates of the same record
/// are applied one after the other, so the later one wins.
pub struct Collection<R> {
    name: &'static str,
    inner: RwLock<Inner<R>>,
}

impl<R: Record> Collection<R> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Inner {
                records: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner<R>> {
        match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("{} collection lock was poisoned, recovering", self.name);
                poisoned.into_inner()
            }
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<R>> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("{} collection lock was poisoned, recovering", self.name);
                poisoned.into_inner()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates the draft, assigns a fresh id and inserts the new record.
    pub fn create<D>(&self, draft: D) -> Result<R, ValidationError>
    where
        D: Draft<Record = R>,
    {
        self.create_at(draft, Utc::now())
    }

    /// Like [`create`](Self::create) with an explicit creation time.
    pub fn create_at<D>(&self, draft: D, now: DateTime<Utc>) -> Result<R, ValidationError>
    where
        D: Draft<Record = R>,
    {
        draft.validate()?;
        let mut inner = self.write();
        let id = inner.fresh_id();
        let record = draft.into_record(id, now);
        inner.put(record.clone());
        Ok(record)
    }

    pub fn get(&self, key: &str) -> Option<R> {
        self.read().records.get(key).cloned()
    }

    /// All records in the collection's list order. Ties go to the most
    /// recently inserted record.
    pub fn list(&self) -> Vec<R> {
        let inner = self.read();
        let mut records: Vec<R> = inner
            .order
            .iter()
            .rev()
            .filter_map(|key| inner.records.get(key).cloned())
            .collect();
        drop(inner);
        records.sort_by(R::list_order);
        records
    }

    /// Earliest inserted record matching the predicate, regardless of list
    /// order.
    pub fn find<F>(&self, predicate: F) -> Option<R>
    where
        F: Fn(&R) -> bool,
    {
        let inner = self.read();
        inner
            .order
            .iter()
            .filter_map(|key| inner.records.get(key))
            .find(|r| predicate(r))
            .cloned()
    }

    /// Applies a patch and refreshes the modification time.
    ///
    /// Returns `Ok(None)` when no record has this key; the collection is
    /// left untouched in that case.
    pub fn update<P>(&self, key: &str, patch: P) -> Result<Option<R>, ValidationError>
    where
        P: Patch<R>,
    {
        self.update_with(key, move |_| patch)
    }

    /// Builds a patch from the current record and applies it under a single
    /// write lock.
    pub fn update_with<P, F>(&self, key: &str, make_patch: F) -> Result<Option<R>, ValidationError>
    where
        P: Patch<R>,
        F: FnOnce(&R) -> P,
    {
        let mut inner = self.write();
        let Some(record) = inner.records.get_mut(key) else {
            return Ok(None);
        };
        let patch = make_patch(record);
        patch.validate()?;
        patch.apply(record);
        record.touch(Utc::now());
        Ok(Some(record.clone()))
    }

    /// Inserts or replaces the record stored under `key`. The closure sees
    /// the existing record, if any, and returns the replacement, whose key
    /// must be `key`.
    pub fn upsert_with<F>(&self, key: &str, build: F) -> R
    where
        F: FnOnce(Option<&R>) -> R,
    {
        let mut inner = self.write();
        let record = build(inner.records.get(key));
        debug_assert_eq!(record.key(), key);
        inner.put(record.clone());
        record
    }

    /// Inserts a fully formed record, replacing any record with the same key.
    pub(crate) fn insert(&self, record: R) {
        self.write().put(record);
    }
}
