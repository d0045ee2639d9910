use std::collections::HashSet;

use chrono::Utc;
use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

use super::{
    AttemptSink,
    ItemSource,
};
use crate::core::{
    AttemptRecord,
    Bucket,
    Item,
    KakitoriError,
    NewAttempt,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolEntry {
    pub item: Item,
    pub is_active: bool,
}

/// In-memory item pool and attempt log. Backs the tests, and a presentation
/// layer can embed it directly when no external database is wired up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    entries: Vec<PoolEntry>,
    attempts: Vec<AttemptRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item, is_active: bool) {
        self.entries.push(PoolEntry { item, is_active });
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    pub fn item_count(&self) -> usize {
        self.entries.len()
    }
}

impl ItemSource for MemoryStore {
    /// Active items only, mirroring the backend's `is_active` filter.
    fn fetch_pool(&self, bucket: Bucket) -> Result<Vec<Item>, KakitoriError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.is_active && entry.item.bucket == bucket)
            .map(|entry| entry.item.clone())
            .collect())
    }
}

impl AttemptSink for MemoryStore {
    fn fetch_attempted_ids(
        &self,
        learner_id: &str,
        bucket: Bucket,
    ) -> Result<HashSet<String>, KakitoriError> {
        Ok(self
            .attempts
            .iter()
            .filter(|record| {
                record.attempt.learner_id == learner_id && record.attempt.bucket == bucket
            })
            .map(|record| record.attempt.item_id.clone())
            .collect())
    }

    fn insert_attempt(&mut self, attempt: NewAttempt) -> Result<AttemptRecord, KakitoriError> {
        let record = AttemptRecord { id: Uuid::new_v4(), created_at: Utc::now(), attempt };
        self.attempts.push(record.clone());
        Ok(record)
    }
}
