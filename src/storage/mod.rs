use std::collections::HashSet;

use crate::core::{
    AttemptRecord,
    Bucket,
    Item,
    KakitoriError,
    NewAttempt,
};

pub mod memory;

pub use memory::MemoryStore;

/// Source of practice items. The production backend is an external database;
/// the core only assumes it can get the active items for a bucket, in no
/// particular order.
pub trait ItemSource {
    fn fetch_pool(&self, bucket: Bucket) -> Result<Vec<Item>, KakitoriError>;
}

/// Attempt history: which items a learner has ever self-graded in a bucket
/// ("ever", not "today"), and where new attempts get recorded.
pub trait AttemptSink {
    fn fetch_attempted_ids(
        &self,
        learner_id: &str,
        bucket: Bucket,
    ) -> Result<HashSet<String>, KakitoriError>;

    fn insert_attempt(&mut self, attempt: NewAttempt) -> Result<AttemptRecord, KakitoriError>;
}
