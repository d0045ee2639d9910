use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::{
        Bucket,
        Item,
        KakitoriError,
        NewAttempt,
        SelfGrade,
    },
    drill::select::select_daily_set,
    storage::{
        AttemptSink,
        ItemSource,
    },
};

/// Identifies which daily queue is active. A session is valid for exactly
/// one signature; when any field changes the queue must be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillSignature {
    pub learner_id: String,
    pub day: String,
    pub bucket: Bucket,
}

impl DrillSignature {
    pub fn new(learner_id: impl Into<String>, day: impl Into<String>, bucket: Bucket) -> Self {
        Self { learner_id: learner_id.into(), day: day.into(), bucket }
    }

    pub fn key(&self) -> String {
        format!("{}|{}|{}", self.learner_id, self.day, self.bucket)
    }
}

/// One walk through a daily queue: position, whether the answer for the
/// current item is revealed, and the learner's saved canvas capture.
///
/// Everything the presentation layer needs between renders lives here
/// explicitly; the selector itself stays stateless.
#[derive(Debug, Clone)]
pub struct DrillSession {
    signature: DrillSignature,
    queue: Vec<Item>,
    position: usize,
    revealed: bool,
    last_drawing: Option<String>,
}

impl DrillSession {
    /// Run the daily selector for this signature and start at the first item.
    pub fn build(
        signature: DrillSignature,
        pool: Vec<Item>,
        attempted_ids: &HashSet<String>,
        count: usize,
    ) -> Result<Self, KakitoriError> {
        let queue = select_daily_set(
            &signature.learner_id,
            &signature.day,
            signature.bucket,
            pool,
            attempted_ids,
            count,
        )?;
        Ok(Self { signature, queue, position: 0, revealed: false, last_drawing: None })
    }

    pub fn signature(&self) -> &DrillSignature {
        &self.signature
    }

    pub fn queue(&self) -> &[Item] {
        &self.queue
    }

    /// The item being drilled, or `None` once the queue is finished.
    pub fn current(&self) -> Option<&Item> {
        self.queue.get(self.position)
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.queue.len()
    }

    /// (1-based position clamped to the queue length, total). For "3 / 10"
    /// style progress displays.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.queue.len();
        ((self.position + 1).min(total.max(1)), total)
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Show the correct answer for the current item. No effect after the
    /// queue is finished.
    pub fn reveal(&mut self) {
        if !self.is_complete() {
            self.revealed = true;
        }
    }

    /// Stash the learner's handwriting capture for the current item. The
    /// payload is an opaque base64 PNG from the canvas component.
    pub fn save_drawing(&mut self, png_b64: String) {
        self.last_drawing = Some(png_b64);
    }

    pub fn last_drawing(&self) -> Option<&str> {
        self.last_drawing.as_deref()
    }

    /// Move to the next item without recording anything.
    pub fn skip(&mut self) {
        if !self.is_complete() {
            self.position += 1;
            self.revealed = false;
            self.last_drawing = None;
        }
    }

    /// Record the learner's self-judgment for the current item and advance.
    ///
    /// Returns the attempt for the caller to persist, carrying the saved
    /// drawing only when `include_drawing` is set (it can be large, so
    /// storing it is opt-in). Returns `None` once the queue is finished.
    pub fn grade(
        &mut self,
        self_grade: SelfGrade,
        learner_email: &str,
        include_drawing: bool,
    ) -> Option<NewAttempt> {
        let item = self.queue.get(self.position)?;
        let attempt = NewAttempt {
            learner_id: self.signature.learner_id.clone(),
            learner_email: learner_email.to_string(),
            item_id: item.id.clone(),
            bucket: item.bucket,
            level: item.level.clone(),
            self_grade,
            drawing_png_b64: if include_drawing { self.last_drawing.take() } else { None },
        };
        self.skip();
        Some(attempt)
    }

    /// Rewind to the start of the same queue, e.g. to review today's set
    /// again after finishing it. The queue itself is not rebuilt.
    pub fn restart(&mut self) {
        self.position = 0;
        self.revealed = false;
        self.last_drawing = None;
    }
}

/// Recomputation trigger: reuse `existing` if its signature still matches,
/// otherwise fetch the pool and attempt history and build a new session.
///
/// Rebuilding with unchanged inputs would yield the identical queue anyway;
/// the signature check just avoids the store round-trips.
pub fn ensure_session<S>(
    existing: Option<DrillSession>,
    store: &S,
    signature: DrillSignature,
    count: usize,
) -> Result<DrillSession, KakitoriError>
where
    S: ItemSource + AttemptSink,
{
    if let Some(session) = existing {
        if *session.signature() == signature {
            return Ok(session);
        }
    }

    let pool = store.fetch_pool(signature.bucket)?;
    let attempted = store.fetch_attempted_ids(&signature.learner_id, signature.bucket)?;
    DrillSession::build(signature, pool, &attempted, count)
}
