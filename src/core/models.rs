use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

/// Difficulty tier partitioning the item pool. Closed set; the wire strings
/// match the `bucket` column of the sentence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Beginner,
    Intermediate,
    Advanced,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Beginner, Bucket::Intermediate, Bucket::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Beginner => "beginner",
            Bucket::Intermediate => "intermediate",
            Bucket::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Beginner => "Beginner",
            Bucket::Intermediate => "Intermediate",
            Bucket::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One practice sentence. The selector only ever looks at `id` and `bucket`;
/// everything else is carried through untouched for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,                 // Unique within a bucket's pool
    pub bucket: Bucket,
    pub level: String,              // Finer-grained label (e.g. "N2"), opaque
    pub prompt: String,             // Sentence with the target reading embedded
    pub target_reading: String,     // The kana the learner must write in kanji
    pub answer: String,             // Correct written form, opaque
    #[serde(default)]
    pub note: Option<String>,       // Optional hint text
}

/// Learner-submitted judgment about their own answer. Never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfGrade {
    Correct,
    Wrong,
}

/// An attempt as submitted by the session layer, before the store assigns
/// an id and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttempt {
    pub learner_id: String,
    pub learner_email: String,
    pub item_id: String,
    pub bucket: Bucket,
    pub level: String,
    pub self_grade: SelfGrade,
    #[serde(default)]
    pub drawing_png_b64: Option<String>, // Canvas capture, only when the learner opted in
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub attempt: NewAttempt,
}
