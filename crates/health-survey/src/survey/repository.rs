use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AnswerRecord, Choice};

/// Identifier assigned by the store to an appended document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// Persisted shape of a scored survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDocument {
    pub name: String,
    pub age: String,
    pub exercise: Option<Choice>,
    pub diet: Option<Choice>,
    pub sleep: Option<Choice>,
    pub stress: Option<Choice>,
    pub checkup: Option<Choice>,
    pub score: u8,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub created_at: String,
}

impl SurveyDocument {
    pub fn from_record(record: &AnswerRecord, score: u8, created_at: DateTime<Utc>) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age.clone(),
            exercise: record.exercise.clone(),
            diet: record.diet.clone(),
            sleep: record.sleep.clone(),
            stress: record.stress.clone(),
            checkup: record.checkup.clone(),
            score,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Append-only document store so submission can be exercised in isolation.
pub trait DocumentStore: Send + Sync {
    fn append(&self, collection: &str, document: SurveyDocument)
        -> Result<DocumentId, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document rejected: {0}")]
    Rejected(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("document encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}
