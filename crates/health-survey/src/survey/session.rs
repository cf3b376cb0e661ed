use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{AnswerRecord, FieldUpdate, QuestionKey, QuestionSet};
use super::repository::{DocumentId, DocumentStore, StoreError, SurveyDocument};
use super::scoring::{ScoringEngine, SurveyResult};
use super::validation::{validate_for_submit, RequiredField, SubmissionError};

pub const SUBMIT_LABEL: &str = "Submit Survey";
pub const BUSY_LABEL: &str = "Submitting...";

/// Where a survey attempt sits in the submit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Validating,
    Scoring,
    Persisting,
    Displayed,
    /// Last submit was refused by validation; behaves like `Idle`.
    Failed,
}

impl SubmissionState {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Scoring => "scoring",
            SubmissionState::Persisting => "persisting",
            SubmissionState::Displayed => "displayed",
            SubmissionState::Failed => "failed",
        }
    }
}

/// User-facing notice raised by the last submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionNotice {
    MissingRequiredField { field: RequiredField },
    InvalidAnswer { key: QuestionKey, value: String },
    Saved { document_id: DocumentId },
    PersistenceFailed { detail: String },
}

impl SessionNotice {
    pub fn message(&self) -> String {
        match self {
            SessionNotice::MissingRequiredField { .. } => {
                "Please enter your name and age before submitting.".to_string()
            }
            SessionNotice::InvalidAnswer { key, value } => {
                format!("Please pick one of the listed options for {key} (got {value}).")
            }
            SessionNotice::Saved { .. } => "Survey saved successfully!".to_string(),
            SessionNotice::PersistenceFailed { .. } => {
                "Failed to save the survey. Please check your storage configuration.".to_string()
            }
        }
    }
}

/// Result of handing the document to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PersistenceStatus {
    Saved { document_id: DocumentId },
    Failed { detail: String },
}

/// Scored result plus what happened to the stored copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionOutcome {
    pub result: SurveyResult,
    pub persistence: PersistenceStatus,
}

/// Document waiting to be appended while the session is `Persisting`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub collection: String,
    pub document: SurveyDocument,
}

/// Form state for one survey attempt.
///
/// Edits land in the record without validation. `begin_submit` validates and
/// scores, then parks the session in `Persisting` until `complete_submit`
/// reports the store's answer. The scored result is shown whether or not the
/// write succeeded.
pub struct SurveySession {
    engine: Arc<ScoringEngine>,
    collection: String,
    record: AnswerRecord,
    state: SubmissionState,
    result: Option<SurveyResult>,
    notice: Option<SessionNotice>,
}

impl SurveySession {
    pub fn new(engine: Arc<ScoringEngine>, collection: impl Into<String>) -> Self {
        Self::from_record(engine, collection, AnswerRecord::default())
    }

    pub fn from_record(
        engine: Arc<ScoringEngine>,
        collection: impl Into<String>,
        record: AnswerRecord,
    ) -> Self {
        Self {
            engine,
            collection: collection.into(),
            record,
            state: SubmissionState::Idle,
            result: None,
            notice: None,
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        self.engine.questions()
    }

    pub fn record(&self) -> &AnswerRecord {
        &self.record
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Last scored result; survives later edits and refused submits.
    pub fn result(&self) -> Option<&SurveyResult> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&SessionNotice> {
        self.notice.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::Persisting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        self.record.set_field(update);
    }

    /// Selects an option by its label, as a click on the option button would.
    pub fn select_option(&mut self, key: QuestionKey, label: &str) -> Result<(), SubmissionError> {
        let value = self
            .engine
            .questions()
            .question(key)
            .and_then(|question| question.option_by_label(label))
            .map(|option| option.value)
            .ok_or_else(|| SubmissionError::UnknownOption {
                key,
                label: label.to_string(),
            })?;
        self.record.set_field(FieldUpdate::Choice(key, value));
        Ok(())
    }

    /// Validates and scores the record, returning the document to persist.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<PendingWrite, SubmissionError> {
        if self.is_busy() {
            return Err(SubmissionError::SubmissionInFlight);
        }

        self.state = SubmissionState::Validating;
        if let Err(error) = validate_for_submit(
            &self.record,
            self.engine.questions(),
            self.engine.config().malformed_answers,
        ) {
            debug!(%error, "survey submission refused");
            self.notice = match &error {
                SubmissionError::MissingRequiredField { field } => {
                    Some(SessionNotice::MissingRequiredField { field: *field })
                }
                SubmissionError::InvalidAnswer { key, value } => Some(SessionNotice::InvalidAnswer {
                    key: *key,
                    value: value.clone(),
                }),
                _ => None,
            };
            self.state = SubmissionState::Failed;
            return Err(error);
        }

        self.state = SubmissionState::Scoring;
        let result = self.engine.score(&self.record);
        let document = SurveyDocument::from_record(&self.record, result.score, now);
        debug!(score = result.score, tier = result.tier.label(), "survey scored");
        self.result = Some(result);
        self.notice = None;

        self.state = SubmissionState::Persisting;
        Ok(PendingWrite {
            collection: self.collection.clone(),
            document,
        })
    }

    /// Records the store's answer and moves to `Displayed` either way.
    pub fn complete_submit(
        &mut self,
        outcome: Result<DocumentId, StoreError>,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        if !self.is_busy() {
            return Err(SubmissionError::NothingPending);
        }
        let result = self.result.clone().ok_or(SubmissionError::NothingPending)?;

        let persistence = match outcome {
            Ok(document_id) => {
                info!(document_id = %document_id.0, collection = %self.collection, "survey saved");
                self.notice = Some(SessionNotice::Saved {
                    document_id: document_id.clone(),
                });
                PersistenceStatus::Saved { document_id }
            }
            Err(error) => {
                warn!(%error, collection = %self.collection, "failed to save survey");
                let detail = error.to_string();
                self.notice = Some(SessionNotice::PersistenceFailed {
                    detail: detail.clone(),
                });
                PersistenceStatus::Failed { detail }
            }
        };

        self.state = SubmissionState::Displayed;
        Ok(SubmissionOutcome {
            result,
            persistence,
        })
    }

    /// Runs a full submit against `store`.
    pub fn submit_with<S>(
        &mut self,
        store: &S,
        now: DateTime<Utc>,
    ) -> Result<SubmissionOutcome, SubmissionError>
    where
        S: DocumentStore + ?Sized,
    {
        let PendingWrite {
            collection,
            document,
        } = self.begin_submit(now)?;
        let outcome = store.append(&collection, document);
        self.complete_submit(outcome)
    }
}
