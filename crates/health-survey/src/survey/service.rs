use std::sync::Arc;

use chrono::Utc;

use super::domain::{AnswerRecord, QuestionSet};
use super::repository::DocumentStore;
use super::scoring::{ScoringEngine, SurveyResult};
use super::session::{SubmissionOutcome, SurveySession};
use super::validation::SubmissionError;
use crate::config::SurveyConfig;

/// Service composing the scoring engine with the configured document store.
pub struct SurveyService<S> {
    store: Arc<S>,
    engine: Arc<ScoringEngine>,
    collection: String,
}

impl<S> SurveyService<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(store: Arc<S>, config: &SurveyConfig) -> Self {
        Self {
            store,
            engine: Arc::new(ScoringEngine::new(config.scoring)),
            collection: config.collection.clone(),
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        self.engine.questions()
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Scores without validating or persisting anything.
    pub fn preview(&self, record: &AnswerRecord) -> SurveyResult {
        self.engine.score(record)
    }

    /// Validate, score, and persist one record through a fresh session.
    pub fn submit(&self, record: AnswerRecord) -> Result<SubmissionOutcome, SubmissionError> {
        let mut session =
            SurveySession::from_record(self.engine.clone(), self.collection.clone(), record);
        session.submit_with(self.store.as_ref(), Utc::now())
    }
}
