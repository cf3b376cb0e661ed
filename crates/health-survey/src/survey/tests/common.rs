use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::config::SurveyConfig;
use crate::survey::domain::{AnswerRecord, Choice};
use crate::survey::repository::{DocumentId, DocumentStore, StoreError, SurveyDocument};
use crate::survey::scoring::{ScoringConfig, ScoringEngine};
use crate::survey::session::SurveySession;
use crate::survey::{survey_router, SurveyService};

pub(super) const COLLECTION: &str = "health_surveys";

pub(super) fn answers(
    name: &str,
    age: &str,
    [exercise, diet, sleep, stress, checkup]: [Option<u8>; 5],
) -> AnswerRecord {
    AnswerRecord {
        name: name.to_string(),
        age: age.to_string(),
        exercise: exercise.map(Choice::Value),
        diet: diet.map(Choice::Value),
        sleep: sleep.map(Choice::Value),
        stress: stress.map(Choice::Value),
        checkup: checkup.map(Choice::Value),
    }
}

pub(super) fn balanced_answers() -> AnswerRecord {
    answers("Asha", "30", [Some(2), Some(2), Some(2), Some(2), Some(1)])
}

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn engine() -> Arc<ScoringEngine> {
    Arc::new(ScoringEngine::new(ScoringConfig::default()))
}

pub(super) fn session_with(record: AnswerRecord) -> SurveySession {
    SurveySession::from_record(engine(), COLLECTION, record)
}

pub(super) fn survey_config() -> SurveyConfig {
    SurveyConfig::default()
}

pub(super) fn build_service() -> (SurveyService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = SurveyService::new(store.clone(), &survey_config());
    (service, store)
}

pub(super) fn router_with_store<S: DocumentStore + 'static>(store: S) -> axum::Router {
    survey_router(Arc::new(SurveyService::new(
        Arc::new(store),
        &survey_config(),
    )))
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    documents: Arc<Mutex<Vec<(String, SurveyDocument)>>>,
    sequence: Arc<AtomicU64>,
}

impl MemoryStore {
    pub(super) fn documents(&self) -> Vec<(String, SurveyDocument)> {
        self.documents.lock().expect("store mutex poisoned").clone()
    }
}

impl DocumentStore for MemoryStore {
    fn append(
        &self,
        collection: &str,
        document: SurveyDocument,
    ) -> Result<DocumentId, StoreError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        self.documents
            .lock()
            .expect("store mutex poisoned")
            .push((collection.to_string(), document));
        Ok(DocumentId(format!("doc-{id}")))
    }
}

pub(super) struct UnavailableStore;

impl DocumentStore for UnavailableStore {
    fn append(
        &self,
        _collection: &str,
        _document: SurveyDocument,
    ) -> Result<DocumentId, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
