use chrono::Utc;
use health_survey::config::SurveyConfig;
use health_survey::survey::{DocumentId, DocumentStore, StoreError, SurveyDocument};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("store lock poisoned".to_string())
}

/// Keeps collections in process memory; documents vanish on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDocumentStore {
    collections: Arc<Mutex<HashMap<String, Vec<(DocumentId, SurveyDocument)>>>>,
    sequence: Arc<AtomicU64>,
}

impl DocumentStore for InMemoryDocumentStore {
    fn append(
        &self,
        collection: &str,
        document: SurveyDocument,
    ) -> Result<DocumentId, StoreError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let document_id = DocumentId(format!("{collection}-{id:06}"));
        let mut guard = self.collections.lock().map_err(poisoned)?;
        guard
            .entry(collection.to_string())
            .or_default()
            .push((document_id.clone(), document));
        Ok(document_id)
    }
}

impl InMemoryDocumentStore {
    #[cfg(test)]
    pub(crate) fn documents(&self, collection: &str) -> Vec<(DocumentId, SurveyDocument)> {
        self.collections
            .lock()
            .map(|guard| guard.get(collection).cloned().unwrap_or_default())
            .unwrap_or_default()
    }
}

#[derive(Serialize)]
struct StoredDocument<'a> {
    id: &'a str,
    #[serde(flatten)]
    document: &'a SurveyDocument,
}

/// Appends one JSON object per line to `<dir>/<collection>.jsonl`.
pub(crate) struct JsonLinesDocumentStore {
    dir: PathBuf,
    sequence: AtomicU64,
    write_lock: Mutex<()>,
}

impl JsonLinesDocumentStore {
    pub(crate) fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            sequence: AtomicU64::new(1),
            write_lock: Mutex::new(()),
        })
    }

    pub(crate) fn collection_path(&self, collection: &str) -> Result<PathBuf, StoreError> {
        let valid = !collection.is_empty()
            && collection
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !valid {
            return Err(StoreError::Rejected(format!(
                "invalid collection name '{collection}'"
            )));
        }
        Ok(self.dir.join(format!("{collection}.jsonl")))
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentStore for JsonLinesDocumentStore {
    fn append(
        &self,
        collection: &str,
        document: SurveyDocument,
    ) -> Result<DocumentId, StoreError> {
        let path = self.collection_path(collection)?;
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let id = format!(
            "{collection}-{}-{sequence}",
            Utc::now().format("%Y%m%d%H%M%S%3f")
        );

        let mut line = serde_json::to_string(&StoredDocument {
            id: &id,
            document: &document,
        })?;
        line.push('\n');

        let _guard = self.write_lock.lock().map_err(poisoned)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())?;
        Ok(DocumentId(id))
    }
}

/// Store selected by `SURVEY_STORE_DIR`.
pub(crate) enum ConfiguredStore {
    Memory(InMemoryDocumentStore),
    JsonLines(JsonLinesDocumentStore),
}

impl ConfiguredStore {
    pub(crate) fn from_config(config: &SurveyConfig) -> Result<Self, StoreError> {
        match &config.store_dir {
            Some(dir) => Ok(Self::JsonLines(JsonLinesDocumentStore::open(dir)?)),
            None => Ok(Self::Memory(InMemoryDocumentStore::default())),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            ConfiguredStore::Memory(_) => "in-memory".to_string(),
            ConfiguredStore::JsonLines(store) => format!("json lines in {}", store.dir().display()),
        }
    }
}

impl DocumentStore for ConfiguredStore {
    fn append(
        &self,
        collection: &str,
        document: SurveyDocument,
    ) -> Result<DocumentId, StoreError> {
        match self {
            ConfiguredStore::Memory(store) => store.append(collection, document),
            ConfiguredStore::JsonLines(store) => store.append(collection, document),
        }
    }
}
