use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use super::awareness::awareness_content;
use super::domain::AnswerRecord;
use super::repository::DocumentStore;
use super::service::SurveyService;
use super::session::PersistenceStatus;
use crate::error::AppError;

/// Router builder exposing the survey endpoints.
pub fn survey_router<S>(service: Arc<SurveyService<S>>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route("/api/v1/surveys", post(submit_handler::<S>))
        .route("/api/v1/surveys/score", post(score_handler::<S>))
        .route("/api/v1/surveys/questions", get(questions_handler::<S>))
        .route("/api/v1/awareness", get(awareness_handler))
        .with_state(service)
}

pub(crate) async fn awareness_handler() -> Response {
    (StatusCode::OK, axum::Json(awareness_content())).into_response()
}

pub(crate) async fn questions_handler<S>(State(service): State<Arc<SurveyService<S>>>) -> Response
where
    S: DocumentStore + 'static,
{
    (StatusCode::OK, axum::Json(service.questions().clone())).into_response()
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<SurveyService<S>>>,
    axum::Json(record): axum::Json<AnswerRecord>,
) -> Response
where
    S: DocumentStore + 'static,
{
    (StatusCode::OK, axum::Json(service.preview(&record))).into_response()
}

/// Stores are synchronous and may touch the filesystem, so the submit runs on
/// the blocking pool.
pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<SurveyService<S>>>,
    axum::Json(record): axum::Json<AnswerRecord>,
) -> Result<Response, AppError>
where
    S: DocumentStore + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || service.submit(record)).await??;
    let status = match outcome.persistence {
        PersistenceStatus::Saved { .. } => StatusCode::CREATED,
        PersistenceStatus::Failed { .. } => StatusCode::OK,
    };
    Ok((status, axum::Json(outcome)).into_response())
}
