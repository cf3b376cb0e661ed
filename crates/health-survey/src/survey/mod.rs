//! Lifestyle survey intake: awareness content, form state, scoring, feedback tiers, tips,
//! and persistence.

pub mod awareness;
pub mod bulk;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use awareness::{awareness_content, AwarenessContent, InsightList, TopicCard};
pub use bulk::read_answer_records;
pub use domain::{
    AnswerOption, AnswerRecord, Choice, FieldUpdate, Question, QuestionKey, QuestionSet,
};
pub use repository::{DocumentId, DocumentStore, StoreError, SurveyDocument};
pub use router::survey_router;
pub use scoring::{
    compute_score, get_tips, parse_age, resolve_tier, AgeBracket, FeedbackTier,
    MalformedAnswerPolicy, ScoringConfig, ScoringEngine, SurveyResult,
};
pub use service::SurveyService;
pub use session::{
    PendingWrite, PersistenceStatus, SessionNotice, SubmissionOutcome, SubmissionState,
    SurveySession, BUSY_LABEL, SUBMIT_LABEL,
};
pub use validation::{validate_for_submit, RequiredField, SubmissionError};
