use std::fmt;

use serde::Serialize;

use super::domain::{AnswerRecord, QuestionKey, QuestionSet};
use super::scoring::{malformed_answers, MalformedAnswerPolicy};

/// Free-text fields that must be filled before a submission is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Name,
    Age,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Name => f.write_str("name"),
            RequiredField::Age => f.write_str("age"),
        }
    }
}

/// Errors raised while editing or submitting a survey.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("missing required field: {field}")]
    MissingRequiredField { field: RequiredField },
    #[error("answer '{value}' is not an option for the {key} question")]
    InvalidAnswer { key: QuestionKey, value: String },
    #[error("'{label}' is not an option for the {key} question")]
    UnknownOption { key: QuestionKey, label: String },
    #[error("a submission is already being saved")]
    SubmissionInFlight,
    #[error("no submission is waiting to be saved")]
    NothingPending,
}

impl SubmissionError {
    /// Whether the respondent can fix the problem by editing the form.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SubmissionError::MissingRequiredField { .. }
                | SubmissionError::InvalidAnswer { .. }
                | SubmissionError::UnknownOption { .. }
        )
    }
}

/// Gate run before scoring: name and age must be non-empty, and under the
/// `Reject` policy every set answer must be one of its question's options.
pub fn validate_for_submit(
    record: &AnswerRecord,
    questions: &QuestionSet,
    policy: MalformedAnswerPolicy,
) -> Result<(), SubmissionError> {
    if record.name.is_empty() {
        return Err(SubmissionError::MissingRequiredField {
            field: RequiredField::Name,
        });
    }
    if record.age.is_empty() {
        return Err(SubmissionError::MissingRequiredField {
            field: RequiredField::Age,
        });
    }

    if policy == MalformedAnswerPolicy::Reject {
        if let Some((key, choice)) = malformed_answers(record, questions).into_iter().next() {
            return Err(SubmissionError::InvalidAnswer {
                key,
                value: choice.to_string(),
            });
        }
    }

    Ok(())
}
