use serde::{Deserialize, Serialize};

/// What to do with a categorical answer that is not one of its question's options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedAnswerPolicy {
    /// Count the answer as zero points.
    #[default]
    Coerce,
    /// Refuse the submission with `InvalidAnswer`.
    Reject,
}

impl MalformedAnswerPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "coerce" => Some(Self::Coerce),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Scoring knobs shared by the session and the HTTP service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub malformed_answers: MalformedAnswerPolicy,
}
