mod config;
mod rules;
mod tiers;
mod tips;

pub use config::{MalformedAnswerPolicy, ScoringConfig};
pub use rules::compute_score;
pub use tiers::{resolve_tier, FeedbackTier};
pub use tips::{get_tips, parse_age, AgeBracket};

pub(crate) use rules::malformed_answers;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{AnswerRecord, QuestionSet};

/// Stateless scorer pairing the question set with the scoring configuration.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    questions: QuestionSet,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_questions(QuestionSet::standard(), config)
    }

    pub fn with_questions(questions: QuestionSet, config: ScoringConfig) -> Self {
        Self { questions, config }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, record: &AnswerRecord) -> SurveyResult {
        let score = compute_score(record, &self.questions);
        let tier = resolve_tier(score);

        SurveyResult {
            name: record.name.clone(),
            age: record.age.clone(),
            score,
            max_score: self.questions.max_score(),
            tier,
            message: tier.message().to_string(),
            tips: get_tips(score, &record.age)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// What the results panel shows after a submission has been scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResult {
    pub name: String,
    pub age: String,
    pub score: u8,
    pub max_score: u8,
    pub tier: FeedbackTier,
    pub message: String,
    pub tips: Vec<String>,
}

impl SurveyResult {
    pub fn greeting(&self) -> String {
        let name = if self.name.is_empty() {
            "User"
        } else {
            self.name.as_str()
        };
        format!("Hello {name}")
    }

    pub fn age_label(&self) -> &str {
        if self.age.is_empty() {
            "N/A"
        } else {
            &self.age
        }
    }
}

impl fmt::Display for SurveyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.greeting())?;
        writeln!(f, "Age: {}", self.age_label())?;
        writeln!(f, "Your Health Score: {} / {}", self.score, self.max_score)?;
        writeln!(f, "{}", self.message)?;
        writeln!(f, "Personalized Health Tips:")?;
        for tip in &self.tips {
            writeln!(f, "  - {tip}")?;
        }
        Ok(())
    }
}
