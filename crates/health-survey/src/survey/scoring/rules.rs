use super::super::domain::{AnswerRecord, Choice, Question, QuestionKey, QuestionSet};

/// Points for one question; unset, malformed, or unknown values count as zero.
pub(crate) fn answer_points(question: &Question, record: &AnswerRecord) -> u8 {
    record
        .choice(question.key)
        .and_then(Choice::value)
        .filter(|value| question.accepts(*value))
        .unwrap_or(0)
}

/// Sums the answers over every question in the set.
pub fn compute_score(record: &AnswerRecord, questions: &QuestionSet) -> u8 {
    questions
        .questions()
        .iter()
        .fold(0u8, |total, question| {
            total.saturating_add(answer_points(question, record))
        })
}

/// Set answers that are not one of their question's option values.
pub(crate) fn malformed_answers<'a>(
    record: &'a AnswerRecord,
    questions: &QuestionSet,
) -> Vec<(QuestionKey, &'a Choice)> {
    questions
        .questions()
        .iter()
        .filter_map(|question| {
            record
                .choice(question.key)
                .filter(|choice| !choice.value().is_some_and(|value| question.accepts(value)))
                .map(|choice| (question.key, choice))
        })
        .collect()
}
