use super::common::*;
use crate::survey::domain::{AnswerRecord, Choice, QuestionSet};
use crate::survey::scoring::{compute_score, resolve_tier, FeedbackTier, ScoringEngine};

#[test]
fn score_is_exact_sum_of_answers() {
    let questions = QuestionSet::standard();
    assert_eq!(compute_score(&balanced_answers(), &questions), 9);

    let partial = answers("Asha", "30", [Some(3), None, Some(1), None, Some(2)]);
    assert_eq!(compute_score(&partial, &questions), 6);
}

#[test]
fn score_stays_within_bounds() {
    let questions = QuestionSet::standard();
    assert_eq!(compute_score(&AnswerRecord::default(), &questions), 0);

    for value in 0..=3u8 {
        let record = answers("Asha", "30", [Some(value); 5]);
        assert_eq!(compute_score(&record, &questions), value * 5);
    }
}

#[test]
fn values_outside_the_option_list_count_as_zero() {
    let questions = QuestionSet::standard();
    let record = answers("Asha", "30", [Some(9), Some(3), Some(255), Some(4), Some(1)]);
    assert_eq!(compute_score(&record, &questions), 4);
}

#[test]
fn malformed_answers_count_as_zero() {
    let questions = QuestionSet::standard();
    let mut record = answers("Asha", "30", [Some(3), None, None, None, Some(2)]);
    record.diet = Some(Choice::Malformed("lots".to_string()));
    record.sleep = Some(Choice::Malformed("-1".to_string()));
    record.stress = Some(Choice::Malformed("2.5".to_string()));

    assert_eq!(compute_score(&record, &questions), 5);
}

#[test]
fn tier_boundaries_map_exactly() {
    assert_eq!(resolve_tier(0), FeedbackTier::NeedsImprovement);
    assert_eq!(resolve_tier(5), FeedbackTier::NeedsImprovement);
    assert_eq!(resolve_tier(6), FeedbackTier::Okay);
    assert_eq!(resolve_tier(10), FeedbackTier::Okay);
    assert_eq!(resolve_tier(11), FeedbackTier::Great);
    assert_eq!(resolve_tier(13), FeedbackTier::Great);
    assert_eq!(resolve_tier(14), FeedbackTier::Excellent);
    assert_eq!(resolve_tier(15), FeedbackTier::Excellent);
}

#[test]
fn every_score_resolves_to_a_tier_message() {
    for score in 0..=15u8 {
        assert!(!resolve_tier(score).message().is_empty());
    }
    assert!(FeedbackTier::Okay
        .message()
        .starts_with("You're doing okay!"));
}

#[test]
fn engine_scores_balanced_young_adult() {
    let result = ScoringEngine::default().score(&balanced_answers());

    assert_eq!(result.score, 9);
    assert_eq!(result.max_score, 15);
    assert_eq!(result.tier, FeedbackTier::Okay);
    assert_eq!(result.message, FeedbackTier::Okay.message());
    assert_eq!(result.tips.len(), 6);
    assert!(result.tips[4].contains("strength training"));
    assert!(result.tips[5].contains("screen hours"));
}

#[test]
fn engine_scores_perfect_senior() {
    let record = answers("Mei", "70", [Some(3); 5]);
    let result = ScoringEngine::default().score(&record);

    assert_eq!(result.score, 15);
    assert_eq!(result.tier, FeedbackTier::Excellent);
    assert_eq!(result.tips.len(), 6);
    assert!(result.tips[0].contains("Keep inspiring others"));
    assert!(result.tips[4].contains("bone health"));
}

#[test]
fn engine_scores_empty_form() {
    let result = ScoringEngine::default().score(&AnswerRecord::default());

    assert_eq!(result.score, 0);
    assert_eq!(result.tier, FeedbackTier::NeedsImprovement);
    assert_eq!(result.tips.len(), 4);
}

#[test]
fn results_panel_renders_fallback_labels() {
    let result = ScoringEngine::default().score(&AnswerRecord::default());
    let panel = result.to_string();

    assert!(panel.starts_with("Hello User\n"));
    assert!(panel.contains("Age: N/A"));
    assert!(panel.contains("Your Health Score: 0 / 15"));
    assert_eq!(panel.matches("  - ").count(), 4);
}
