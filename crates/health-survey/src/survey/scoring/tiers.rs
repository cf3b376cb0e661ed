use serde::{Deserialize, Serialize};

/// Feedback band derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    NeedsImprovement,
    Okay,
    Great,
    Excellent,
}

/// Inclusive upper bounds checked in order; anything above the last bound is `Excellent`.
const TIER_THRESHOLDS: [(u8, FeedbackTier); 3] = [
    (5, FeedbackTier::NeedsImprovement),
    (10, FeedbackTier::Okay),
    (13, FeedbackTier::Great),
];

pub fn resolve_tier(score: u8) -> FeedbackTier {
    TIER_THRESHOLDS
        .iter()
        .find(|(upper_bound, _)| score <= *upper_bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(FeedbackTier::Excellent)
}

impl FeedbackTier {
    pub const fn label(self) -> &'static str {
        match self {
            FeedbackTier::NeedsImprovement => "Needs Improvement",
            FeedbackTier::Okay => "Okay",
            FeedbackTier::Great => "Great",
            FeedbackTier::Excellent => "Excellent",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            FeedbackTier::NeedsImprovement => {
                "Your lifestyle needs improvement. Include more exercise, eat balanced meals, and focus on sleep and stress management."
            }
            FeedbackTier::Okay => {
                "You're doing okay! But there's room for improvement in your routine and mental health."
            }
            FeedbackTier::Great => {
                "Great job! You're maintaining a good lifestyle. Keep building healthy habits!"
            }
            FeedbackTier::Excellent => {
                "Excellent! You're living a balanced life — keep inspiring others!"
            }
        }
    }

    pub const fn tips(self) -> [&'static str; 4] {
        match self {
            FeedbackTier::NeedsImprovement => [
                "🏃 Try brisk walking or yoga for at least 30 minutes daily.",
                "🥗 Add more fruits, veggies, and whole grains to your diet.",
                "😴 Ensure at least 7 hours of sleep each night.",
                "🧘‍♀️ Practice mindfulness or deep breathing daily.",
            ],
            FeedbackTier::Okay => [
                "💧 Stay hydrated throughout the day.",
                "🥦 Limit sugary and processed foods.",
                "🚶 Engage in light physical activities regularly.",
                "💤 Maintain a consistent sleep schedule.",
            ],
            FeedbackTier::Great => [
                "💪 Continue your workout routine — include strength training.",
                "🍎 Keep your diet colorful and nutrient-rich.",
                "🧠 Practice relaxation techniques for stress relief.",
                "🩺 Get a routine health checkup every 6 months.",
            ],
            FeedbackTier::Excellent => [
                "🌟 Keep inspiring others with your healthy lifestyle!",
                "🏋️ Try new workout styles to stay motivated.",
                "🥑 Eat foods rich in vitamins and fiber.",
                "💧 Continue prioritizing hydration and balanced meals.",
            ],
        }
    }
}
