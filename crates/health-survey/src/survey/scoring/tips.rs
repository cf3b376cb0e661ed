use serde::{Deserialize, Serialize};

use super::tiers::resolve_tier;

/// Age range used to pick supplementary tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    Child,
    YoungAdult,
    MiddleAge,
    Senior,
}

#[derive(Debug, Clone, Copy)]
enum AgeBound {
    Below(f64),
    AtMost(f64),
}

impl AgeBound {
    fn admits(self, age: f64) -> bool {
        match self {
            AgeBound::Below(limit) => age < limit,
            AgeBound::AtMost(limit) => age <= limit,
        }
    }
}

/// Checked in order; ages past the last bound are `Senior`.
const AGE_BRACKETS: [(AgeBound, AgeBracket); 3] = [
    (AgeBound::Below(18.0), AgeBracket::Child),
    (AgeBound::AtMost(40.0), AgeBracket::YoungAdult),
    (AgeBound::AtMost(60.0), AgeBracket::MiddleAge),
];

impl AgeBracket {
    /// Brackets a positive age; zero, negative, and non-finite ages have none.
    pub fn for_age(age: f64) -> Option<Self> {
        if !age.is_finite() || age <= 0.0 {
            return None;
        }
        Some(
            AGE_BRACKETS
                .iter()
                .find(|(bound, _)| bound.admits(age))
                .map(|(_, bracket)| *bracket)
                .unwrap_or(AgeBracket::Senior),
        )
    }

    pub const fn tips(self) -> [&'static str; 2] {
        match self {
            AgeBracket::Child => [
                "🧒 Focus on outdoor games and balanced meals for growth.",
                "🥛 Include calcium-rich foods and milk daily.",
            ],
            AgeBracket::YoungAdult => [
                "🏃‍♂️ Add strength training 2–3 times a week.",
                "💻 Avoid long screen hours; stretch often.",
            ],
            AgeBracket::MiddleAge => [
                "❤️ Monitor blood pressure and sugar levels regularly.",
                "🚶 Walk daily and find hobbies to reduce stress.",
            ],
            AgeBracket::Senior => [
                "🦴 Focus on bone health — calcium and Vitamin D help!",
                "🧘 Practice light yoga and breathing exercises.",
            ],
        }
    }
}

/// Reads the age field as a number. Blank or unparsable text yields `None`.
pub fn parse_age(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|age| age.is_finite())
}

/// Four tier tips followed by two age tips when the age is a positive number.
pub fn get_tips(score: u8, age: &str) -> Vec<&'static str> {
    let mut tips = resolve_tier(score).tips().to_vec();
    if let Some(bracket) = parse_age(age).and_then(AgeBracket::for_age) {
        tips.extend(bracket.tips());
    }
    tips
}
