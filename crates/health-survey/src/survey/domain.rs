use std::fmt;

use serde::de::{self, Error as _, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifies one of the five lifestyle questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    Exercise,
    Diet,
    Sleep,
    Stress,
    Checkup,
}

impl QuestionKey {
    pub const ALL: [QuestionKey; 5] = [
        QuestionKey::Exercise,
        QuestionKey::Diet,
        QuestionKey::Sleep,
        QuestionKey::Stress,
        QuestionKey::Checkup,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            QuestionKey::Exercise => "exercise",
            QuestionKey::Diet => "diet",
            QuestionKey::Sleep => "sleep",
            QuestionKey::Stress => "stress",
            QuestionKey::Checkup => "checkup",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A selectable answer and the points it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: u8,
}

const fn option(label: &'static str, value: u8) -> AnswerOption {
    AnswerOption { label, value }
}

/// Multiple-choice question with exactly four ordinal options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: &'static str,
    pub options: [AnswerOption; 4],
}

impl Question {
    pub fn accepts(&self, value: u8) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    pub fn option_by_label(&self, label: &str) -> Option<&AnswerOption> {
        let label = label.trim();
        self.options
            .iter()
            .find(|option| option.label.eq_ignore_ascii_case(label))
    }

    pub fn max_value(&self) -> u8 {
        self.options
            .iter()
            .map(|option| option.value)
            .max()
            .unwrap_or(0)
    }
}

/// Ordered question list presented by the survey form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The five lifestyle questions asked by the health awareness survey.
    pub fn standard() -> Self {
        Self::new(vec![
            Question {
                key: QuestionKey::Exercise,
                prompt: "How often do you exercise per week?",
                options: [
                    option("Never", 0),
                    option("1–2 times", 1),
                    option("3–4 times", 2),
                    option("5+ times", 3),
                ],
            },
            Question {
                key: QuestionKey::Diet,
                prompt: "How balanced is your daily diet?",
                options: [
                    option("Mostly junk food", 0),
                    option("Sometimes healthy", 1),
                    option("Mostly balanced", 2),
                    option("Completely healthy", 3),
                ],
            },
            Question {
                key: QuestionKey::Sleep,
                prompt: "How many hours of sleep do you get daily?",
                options: [
                    option("Less than 5 hours", 0),
                    option("5–6 hours", 1),
                    option("7–8 hours", 2),
                    option("More than 8 hours", 3),
                ],
            },
            Question {
                key: QuestionKey::Stress,
                prompt: "How often do you feel stressed or anxious?",
                options: [
                    option("Always", 0),
                    option("Frequently", 1),
                    option("Sometimes", 2),
                    option("Rarely", 3),
                ],
            },
            Question {
                key: QuestionKey::Checkup,
                prompt: "When was your last health checkup?",
                options: [
                    option("Never", 0),
                    option("Over a year ago", 1),
                    option("Within the last year", 2),
                    option("Within the last 6 months", 3),
                ],
            },
        ])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, key: QuestionKey) -> Option<&Question> {
        self.questions.iter().find(|question| question.key == key)
    }

    /// Highest attainable total, shown as the denominator of the score.
    pub fn max_score(&self) -> u8 {
        self.questions
            .iter()
            .fold(0u8, |total, question| total.saturating_add(question.max_value()))
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// A categorical answer as received.
///
/// Whole numbers that fit a `u8` become `Value`, whether or not the question
/// offers them. Anything else is kept verbatim as `Malformed` and scores zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Choice {
    Value(u8),
    Malformed(String),
}

impl Choice {
    /// Reads a typed or exported answer. Blank text is no answer at all.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let value = trimmed.parse::<u8>().ok().or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(whole_number)
        });
        Some(match value {
            Some(value) => Choice::Value(value),
            None => Choice::Malformed(trimmed.to_string()),
        })
    }

    pub fn value(&self) -> Option<u8> {
        match self {
            Choice::Value(value) => Some(*value),
            Choice::Malformed(_) => None,
        }
    }
}

impl From<u8> for Choice {
    fn from(value: u8) -> Self {
        Choice::Value(value)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Value(value) => write!(f, "{value}"),
            Choice::Malformed(raw) => f.write_str(raw),
        }
    }
}

fn whole_number(number: f64) -> Option<u8> {
    let in_range = number.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&number);
    in_range.then(|| number as u8)
}

/// Everything the respondent typed or selected during one survey attempt.
///
/// `age` stays as entered; it is only interpreted when picking age tips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub age: String,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub exercise: Option<Choice>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub diet: Option<Choice>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub sleep: Option<Choice>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub stress: Option<Choice>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub checkup: Option<Choice>,
}

/// Single form edit; applied without validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Age(String),
    Choice(QuestionKey, u8),
}

impl AnswerRecord {
    pub fn choice(&self, key: QuestionKey) -> Option<&Choice> {
        match key {
            QuestionKey::Exercise => self.exercise.as_ref(),
            QuestionKey::Diet => self.diet.as_ref(),
            QuestionKey::Sleep => self.sleep.as_ref(),
            QuestionKey::Stress => self.stress.as_ref(),
            QuestionKey::Checkup => self.checkup.as_ref(),
        }
    }

    fn choice_mut(&mut self, key: QuestionKey) -> &mut Option<Choice> {
        match key {
            QuestionKey::Exercise => &mut self.exercise,
            QuestionKey::Diet => &mut self.diet,
            QuestionKey::Sleep => &mut self.sleep,
            QuestionKey::Stress => &mut self.stress,
            QuestionKey::Checkup => &mut self.checkup,
        }
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Age(age) => self.age = age,
            FieldUpdate::Choice(key, value) => *self.choice_mut(key) = Some(Choice::Value(value)),
        }
    }

    pub fn with_field(mut self, update: FieldUpdate) -> Self {
        self.set_field(update);
        self
    }
}

/// Accepts the age as JSON text or number; `null` becomes the empty string.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawText {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<RawText>::deserialize(deserializer)? {
        None => String::new(),
        Some(RawText::Text(text)) => text,
        Some(RawText::Number(number)) => number.to_string(),
    })
}

/// Never fails on a scalar: `null` and blank text are unset, everything else
/// becomes a [`Choice`].
struct ChoiceVisitor;

impl<'de> Visitor<'de> for ChoiceVisitor {
    type Value = Option<Choice>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a survey answer")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(ChoiceVisitor)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Some(Choice::Malformed(value.to_string())))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(match u8::try_from(value) {
            Ok(value) => Choice::Value(value),
            Err(_) => Choice::Malformed(value.to_string()),
        }))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(match u8::try_from(value) {
            Ok(value) => Choice::Value(value),
            Err(_) => Choice::Malformed(value.to_string()),
        }))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Self::Value, E> {
        Ok(Some(Choice::Malformed(value.to_string())))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Self::Value, E> {
        Ok(Some(Choice::Malformed(value.to_string())))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(match whole_number(value) {
            Some(value) => Choice::Value(value),
            None => Choice::Malformed(value.to_string()),
        }))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Choice::parse(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Some(Choice::Malformed("[array]".to_string())))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Some(Choice::Malformed("[object]".to_string())))
    }
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(ChoiceVisitor)?
            .ok_or_else(|| D::Error::custom("expected a survey answer"))
    }
}

/// Reads an optional answer from JSON or CSV without rejecting malformed input.
pub(crate) fn deserialize_choice<'de, D>(deserializer: D) -> Result<Option<Choice>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ChoiceVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn standard_set_has_five_questions_worth_fifteen() {
        let questions = QuestionSet::standard();
        assert_eq!(questions.questions().len(), 5);
        assert_eq!(questions.max_score(), 15);
        for key in QuestionKey::ALL {
            let question = questions.question(key).expect("question present");
            let values: Vec<u8> = question.options.iter().map(|option| option.value).collect();
            assert_eq!(values, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn option_lookup_ignores_case() {
        let questions = QuestionSet::standard();
        let stress = questions.question(QuestionKey::Stress).expect("stress");
        assert_eq!(stress.option_by_label("rarely").map(|o| o.value), Some(3));
        assert!(stress.option_by_label("Never").is_none());
    }

    #[test]
    fn set_field_overwrites_previous_values() {
        let mut record = AnswerRecord::default();
        record.set_field(FieldUpdate::Choice(QuestionKey::Sleep, 1));
        record.set_field(FieldUpdate::Choice(QuestionKey::Sleep, 2));
        record.set_field(FieldUpdate::Name("Asha".to_string()));
        record.set_field(FieldUpdate::Age("34".to_string()));

        assert_eq!(record.sleep, Some(Choice::Value(2)));
        assert_eq!(
            record.choice(QuestionKey::Sleep).and_then(Choice::value),
            Some(2)
        );
        assert_eq!(record.name, "Asha");
        assert_eq!(record.age, "34");
        assert_eq!(record.exercise, None);
    }

    #[test]
    fn record_deserializes_loose_form_values() {
        let record: AnswerRecord = serde_json::from_value(json!({
            "name": "Ravi",
            "age": 42,
            "exercise": "2",
            "diet": "",
            "sleep": null,
            "stress": 3
        }))
        .expect("record parses");

        assert_eq!(record.age, "42");
        assert_eq!(record.exercise, Some(Choice::Value(2)));
        assert_eq!(record.diet, None);
        assert_eq!(record.sleep, None);
        assert_eq!(record.stress, Some(Choice::Value(3)));
        assert_eq!(record.checkup, None);
    }

    #[test]
    fn record_keeps_malformed_choices_instead_of_failing() {
        let record: AnswerRecord = serde_json::from_value(json!({
            "exercise": 3,
            "diet": "lots",
            "sleep": -1,
            "stress": 2.0,
            "checkup": 300
        }))
        .expect("malformed answers still parse");

        assert_eq!(record.exercise, Some(Choice::Value(3)));
        assert_eq!(record.diet, Some(Choice::Malformed("lots".to_string())));
        assert_eq!(record.sleep, Some(Choice::Malformed("-1".to_string())));
        assert_eq!(record.stress, Some(Choice::Value(2)));
        assert_eq!(record.checkup, Some(Choice::Malformed("300".to_string())));

        let nested: AnswerRecord =
            serde_json::from_value(json!({ "diet": true, "sleep": [1], "stress": { "x": 1 } }))
                .expect("non-scalar answers still parse");
        assert_eq!(nested.diet, Some(Choice::Malformed("true".to_string())));
        assert!(matches!(nested.sleep, Some(Choice::Malformed(_))));
        assert!(matches!(nested.stress, Some(Choice::Malformed(_))));
    }

    #[test]
    fn choice_text_parses_like_a_number_field() {
        assert_eq!(Choice::parse(" 2 "), Some(Choice::Value(2)));
        assert_eq!(Choice::parse("3.0"), Some(Choice::Value(3)));
        assert_eq!(Choice::parse("2.5"), Some(Choice::Malformed("2.5".to_string())));
        assert_eq!(Choice::parse("NaN"), Some(Choice::Malformed("NaN".to_string())));
        assert_eq!(Choice::parse("   "), None);
    }

    #[test]
    fn question_key_parses_labels() {
        assert_eq!(QuestionKey::parse(" Checkup "), Some(QuestionKey::Checkup));
        assert_eq!(QuestionKey::parse("hydration"), None);
    }
}
