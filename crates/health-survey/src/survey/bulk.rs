use std::io::Read;

use serde::Deserialize;

use super::domain::{deserialize_choice, AnswerRecord, Choice};

/// Reads answer records from CSV with a `name,age,exercise,diet,sleep,stress,checkup`
/// header. Blank answer cells are unset and malformed ones are kept for scoring as
/// zero. Each row is parsed independently so a structurally broken row does not
/// stop the rest.
pub fn read_answer_records<R: Read>(
    reader: R,
) -> impl Iterator<Item = Result<AnswerRecord, csv::Error>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize::<AnswerRow>()
        .map(|row| row.map(AnswerRecord::from))
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    age: String,
    #[serde(default, deserialize_with = "deserialize_choice")]
    exercise: Option<Choice>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    diet: Option<Choice>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    sleep: Option<Choice>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    stress: Option<Choice>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    checkup: Option<Choice>,
}

impl From<AnswerRow> for AnswerRecord {
    fn from(row: AnswerRow) -> Self {
        AnswerRecord {
            name: row.name,
            age: row.age,
            exercise: row.exercise,
            diet: row.diet,
            sleep: row.sleep,
            stress: row.stress,
            checkup: row.checkup,
        }
    }
}
