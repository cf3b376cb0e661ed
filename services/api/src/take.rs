use crate::infra::ConfiguredStore;
use chrono::Utc;
use clap::Args;
use health_survey::config::AppConfig;
use health_survey::error::AppError;
use health_survey::survey::{
    awareness_content, DocumentStore, FieldUpdate, RequiredField, ScoringEngine, SubmissionError,
    SubmissionOutcome, SurveySession,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Save into this collection instead of the configured one
    #[arg(long)]
    pub(crate) collection: Option<String>,
}

pub(crate) fn run_take(config: &AppConfig, args: TakeArgs) -> Result<(), AppError> {
    let store = ConfiguredStore::from_config(&config.survey)?;
    let collection = args
        .collection
        .unwrap_or_else(|| config.survey.collection.clone());
    let engine = Arc::new(ScoringEngine::new(config.survey.scoring));
    let mut session = SurveySession::new(engine, collection);

    let stdin = io::stdin();
    let stdout = io::stdout();
    conduct_survey(&mut stdin.lock(), &mut stdout.lock(), &mut session, &store)?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Shows the awareness content, walks the respondent through the form,
/// submits, and prints the results panel. Returns `None` if input ends before
/// a submit succeeds.
pub(crate) fn conduct_survey<R, W, S>(
    input: &mut R,
    output: &mut W,
    session: &mut SurveySession,
    store: &S,
) -> Result<Option<SubmissionOutcome>, AppError>
where
    R: BufRead,
    W: Write,
    S: DocumentStore + ?Sized,
{
    write!(output, "{}", awareness_content())?;
    writeln!(output)?;
    writeln!(output, "Health Awareness Survey")?;
    writeln!(
        output,
        "Answer these quick questions to check your health and wellness awareness."
    )?;

    if let Some(name) = prompt(input, output, "Full name")? {
        session.set_field(FieldUpdate::Name(name));
    }
    if let Some(age) = prompt(input, output, "Age")? {
        session.set_field(FieldUpdate::Age(age));
    }

    let questions = session.questions().clone();
    for question in questions.questions() {
        writeln!(output)?;
        writeln!(output, "{}", question.prompt)?;
        for (index, option) in question.options.iter().enumerate() {
            writeln!(output, "  {} => {}", index + 1, option.label)?;
        }

        while let Some(answer) = prompt(input, output, "Choice (1-4, blank to skip)")? {
            if answer.is_empty() {
                break;
            }
            let by_number = answer
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| question.options.get(index));
            if let Some(option) = by_number {
                session.set_field(FieldUpdate::Choice(question.key, option.value));
                break;
            }
            match session.select_option(question.key, &answer) {
                Ok(()) => break,
                Err(_) => writeln!(output, "Please answer with a number from 1 to 4.")?,
            }
        }
    }

    loop {
        writeln!(output)?;
        writeln!(output, "[{}]", session.submit_label())?;
        match session.submit_with(store, Utc::now()) {
            Ok(outcome) => {
                if let Some(notice) = session.notice() {
                    writeln!(output, "{}", notice.message())?;
                }
                writeln!(output)?;
                write!(output, "{}", outcome.result)?;
                return Ok(Some(outcome));
            }
            Err(SubmissionError::MissingRequiredField { field }) => {
                if let Some(notice) = session.notice() {
                    writeln!(output, "{}", notice.message())?;
                }
                let (label, update): (&str, fn(String) -> FieldUpdate) = match field {
                    RequiredField::Name => ("Full name", FieldUpdate::Name),
                    RequiredField::Age => ("Age", FieldUpdate::Age),
                };
                match prompt(input, output, label)? {
                    Some(value) => session.set_field(update(value)),
                    None => return Ok(None),
                }
            }
            Err(other) => return Err(other.into()),
        }
    }
}
