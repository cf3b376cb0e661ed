use crate::infra::ConfiguredStore;
use chrono::Utc;
use clap::Args;
use health_survey::config::AppConfig;
use health_survey::error::AppError;
use health_survey::survey::{
    read_answer_records, AnswerRecord, Choice, DocumentStore, ScoringEngine, SurveySession,
};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    #[arg(long, default_value = "")]
    pub(crate) age: String,
    /// Exercise answer value (0-3); anything else scores zero
    #[arg(long)]
    pub(crate) exercise: Option<String>,
    #[arg(long)]
    pub(crate) diet: Option<String>,
    #[arg(long)]
    pub(crate) sleep: Option<String>,
    #[arg(long)]
    pub(crate) stress: Option<String>,
    #[arg(long)]
    pub(crate) checkup: Option<String>,
    /// Persist the submission to the configured store
    #[arg(long)]
    pub(crate) save: bool,
}

impl ScoreArgs {
    fn record(&self) -> AnswerRecord {
        AnswerRecord {
            name: self.name.clone(),
            age: self.age.clone(),
            exercise: self.exercise.as_deref().and_then(Choice::parse),
            diet: self.diet.as_deref().and_then(Choice::parse),
            sleep: self.sleep.as_deref().and_then(Choice::parse),
            stress: self.stress.as_deref().and_then(Choice::parse),
            checkup: self.checkup.as_deref().and_then(Choice::parse),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BulkArgs {
    /// CSV file with a name,age,exercise,diet,sleep,stress,checkup header
    pub(crate) path: PathBuf,
    /// Persist every row that passes validation
    #[arg(long)]
    pub(crate) save: bool,
}

pub(crate) fn run_score(config: &AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let engine = Arc::new(ScoringEngine::new(config.survey.scoring));
    let stdout = io::stdout();
    let mut output = stdout.lock();

    if args.save {
        let store = ConfiguredStore::from_config(&config.survey)?;
        submit_and_print(
            &mut output,
            engine,
            &store,
            &config.survey.collection,
            args.record(),
        )
    } else {
        write!(output, "{}", engine.score(&args.record()))?;
        Ok(())
    }
}

pub(crate) fn run_bulk(config: &AppConfig, args: BulkArgs) -> Result<(), AppError> {
    let engine = Arc::new(ScoringEngine::new(config.survey.scoring));
    let file = BufReader::new(File::open(&args.path)?);
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let summary = if args.save {
        let store = ConfiguredStore::from_config(&config.survey)?;
        score_rows(
            file,
            &mut output,
            engine,
            Some((&store, config.survey.collection.as_str())),
        )?
    } else {
        score_rows::<_, _, ConfiguredStore>(file, &mut output, engine, None)?
    };

    info!(
        path = %args.path.display(),
        scored = summary.scored,
        skipped = summary.skipped,
        "bulk scoring finished"
    );
    Ok(())
}

fn submit_and_print<W, S>(
    output: &mut W,
    engine: Arc<ScoringEngine>,
    store: &S,
    collection: &str,
    record: AnswerRecord,
) -> Result<(), AppError>
where
    W: Write,
    S: DocumentStore + ?Sized,
{
    let mut session = SurveySession::from_record(engine, collection, record);
    let outcome = session.submit_with(store, Utc::now())?;
    if let Some(notice) = session.notice() {
        writeln!(output, "{}", notice.message())?;
    }
    write!(output, "{}", outcome.result)?;
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct BulkSummary {
    pub(crate) scored: usize,
    pub(crate) skipped: usize,
}

/// Writes one `name: score/max (tier)` line per row. Rows that cannot be read
/// as a record, or fail validation when saving, are reported and skipped.
pub(crate) fn score_rows<R, W, S>(
    reader: R,
    output: &mut W,
    engine: Arc<ScoringEngine>,
    save: Option<(&S, &str)>,
) -> Result<BulkSummary, AppError>
where
    R: Read,
    W: Write,
    S: DocumentStore + ?Sized,
{
    let mut summary = BulkSummary::default();

    for (index, row) in read_answer_records(reader).enumerate() {
        let row_number = index + 1;
        let record = match row {
            Ok(record) => record,
            Err(error) => {
                warn!(row = row_number, %error, "skipping unreadable survey row");
                writeln!(output, "row {row_number} skipped: {error}")?;
                summary.skipped += 1;
                continue;
            }
        };

        let result = match save {
            Some((store, collection)) => {
                let mut session = SurveySession::from_record(engine.clone(), collection, record);
                match session.submit_with(store, Utc::now()) {
                    Ok(outcome) => {
                        if let Some(notice) = session.notice() {
                            writeln!(output, "row {row_number}: {}", notice.message())?;
                        }
                        outcome.result
                    }
                    Err(error) if error.is_input_error() => {
                        writeln!(output, "row {row_number} skipped: {error}")?;
                        summary.skipped += 1;
                        continue;
                    }
                    Err(error) => return Err(error.into()),
                }
            }
            None => engine.score(&record),
        };

        let name = if result.name.is_empty() {
            "User"
        } else {
            result.name.as_str()
        };
        writeln!(
            output,
            "{name}: {}/{} ({})",
            result.score,
            result.max_score,
            result.tier.label()
        )?;
        summary.scored += 1;
    }

    Ok(summary)
}
