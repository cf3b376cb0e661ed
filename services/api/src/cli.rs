use crate::report::{run_bulk, run_score, BulkArgs, ScoreArgs};
use crate::server;
use crate::take::{run_take, TakeArgs};
use clap::{Args, Parser, Subcommand};
use health_survey::config::AppConfig;
use health_survey::error::AppError;
use health_survey::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Health Awareness Survey",
    about = "Score the lifestyle survey from the command line or serve it over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Answer the survey interactively in the terminal
    Take(TakeArgs),
    /// Score one set of answers given as flags
    Score(ScoreArgs),
    /// Score every row of a CSV export
    Bulk(BulkArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Take(args) => run_take(&config, args),
        Command::Score(args) => run_score(&config, args),
        Command::Bulk(args) => run_bulk(&config, args),
    }
}
