mod cli;
mod infra;
mod report;
mod routes;
mod server;
mod take;

use health_survey::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
