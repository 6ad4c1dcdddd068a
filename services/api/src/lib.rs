mod cli;
mod infra;
mod report;
mod routes;
mod server;

use purchase_check::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
