use cca_club_seed::{config::seed_from_env, seed::exit_status};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = seed_from_env().await;
    match &result {
        Ok(report) => tracing::info!(
            clubs = report.clubs.len(),
            events = report.events.len(),
            memberships = report.memberships.len(),
            "seeded database"
        ),
        Err(e) => tracing::error!("{e}"),
    }

    ExitCode::from(exit_status(&result))
}
