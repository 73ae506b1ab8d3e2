//! cohort-dashboard - admin dashboard service for student records

#![allow(missing_docs)]

use clap::Parser;
use cohort_dashboard::cli::{Cli, Command, run_summary};
use cohort_dashboard::config::Config;
use cohort_dashboard::server;
use cohort_dashboard::utils::logging::{bootstrap_dispatch, init_tracing};
use std::process::ExitCode;
use tracing::instrument::WithSubscriber;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Loading logs through a scoped subscriber until the configured one is up
    let config = match Config::load(cli.config.as_deref())
        .with_subscriber(bootstrap_dispatch())
        .await
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(config.logging()) {
        eprintln!("Warning: {}", e);
    }

    let outcome = match cli.command() {
        Command::Serve => server::run_server(config).await.map_err(anyhow::Error::from),
        Command::Summary { search, tab, json } => {
            run_summary(&config, search.as_deref(), tab, json)
                .await
                .map(|text| print!("{}", text))
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
