//! rds-params
//!
//! Compares two AWS RDS parameter groups and writes a report.

mod app;
mod cli;
mod config;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::Outcome;
use crate::cli::Args;

const CRATES: [&str; 4] = ["rds_params", "rds_source", "rds_compare", "rds_tui"];

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let directives = CRATES
        .iter()
        .map(|c| format!("{}={}", c, level))
        .chain(std::iter::once("warn".to_string()))
        .collect::<Vec<_>>()
        .join(",");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match app::run(&args).await {
        Ok(Outcome::Listed(groups)) => {
            for group in &groups {
                println!("{}", group);
            }
            ExitCode::SUCCESS
        }
        Ok(Outcome::Written { path, summary }) => {
            println!("Report generated: {}", path.display());
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Cancelled) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
