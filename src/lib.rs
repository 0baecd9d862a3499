pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod rating;
pub mod report;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{RankedClient, SeasonSource};
use crate::cli::Command;
use crate::config::AppConfig;
use crate::domain::Username;
use crate::report::{ReportWriter, read_usernames};
use crate::services::{BatchRunner, BatchSummary, PlayerAggregator};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_report(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    season: Option<u32>,
) -> Result<()> {
    let config = AppConfig::from_env()
        .with_input_path(input)
        .with_output_path(output)
        .with_current_season(season);
    let source = Arc::new(RankedClient::new(&config.api)?);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_report(source, &config))?;

    println!("Done! Check {}", config.report.output_path.display());
    Ok(())
}

pub fn handle_player(username: &str, season: Option<u32>) -> Result<()> {
    let config = AppConfig::from_env().with_current_season(season);
    let username = Username::parse(username)?;
    let source = Arc::new(RankedClient::new(&config.api)?);
    let aggregator = PlayerAggregator::new(source, config.api.current_season);

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(aggregator.aggregate(&username));

    let record = result
        .outcome
        .with_context(|| format!("Could not get user {}", result.username))?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Read the username list, aggregate every player and write the CSV report.
/// Usernames are validated before any request is sent or the report is created.
pub async fn run_report(source: Arc<dyn SeasonSource>, config: &AppConfig) -> Result<BatchSummary> {
    let raw_names = read_usernames(&config.report.input_path)?;
    let usernames = BatchRunner::prepare(&raw_names)?;
    info!(
        "Loaded {} usernames from {}",
        usernames.len(),
        config.report.input_path.display()
    );

    let mut report = ReportWriter::create(&config.report.output_path)?;
    let runner = BatchRunner::new(PlayerAggregator::new(source, config.api.current_season));
    let summary = runner.run(&usernames, &mut report).await?;
    report.finish()?;

    Ok(summary)
}
