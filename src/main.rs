use anyhow::Result;

use mcsr_ranked_stats::cli::Command;
use mcsr_ranked_stats::{handle_player, handle_report, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Report {
            input,
            output,
            season,
        } => handle_report(input, output, season),
        Command::Player { username, season } => handle_player(&username, season),
    }
}
