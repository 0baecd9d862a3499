use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "MCSR Ranked all-season stats collector")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch every player listed in the input file and write the CSV report
    Report {
        /// Newline-separated list of usernames (defaults to names.txt)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// CSV file to write (defaults to output.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Index of the current season; all lower seasons count as history
        #[arg(short, long)]
        season: Option<u32>,
    },
    /// Aggregate a single player and print the result
    Player {
        /// Username to look up
        username: String,
        /// Index of the current season
        #[arg(short, long)]
        season: Option<u32>,
    },
}
