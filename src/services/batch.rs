use anyhow::Result;
use futures_util::future::join_all;
use log::{error, info};
use std::io::Write;

use crate::domain::{PlayerResult, Username};
use crate::errors::InvalidUsername;
use crate::report::ReportWriter;
use crate::services::PlayerAggregator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub failed: usize,
}

/// Aggregates a list of players concurrently and reports them in input order
pub struct BatchRunner {
    aggregator: PlayerAggregator,
}

impl BatchRunner {
    pub fn new(aggregator: PlayerAggregator) -> Self {
        Self { aggregator }
    }

    /// Validate every name up front; one bad name rejects the whole batch
    pub fn prepare(raw_names: &[String]) -> Result<Vec<Username>, InvalidUsername> {
        raw_names.iter().map(|raw| Username::parse(raw)).collect()
    }

    pub async fn run<W: Write>(
        &self,
        usernames: &[Username],
        report: &mut ReportWriter<W>,
    ) -> Result<BatchSummary> {
        info!(
            "Fetching {} players (current season {})",
            usernames.len(),
            self.aggregator.current_season()
        );

        let results = self.aggregate_all(usernames).await;
        let summary = Self::write_results(results, report)?;

        info!(
            "Wrote {} rows, {} players failed",
            summary.written, summary.failed
        );
        Ok(summary)
    }

    /// Results come back in the same order as `usernames`
    pub async fn aggregate_all(&self, usernames: &[Username]) -> Vec<PlayerResult> {
        join_all(
            usernames
                .iter()
                .map(|username| self.aggregator.aggregate(username)),
        )
        .await
    }

    fn write_results<W: Write>(
        results: Vec<PlayerResult>,
        report: &mut ReportWriter<W>,
    ) -> Result<BatchSummary> {
        let mut summary = BatchSummary {
            written: 0,
            failed: 0,
        };

        for result in results {
            match &result.outcome {
                Ok(record) => {
                    report.write_player(&result.username, record)?;
                    summary.written += 1;
                }
                Err(e) => {
                    error!("Could not get user {}\n{}", result.username, e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FetchError;
    use crate::services::test_support::{FakeSource, complete_season, history_season};
    use std::sync::Arc;
    use std::time::Duration;

    fn raw(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn runner(source: &Arc<FakeSource>, current_season: u32) -> BatchRunner {
        BatchRunner::new(PlayerAggregator::new(source.clone(), current_season))
    }

    async fn run_to_string(runner: &BatchRunner, names: &[&str]) -> (BatchSummary, String) {
        let usernames = BatchRunner::prepare(&raw(names)).unwrap();
        let mut report = ReportWriter::new(Vec::new()).unwrap();
        let summary = runner.run(&usernames, &mut report).await.unwrap();
        let output = String::from_utf8(report.finish().unwrap()).unwrap();
        (summary, output)
    }

    #[test]
    fn test_prepare_keeps_input_order() {
        let usernames = BatchRunner::prepare(&raw(&["Zed", "Alice", "bob_2"])).unwrap();
        let names: Vec<&str> = usernames.iter().map(Username::as_str).collect();
        assert_eq!(names, vec!["Zed", "Alice", "bob_2"]);
    }

    #[test]
    fn test_one_invalid_name_rejects_batch() {
        let result = BatchRunner::prepare(&raw(&["Alice", "Bad Name", "Bob"]));
        assert_eq!(result, Err(InvalidUsername("Bad Name".to_string())));

        let result = BatchRunner::prepare(&raw(&["Alice", "Bob!"]));
        assert_eq!(result, Err(InvalidUsername("Bob!".to_string())));
    }

    #[tokio::test]
    async fn test_rows_follow_input_order_not_completion_order() {
        let source = Arc::new(
            FakeSource::new()
                .with_season("Slow", 1, complete_season(1000, 1100, 900))
                .with_season("Fast", 1, complete_season(2000, 2100, 1900))
                .with_delay("Slow", Duration::from_millis(50)),
        );

        let (summary, output) = run_to_string(&runner(&source, 1), &["Slow", "Fast"]).await;

        assert_eq!(summary, BatchSummary { written: 2, failed: 0 });
        let rows: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(
            rows,
            vec!["Slow,1000,1100,900,1248,1197", "Fast,2000,2100,1900,1248,1197"]
        );
    }

    #[tokio::test]
    async fn test_failed_player_is_left_out_of_report() {
        let source = Arc::new(
            FakeSource::new()
                .with_season("Alice", 7, complete_season(1500, 1600, 1200))
                .with_season("Alice", 4, history_season(Some(1750)))
                .with_failure("Bob", 7, FetchError::Transport("timed out".to_string())),
        );

        let (summary, output) = run_to_string(&runner(&source, 7), &["Bob", "Alice"]).await;

        assert_eq!(summary, BatchSummary { written: 1, failed: 1 });
        assert_eq!(output.lines().nth(1), Some("Alice,1500,1750,1200,1248,1197"));
        assert_eq!(source.requested_seasons("Bob"), vec![7]);
    }

    #[tokio::test]
    async fn test_alice_with_failed_history_and_bob_failing_outright() {
        // Unregistered seasons answer with an API error
        let source = Arc::new(
            FakeSource::new().with_season("Alice", 7, complete_season(1500, 1600, 1200)),
        );

        let (summary, output) = run_to_string(&runner(&source, 7), &["Alice", "Bob"]).await;

        assert_eq!(summary, BatchSummary { written: 1, failed: 1 });
        assert_eq!(
            output,
            "Name,Current Elo,Highest of all time,Current season lowest,Average time pred,Best time pred\n\
             Alice,1500,1600,1200,1248,1197\n"
        );
        assert_eq!(source.requested_seasons("Alice"), (0..=7).collect::<Vec<u32>>());
        assert_eq!(source.requested_seasons("Bob"), vec![7]);
    }
}
