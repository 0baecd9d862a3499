use std::sync::Arc;

use futures_util::future::join_all;
use log::{info, warn};

use crate::api::SeasonSource;
use crate::domain::{PlayerRecord, PlayerResult, SeasonRecord, Username};
use crate::errors::{AggregateError, FetchError};
use crate::rating;

/// Current-season stats after the completeness check
struct CurrentSeason {
    current_rating: i64,
    highest_rating: i64,
    lowest_rating: i64,
    average_completion_time_micros: f64,
    best_time_micros: i64,
}

/// Folds the current season and every earlier season of a player into one record
pub struct PlayerAggregator {
    source: Arc<dyn SeasonSource>,
    current_season: u32,
}

impl PlayerAggregator {
    pub fn new(source: Arc<dyn SeasonSource>, current_season: u32) -> Self {
        Self {
            source,
            current_season,
        }
    }

    pub fn current_season(&self) -> u32 {
        self.current_season
    }

    pub async fn aggregate(&self, username: &Username) -> PlayerResult {
        let outcome = self.aggregate_record(username).await;
        PlayerResult {
            username: username.clone(),
            outcome,
        }
    }

    async fn aggregate_record(&self, username: &Username) -> Result<PlayerRecord, AggregateError> {
        // A failed or incomplete current season never fetches history
        let current = self
            .source
            .fetch_season(username, self.current_season)
            .await?;
        let current = validate_current(&current)?;

        let history = self.fetch_history(username).await;
        let highest_rating = reduce_highest(current.highest_rating, history);

        let record = build_record(&current, highest_rating)?;
        info!("Aggregated {} across {} seasons", username, self.current_season + 1);
        Ok(record)
    }

    /// Highest rating of every earlier season that returned one
    async fn fetch_history(&self, username: &Username) -> Vec<Option<i64>> {
        let fetches = (0..self.current_season).map(|season| async move {
            (season, self.source.fetch_season(username, season).await)
        });

        join_all(fetches)
            .await
            .into_iter()
            .map(|(season, result)| Self::historical_highest(username, season, result))
            .collect()
    }

    fn historical_highest(
        username: &Username,
        season: u32,
        result: Result<SeasonRecord, FetchError>,
    ) -> Option<i64> {
        match result {
            Ok(record) => record.highest_rating,
            Err(e) => {
                warn!("Season {} error for {}\n{}", season, username, e);
                None
            }
        }
    }
}

/// Zero counts as missing for every field
fn validate_current(record: &SeasonRecord) -> Result<CurrentSeason, AggregateError> {
    let current_rating = record.current_rating.filter(|v| *v != 0);
    let highest_rating = record.highest_rating.filter(|v| *v != 0);
    let lowest_rating = record.lowest_rating.filter(|v| *v != 0);
    let average_time = record.average_completion_time_micros.filter(|v| *v != 0.0);
    let best_time = record.best_time_micros.filter(|v| *v != 0);

    match (current_rating, highest_rating, lowest_rating, average_time, best_time) {
        (
            Some(current_rating),
            Some(highest_rating),
            Some(lowest_rating),
            Some(average_completion_time_micros),
            Some(best_time_micros),
        ) => Ok(CurrentSeason {
            current_rating,
            highest_rating,
            lowest_rating,
            average_completion_time_micros,
            best_time_micros,
        }),
        _ => {
            let missing = [
                ("averageCompletionTime", average_time.is_none()),
                ("bestTime", best_time.is_none()),
                ("currentRating", current_rating.is_none()),
                ("highestRating", highest_rating.is_none()),
                ("lowestRating", lowest_rating.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, is_missing)| is_missing.then_some(name))
            .collect();
            Err(AggregateError::IncompleteCurrentSeason { missing })
        }
    }
}

fn reduce_highest(current: i64, history: impl IntoIterator<Item = Option<i64>>) -> i64 {
    history.into_iter().flatten().fold(current, i64::max)
}

fn build_record(
    current: &CurrentSeason,
    highest_rating: i64,
) -> Result<PlayerRecord, AggregateError> {
    let average_elo = rating::average_elo(current.average_completion_time_micros)?;
    let best_elo = rating::best_elo(current.best_time_micros as f64)?;

    Ok(PlayerRecord {
        current_rating: current.current_rating,
        highest_rating,
        lowest_rating: current.lowest_rating,
        average_completion_time_micros: current.average_completion_time_micros,
        best_time_micros: current.best_time_micros,
        average_elo,
        best_elo,
    })
}
