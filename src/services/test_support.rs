use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::SeasonSource;
use crate::domain::{SeasonRecord, Username};
use crate::errors::FetchError;

/// In-memory season source that records every request it serves
#[derive(Default)]
pub struct FakeSource {
    responses: HashMap<(String, u32), Result<SeasonRecord, FetchError>>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<(String, u32)>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_season(mut self, username: &str, season: u32, record: SeasonRecord) -> Self {
        self.responses
            .insert((username.to_string(), season), Ok(record));
        self
    }

    pub fn with_failure(mut self, username: &str, season: u32, error: FetchError) -> Self {
        self.responses
            .insert((username.to_string(), season), Err(error));
        self
    }

    pub fn with_delay(mut self, username: &str, delay: Duration) -> Self {
        self.delays.insert(username.to_string(), delay);
        self
    }

    pub fn requests(&self) -> Vec<(String, u32)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_seasons(&self, username: &str) -> Vec<u32> {
        let mut seasons: Vec<u32> = self
            .requests()
            .into_iter()
            .filter(|(name, _)| name == username)
            .map(|(_, season)| season)
            .collect();
        seasons.sort_unstable();
        seasons
    }
}

#[async_trait]
impl SeasonSource for FakeSource {
    async fn fetch_season(
        &self,
        username: &Username,
        season: u32,
    ) -> Result<SeasonRecord, FetchError> {
        self.requests
            .lock()
            .unwrap()
            .push((username.to_string(), season));

        if let Some(delay) = self.delays.get(username.as_str()) {
            tokio::time::sleep(*delay).await;
        }

        self.responses
            .get(&(username.to_string(), season))
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::ApiError {
                    data: "\"User is not exists\"".to_string(),
                })
            })
    }
}

/// Current-season stats that pass the completeness check
pub fn complete_season(current: i64, highest: i64, lowest: i64) -> SeasonRecord {
    SeasonRecord {
        lowest_rating: Some(lowest),
        highest_rating: Some(highest),
        current_rating: Some(current),
        average_completion_time_micros: Some(945000.0),
        best_time_micros: Some(732000),
    }
}

pub fn history_season(highest: Option<i64>) -> SeasonRecord {
    SeasonRecord {
        highest_rating: highest,
        ..SeasonRecord::default()
    }
}
