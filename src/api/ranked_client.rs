use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::api::parsers;
use crate::api::source::SeasonSource;
use crate::config::RankedApiSettings;
use crate::domain::{SeasonRecord, Username};
use crate::errors::FetchError;
use crate::http::ApiHttpClient;

/// MCSR Ranked API client
#[derive(Clone)]
pub struct RankedClient {
    client: ApiHttpClient,
    base_url: String,
}

impl RankedClient {
    pub fn new(settings: &RankedApiSettings) -> Result<Self> {
        let client = ApiHttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    fn build_user_url(&self, username: &Username, season: u32) -> String {
        format!("{}/users/{}?season={}", self.base_url, username, season)
    }
}

#[async_trait]
impl SeasonSource for RankedClient {
    async fn fetch_season(
        &self,
        username: &Username,
        season: u32,
    ) -> Result<SeasonRecord, FetchError> {
        let url = self.build_user_url(username, season);
        debug!("Fetching {}", url);

        let body = self
            .client
            .get_text(&url)
            .await
            .map_err(|e| FetchError::Transport(format!("{:#}", e)))?;

        parsers::parse_season_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_url_carries_season_query() {
        let client = RankedClient::new(&RankedApiSettings::default()).unwrap();
        let username = Username::parse("Alice_1").unwrap();

        assert_eq!(
            client.build_user_url(&username, 3),
            "https://mcsrranked.com/api/users/Alice_1?season=3"
        );
    }
}
