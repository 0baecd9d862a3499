use async_trait::async_trait;

use crate::domain::{SeasonRecord, Username};
use crate::errors::FetchError;

/// Where per-season player stats come from
#[async_trait]
pub trait SeasonSource: Send + Sync {
    async fn fetch_season(
        &self,
        username: &Username,
        season: u32,
    ) -> Result<SeasonRecord, FetchError>;
}
