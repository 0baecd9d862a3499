use std::fmt;

use serde::Serialize;

use crate::errors::{AggregateError, InvalidUsername};

/// Player name accepted by the ranking API: ASCII letters, digits and `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, InvalidUsername> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidUsername(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stats of one player for one season, every field independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRecord {
    pub lowest_rating: Option<i64>,
    pub highest_rating: Option<i64>,
    pub current_rating: Option<i64>,
    pub average_completion_time_micros: Option<f64>,
    pub best_time_micros: Option<i64>,
}

/// Validated current-season stats with the all-time highest rating folded in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub current_rating: i64,
    pub highest_rating: i64,
    pub lowest_rating: i64,
    pub average_completion_time_micros: f64,
    pub best_time_micros: i64,
    pub average_elo: i64,
    pub best_elo: i64,
}

#[derive(Debug)]
pub struct PlayerResult {
    pub username: Username,
    pub outcome: Result<PlayerRecord, AggregateError>,
}

impl PlayerResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
