use serde_json::Value;

use crate::domain::SeasonRecord;
use crate::errors::FetchError;

const SUCCESS_STATUS: &str = "success";

const ELO_RATE: &[&str] = &["eloRate"];
const SEASON_HIGHEST: &[&str] = &["seasonResult", "highest"];
const SEASON_LOWEST: &[&str] = &["seasonResult", "lowest"];
const BEST_TIME: &[&str] = &["statistics", "season", "bestTime", "ranked"];
const COMPLETION_TIME: &[&str] = &["statistics", "season", "completionTime", "ranked"];
const COMPLETIONS: &[&str] = &["statistics", "season", "completions", "ranked"];

/// Parse a raw response body from the user endpoint
pub fn parse_season_body(body: &str) -> Result<SeasonRecord, FetchError> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::Transport(format!("response is not JSON: {}", e)))?;
    parse_season_response(&json)
}

/// Classify a decoded response: no data, API error, incomplete payload or a record
pub fn parse_season_response(json: &Value) -> Result<SeasonRecord, FetchError> {
    let data = extract_data(json)?;
    check_status(json, data)?;

    let current_rating = integer_field(data, ELO_RATE)?;
    let highest_rating = integer_field(data, SEASON_HIGHEST)?;
    let lowest_rating = integer_field(data, SEASON_LOWEST)?;
    let best_time_micros = integer_field(data, BEST_TIME)?;
    let completion_time = integer_field(data, COMPLETION_TIME)?;
    let completions = integer_field(data, COMPLETIONS)?;

    Ok(SeasonRecord {
        lowest_rating,
        highest_rating,
        current_rating,
        average_completion_time_micros: average_time(completion_time, completions),
        best_time_micros,
    })
}

fn extract_data(json: &Value) -> Result<&Value, FetchError> {
    match json.get("data") {
        None | Some(Value::Null) => Err(FetchError::NoData {
            body: json.to_string(),
        }),
        Some(data) => Ok(data),
    }
}

fn check_status(json: &Value, data: &Value) -> Result<(), FetchError> {
    match json.get("status").and_then(Value::as_str) {
        Some(SUCCESS_STATUS) => Ok(()),
        _ => Err(FetchError::ApiError {
            data: data.to_string(),
        }),
    }
}

/// Walk `path`; an absent key or a non-object parent is a missing field
fn lookup<'a>(data: &'a Value, path: &[&str]) -> Result<&'a Value, FetchError> {
    path.iter().try_fold(data, |node, key| {
        node.as_object()
            .and_then(|object| object.get(*key))
            .ok_or_else(|| FetchError::MissingField {
                key: path.join("."),
            })
    })
}

fn integer_field(data: &Value, path: &[&str]) -> Result<Option<i64>, FetchError> {
    match lookup(data, path)? {
        Value::Null => Ok(None),
        value => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| FetchError::InvalidField {
                key: path.join("."),
                value: value.to_string(),
            }),
    }
}

fn average_time(total: Option<i64>, count: Option<i64>) -> Option<f64> {
    match (total, count) {
        (Some(total), Some(count)) if count != 0 => Some(total as f64 / count as f64),
        _ => None,
    }
}
