use thiserror::Error;

/// Why a single (player, season) fetch produced no record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Transport(String),

    #[error("Request error: data is None\n{body}")]
    NoData { body: String },

    #[error("API error: {data}")]
    ApiError { data: String },

    #[error("Missing field '{key}'")]
    MissingField { key: String },

    #[error("Field '{key}' has unexpected value {value}")]
    InvalidField { key: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PredictionError {
    #[error("division by zero: time equals the curve offset of {offset}s")]
    DivisionByZero { offset: f64 },
}

/// Why a player produced no report row
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Stats error: current season is missing {}", .missing.join(", "))]
    IncompleteCurrentSeason { missing: Vec<&'static str> },

    #[error("Prediction error: {0}")]
    Prediction(#[from] PredictionError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid username '{0}'")]
pub struct InvalidUsername(pub String);
