pub mod models;

pub use models::{PlayerRecord, PlayerResult, SeasonRecord, Username};
