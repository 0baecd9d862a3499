pub mod season;

pub use season::{parse_season_body, parse_season_response};
