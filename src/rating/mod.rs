pub mod predictor;

pub use predictor::{average_elo, best_elo};
