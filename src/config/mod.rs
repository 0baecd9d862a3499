pub mod settings;

pub use settings::{AppConfig, RankedApiSettings, ReportSettings};
