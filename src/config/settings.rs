use std::path::PathBuf;

const BASE_URL_ENV: &str = "MCSR_API_BASE_URL";
const CURRENT_SEASON_ENV: &str = "MCSR_CURRENT_SEASON";

pub struct RankedApiSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub current_season: u32,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl Default for RankedApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://mcsrranked.com/api".to_string(),
            user_agent: "McsrRankedStats/0.1",
            current_season: 7,
            timeout_secs: None,
        }
    }
}

pub struct ReportSettings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("names.txt"),
            output_path: PathBuf::from("output.csv"),
        }
    }
}

pub struct AppConfig {
    pub api: RankedApiSettings,
    pub report: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: RankedApiSettings::default(),
            report: ReportSettings::default(),
        }
    }

    /// Defaults overridden by `MCSR_API_BASE_URL` and `MCSR_CURRENT_SEASON`
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(season) = std::env::var(CURRENT_SEASON_ENV)
            .ok()
            .and_then(|value| value.trim().parse().ok())
        {
            config.api.current_season = season;
        }

        config
    }

    pub fn with_current_season(mut self, season: Option<u32>) -> Self {
        if let Some(season) = season {
            self.api.current_season = season;
        }
        self
    }

    pub fn with_input_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.report.input_path = path;
        }
        self
    }

    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.report.output_path = path;
        }
        self
    }
}
