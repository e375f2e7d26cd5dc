use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Default window of days before the current date that trends look back over
pub const DEFAULT_WINDOW_DAYS: i64 = 90;

/// Default distance in days between the current date and the basis date
pub const DEFAULT_BASIS_SHIFT_DAYS: i64 = 7;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub trend: TrendSettings,
    #[serde(default)]
    pub input: InputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrendSettings {
    /// Current date as `YYYYMMDD` or `YYYY-MM-DD`; latest input date when unset
    pub date: Option<String>,
    pub window_days: i64,
    pub basis_shift_days: i64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct InputSettings {
    /// JSON rows file; stdin when unset
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load settings with config files looked up in `config_dir`
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("trend.window_days", DEFAULT_WINDOW_DAYS)?
            .set_default("trend.basis_shift_days", DEFAULT_BASIS_SHIFT_DAYS)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            // Add configuration files if they exist
            .add_source(File::from(config_dir.join("default")).required(false))
            .add_source(File::from(config_dir.join(&environment)).required(false))
            .add_source(File::from(config_dir.join("local")).required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("SIGNAL_TREND").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format.eq_ignore_ascii_case("json")
    }
}
