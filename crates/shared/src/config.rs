//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Persistence configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Report output configuration.
    #[serde(default)]
    pub reports: ReportConfig,
    /// Notification thresholds.
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the whole user state is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding every user and wallet.
    #[serde(default = "default_users_path")]
    pub users_path: PathBuf,
}

fn default_users_path() -> PathBuf {
    PathBuf::from("users.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory that generated CSV reports are written into.
    #[serde(default = "default_report_dir")]
    pub directory: PathBuf,
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            directory: default_report_dir(),
        }
    }
}

/// Thresholds for advisory notifications, in whole percent.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// Budget usage (percent of limit) at which a near-limit warning starts.
    #[serde(default = "default_near_limit_percent")]
    pub near_limit_percent: u8,
    /// Balance below this share of total income (percent) is reported as low.
    #[serde(default = "default_low_balance_percent")]
    pub low_balance_percent: u8,
}

fn default_near_limit_percent() -> u8 {
    80
}

fn default_low_balance_percent() -> u8 {
    10
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            near_limit_percent: default_near_limit_percent(),
            low_balance_percent: default_low_balance_percent(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "tally=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `TALLY__SECTION__KEY` environment variables. Every file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Same as [`AppConfig::load`] with an explicit config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
