//! Application configuration.
//!
//! Values come from `MFGERP_*` environment variables layered over built-in
//! defaults, e.g. `MFGERP_LOG_LEVEL=debug`, `MFGERP_SESSION_DIR=/tmp/mfgerp`.

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

use mfgerp_observability::TracingOptions;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOGIN_LATENCY_MS: u64 = 500;
const ENV_PREFIX: &str = "MFGERP";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// JSON log lines (structured logging).
    #[serde(default = "default_true")]
    pub log_json: bool,

    /// Directory for the persisted session slot; in-memory when absent.
    #[serde(default)]
    pub session_dir: Option<PathBuf>,

    #[serde(default = "default_login_latency_ms")]
    pub login_latency_ms: u64,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_login_latency_ms() -> u64 {
    DEFAULT_LOGIN_LATENCY_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: true,
            session_dir: None,
            login_latency_ms: DEFAULT_LOGIN_LATENCY_MS,
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("log_json", true)?
            .set_default("login_latency_ms", DEFAULT_LOGIN_LATENCY_MS as i64)?
            .add_source(env.try_parsing(true))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }

    pub fn tracing_options(&self) -> TracingOptions {
        TracingOptions {
            level: self.log_level.to_ascii_lowercase(),
            json: self.log_json,
        }
    }
}
