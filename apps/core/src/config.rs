use std::env;
use std::str::FromStr;

use crate::error::AppError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/pollstats.sqlite";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines for a terminal
    Pretty,
    /// Bunyan-style JSON records
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "POLLSTATS_LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                other
            ))),
        }
    }
}

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection string for the response store.
    pub database_url: String,
    /// Upper bound of the connection pool.
    pub max_connections: u32,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load a `.env` file if present, then read the environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is fine, the environment alone is enough
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Build the configuration from `POLLSTATS_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let database_url = env::var("POLLSTATS_DATABASE_URL").unwrap_or(defaults.database_url);

        let max_connections = match env::var("POLLSTATS_MAX_CONNECTIONS") {
            Ok(raw) => raw.trim().parse::<u32>().ok().filter(|&n| n > 0).ok_or_else(|| {
                AppError::Config(format!(
                    "POLLSTATS_MAX_CONNECTIONS must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            Err(_) => defaults.max_connections,
        };

        let log_level = env::var("POLLSTATS_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match env::var("POLLSTATS_LOG_FORMAT") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.log_format,
        };

        Ok(Self {
            database_url,
            max_connections,
            log_level,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "POLLSTATS_DATABASE_URL",
        "POLLSTATS_MAX_CONNECTIONS",
        "POLLSTATS_LOG_LEVEL",
        "POLLSTATS_LOG_FORMAT",
    ];

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars_unset(VARS, || {
            let config = AppConfig::from_env().expect("config");
            assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
            assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
            assert_eq!(config.log_level, "info");
            assert_eq!(config.log_format, LogFormat::Pretty);
        });
    }

    #[test]
    fn test_values_from_environment() {
        temp_env::with_vars(
            [
                ("POLLSTATS_DATABASE_URL", Some("sqlite://tmp/test.sqlite")),
                ("POLLSTATS_MAX_CONNECTIONS", Some("2")),
                ("POLLSTATS_LOG_LEVEL", Some("debug")),
                ("POLLSTATS_LOG_FORMAT", Some("JSON")),
            ],
            || {
                let config = AppConfig::from_env().expect("config");
                assert_eq!(config.database_url, "sqlite://tmp/test.sqlite");
                assert_eq!(config.max_connections, 2);
                assert_eq!(config.log_level, "debug");
                assert_eq!(config.log_format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn test_malformed_values_are_config_errors() {
        temp_env::with_var("POLLSTATS_MAX_CONNECTIONS", Some("lots"), || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        });

        temp_env::with_var("POLLSTATS_MAX_CONNECTIONS", Some("0"), || {
            assert!(AppConfig::from_env().is_err());
        });

        temp_env::with_vars(
            [
                ("POLLSTATS_MAX_CONNECTIONS", None),
                ("POLLSTATS_LOG_FORMAT", Some("xml")),
            ],
            || {
                let err = AppConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("POLLSTATS_LOG_FORMAT"));
            },
        );
    }
}
