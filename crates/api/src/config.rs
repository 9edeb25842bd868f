//! Process configuration read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use orderflow_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "ORDERFLOW_BIND_ADDR";
pub const SEED_PATH_VAR: &str = "ORDERFLOW_SEED_PATH";
pub const LOG_FORMAT_VAR: &str = "ORDERFLOW_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    BindAddr { var: &'static str, value: String },

    #[error("{var}: {message}")]
    LogFormat { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog seed; the catalog starts empty without one.
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr.parse().map_err(|_| ConfigError::BindAddr {
            var: BIND_ADDR_VAR,
            value: raw_addr.clone(),
        })?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|message| ConfigError::LogFormat {
                var: LOG_FORMAT_VAR,
                message,
            })?,
            None => LogFormat::default(),
        };

        let seed_path = lookup(SEED_PATH_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            seed_path,
            log_format,
        })
    }
}
