//! Server configuration loaded from the environment.
//!
//! # Environment Variables
//!
//! - `HOST` — bind address (default: `0.0.0.0`)
//! - `PORT` — HTTP port (default: `5000`)
//! - `OPENAI_API_KEY` — completion API key; optional
//! - `OPENAI_BASE_URL` — completion API root (default: `https://api.openai.com/v1`)
//! - `OPENAI_TIMEOUT_SECS` — completion request timeout (default: `60`)

use std::time::Duration;

use thiserror::Error;

use crate::llms::providers::openai::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            openai_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        let openai_timeout = match var("OPENAI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>().map_err(|e| e.to_string()) {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        name: "OPENAI_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(secs) => Duration::from_secs(secs),
                Err(reason) => {
                    return Err(ConfigError::InvalidValue {
                        name: "OPENAI_TIMEOUT_SECS",
                        value: raw,
                        reason,
                    })
                }
            },
            None => defaults.openai_timeout,
        };

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            openai_api_key: var("OPENAI_API_KEY"),
            openai_base_url: var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
