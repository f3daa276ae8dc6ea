// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const fn default_max_connections() -> u32 {
    5
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DB_URL` is unset or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DB_URL"))?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            None => default_max_connections(),
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "DB_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    ))
                })?,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }
}
