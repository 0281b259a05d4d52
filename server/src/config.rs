//! Server configuration from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_JOBS_FILE: &str = "data/jobs.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("JOBS_FILE is set but empty")]
    EmptyJobsFile,
}

/// Typed server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub jobs_file: PathBuf,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `JOBS_FILE`: path to the job catalog JSON, default `data/jobs.json`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or `JOBS_FILE`
    /// is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            jobs_file: parse_jobs_file(std::env::var("JOBS_FILE").ok().as_deref())?,
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_jobs_file(raw: Option<&str>) -> Result<PathBuf, ConfigError> {
    match raw {
        None => Ok(PathBuf::from(DEFAULT_JOBS_FILE)),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyJobsFile),
        Some(value) => Ok(PathBuf::from(value.trim())),
    }
}
