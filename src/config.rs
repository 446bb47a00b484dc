use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{EmployeeError, Result};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const API_URL_ENV: &str = "EMPLOYEES_API_URL";

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| EmployeeError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| EmployeeError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "employees")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(EmployeeError::NoConfigDir)
    }

    /// Backend base URL, env var taking precedence over config file
    pub fn api_url(&self) -> Result<Url> {
        let raw = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        parse_base_url(&raw)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Parse a base URL, normalizing it to end in `/` so relative joins keep
/// any path prefix (e.g. `https://host/hr` + `api/employees`).
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    Url::parse(&normalized).map_err(|source| EmployeeError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}
