use std::env;
use std::time::Duration;

use reqwest::Url;

pub const API_URL_VAR: &str = "API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API_URL must not be blank")]
    BlankBaseUrl,

    #[error("API_URL is not a valid http(s) URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base path without a trailing slash, e.g. `http://localhost:5000/api`.
    pub base_url: String,
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Load the API location from the environment (`.env` honored).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::with_base_url(&raw)
    }

    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::BlankBaseUrl);
        }

        let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(format!(
                "unsupported scheme {}",
                url.scheme()
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        })
    }
}
