//! Session configuration.
//!
//! Values come from the process environment with built-in defaults:
//!
//! | variable | default |
//! |----------|---------|
//! | `STOREFRONT_CATALOG_URL` | [`DEFAULT_CATALOG_URL`] |
//! | `STOREFRONT_LOG_FORMAT` | `json` |

use reqwest::Url;
use storefront_observability::logging::LogFormat;
use thiserror::Error;

/// Product catalog endpoint used when nothing is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://api.escuelajs.co/api/v1/products";

pub const CATALOG_URL_ENV: &str = "STOREFRONT_CATALOG_URL";
pub const LOG_FORMAT_ENV: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL ({value:?}): {reason}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("{var} must be \"json\" or \"pretty\", got {value:?}")]
    InvalidLogFormat { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub catalog_url: Url,
    pub log_format: LogFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            catalog_url: Url::parse(DEFAULT_CATALOG_URL).expect("default catalog URL is valid"),
            log_format: LogFormat::default(),
        }
    }
}

impl SessionConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables (unset or blank means default).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = get(CATALOG_URL_ENV) {
            config.catalog_url = parse_catalog_url(&raw)?;
        }

        if let Some(raw) = get(LOG_FORMAT_ENV) {
            config.log_format = LogFormat::from_name(&raw).ok_or(ConfigError::InvalidLogFormat {
                var: LOG_FORMAT_ENV,
                value: raw,
            })?;
        }

        Ok(config)
    }
}

fn parse_catalog_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        var: CATALOG_URL_ENV,
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other:?}"))),
    }
}
