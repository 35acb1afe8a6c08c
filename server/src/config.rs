//! Host configuration, read once from the environment at startup.
//!
//! | variable              | default                      |
//! |-----------------------|------------------------------|
//! | `PORTAL_HOST`         | `127.0.0.1`                  |
//! | `PORTAL_PORT`         | `8080`                       |
//! | `PORTAL_API_BASE_URL` | `http://localhost:8000/api`  |
//! | `PORTAL_OPEN_BROWSER` | off (`1`, `true`, `yes` enable) |

use common::requests::{PortalConfig, DEFAULT_API_BASE_URL};
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORTAL_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("PORTAL_API_BASE_URL must be an http(s) URL, got {0:?}")]
    InvalidApiBase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = value("PORTAL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match value("PORTAL_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api_base_url = match value("PORTAL_API_BASE_URL") {
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                raw.trim_end_matches('/').to_string()
            }
            Some(raw) => return Err(ConfigError::InvalidApiBase(raw)),
            None => DEFAULT_API_BASE_URL.to_string(),
        };
        let open_browser = value("PORTAL_OPEN_BROWSER")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            api_base_url,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn portal_config(&self) -> PortalConfig {
        PortalConfig {
            api_base_url: self.api_base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.open_browser);
    }

    #[test]
    fn overrides_and_trailing_slash() {
        let config = config(&[
            ("PORTAL_HOST", "0.0.0.0"),
            ("PORTAL_PORT", "3000"),
            ("PORTAL_API_BASE_URL", "https://api.tarlac.gov.ph/api/"),
            ("PORTAL_OPEN_BROWSER", "Yes"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_base_url, "https://api.tarlac.gov.ph/api");
        assert!(config.open_browser);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config(&[("PORTAL_PORT", "eighty")]),
            Err(ConfigError::InvalidPort("eighty".into()))
        );
        assert!(matches!(
            config(&[("PORTAL_API_BASE_URL", "localhost:8000")]),
            Err(ConfigError::InvalidApiBase(_))
        ));
    }
}
