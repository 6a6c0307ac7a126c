use log::debug;
use reqwest::Url;

use crate::errors::ConfigError;

pub const API_URL_ENV: &str = "PUBLIC_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const GAMES_PATH: &str = "/api/games";

/// Resolved games endpoint, fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: String,
}

impl EndpointConfig {
    /// Resolve from `PUBLIC_API_URL`, falling back to the local default
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Resolve from an optional override; empty counts as unset
    pub fn resolve(api_url: Option<&str>) -> Result<Self, ConfigError> {
        let api_url = match api_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_API_URL,
        };
        validate_api_url(api_url)?;

        let base_url = format!("{}{}", api_url, GAMES_PATH);
        debug!("Resolved games endpoint: {}", base_url);
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: format!("{}{}", DEFAULT_API_URL, GAMES_PATH),
        }
    }
}

fn validate_api_url(api_url: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
        url: api_url.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(api_url).map_err(|e| invalid(&e.to_string()))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an absolute http(s) URL"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment"));
    }
    Ok(())
}

/// Settings handed to the transport client
#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            user_agent: "GamesApiClient/1.0",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
    pub transport: TransportSettings,
}

impl AppConfig {
    /// Load `.env` if present, then resolve the endpoint from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(Self {
            endpoint: EndpointConfig::from_env()?,
            transport: TransportSettings::default(),
        })
    }

    /// Use an explicit API URL instead of the environment
    pub fn with_api_url(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: EndpointConfig::resolve(Some(api_url))?,
            transport: TransportSettings::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        let config = EndpointConfig::resolve(None).unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000/api/games");
        assert_eq!(config, EndpointConfig::default());
    }

    #[test]
    fn test_default_when_empty() {
        let config = EndpointConfig::resolve(Some("")).unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000/api/games");
    }

    #[test]
    fn test_override_used_verbatim() {
        let config = EndpointConfig::resolve(Some("http://backend:8000")).unwrap();
        assert_eq!(config.base_url(), "http://backend:8000/api/games");

        let config = EndpointConfig::resolve(Some("https://games.example.com")).unwrap();
        assert_eq!(config.base_url(), "https://games.example.com/api/games");
    }

    #[test]
    fn test_rejects_relative_or_foreign_urls() {
        for bad in ["localhost:8000", "/api", "ftp://files.example.com", "not a url"] {
            let result = EndpointConfig::resolve(Some(bad));
            assert!(result.is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_rejects_query_in_override() {
        let err = EndpointConfig::resolve(Some("http://backend:8000?x=1")).unwrap_err();
        assert!(err.to_string().contains("http://backend:8000?x=1"));
    }

    #[test]
    fn test_app_config_with_api_url() {
        let config = AppConfig::with_api_url("http://127.0.0.1:9000").unwrap();
        assert_eq!(config.endpoint.base_url(), "http://127.0.0.1:9000/api/games");
        assert_eq!(config.transport.timeout_secs, 30);
    }
}
