//! Client configuration: API origin, cache sizing, default TTL.
//!
//! The origin comes from `WARTA_API_URL` with a hardcoded localhost fallback
//! (the backend's default development port). Everything else has builder-style
//! overrides so tests and embedders can construct isolated configurations.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL};

const API_ORIGIN_ENV: &str = "WARTA_API_URL";
const DEFAULT_API_ORIGIN: &str = "http://localhost:1337";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API origin `{origin}`: {source}")]
    InvalidOrigin {
        origin: String,
        source: url::ParseError,
    },
}

/// Settings for [`crate::ContentService`] and the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the content API; request paths are joined under `/api`.
    pub api_origin: Url,
    /// TTL applied to cached list responses.
    pub cache_ttl: Duration,
    /// Maximum number of cached responses per store.
    pub cache_capacity: usize,
}

impl ClientConfig {
    /// Build a configuration for the given origin.
    pub fn new(origin: &str) -> Result<Self, ConfigError> {
        let api_origin = Url::parse(origin).map_err(|source| ConfigError::InvalidOrigin {
            origin: origin.to_string(),
            source,
        })?;
        Ok(Self {
            api_origin,
            cache_ttl: DEFAULT_TTL,
            cache_capacity: DEFAULT_CAPACITY,
        })
    }

    /// Read the origin from `WARTA_API_URL`, falling back to the default
    /// development origin when unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let origin = std::env::var(API_ORIGIN_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string());
        Self::new(&origin)
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn user_agent() -> &'static str {
        concat!("warta/", env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_origin() {
        let err = ClientConfig::new("not a url").expect_err("origin should be rejected");
        assert!(matches!(err, ConfigError::InvalidOrigin { .. }));
    }

    #[test]
    fn defaults_applied_to_new_config() {
        let config = ClientConfig::new("http://localhost:1337").expect("config");
        assert_eq!(config.cache_capacity, DEFAULT_CAPACITY);
        assert_eq!(config.cache_ttl, DEFAULT_TTL);
        assert_eq!(config.api_origin.as_str(), "http://localhost:1337/");
    }

    #[test]
    fn builder_overrides_stick() {
        let config = ClientConfig::new("https://cms.example.org")
            .expect("config")
            .with_cache_ttl(Duration::from_secs(30))
            .with_cache_capacity(4);
        assert_eq!(config.cache_ttl, Duration::from_secs(30));
        assert_eq!(config.cache_capacity, 4);
    }
}
