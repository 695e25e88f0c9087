//! Digitransit geocoding HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::config::SUBSCRIPTION_KEY_HEADER;
use crate::domain::ResolvedAddress;

use super::Geocoder;
use super::error::GeocodingError;
use super::types::GeocodeResponse;

/// Default search endpoint.
const DEFAULT_BASE_URL: &str = "https://api.digitransit.fi/geocoding/v1/search";

/// Default result language.
const DEFAULT_LANGUAGE: &str = "fi";

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Subscription key sent with every request
    pub api_key: String,
    /// Full URL of the search endpoint
    pub base_url: String,
    /// Language for labels
    pub language: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodingConfig {
    /// Create a new config with the given subscription key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom search URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the label language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Geocoding API client.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: reqwest::Client,
    base_url: String,
    language: String,
}

impl GeocodingClient {
    /// Create a new geocoding client with the given configuration.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            GeocodingError::NotConfigured("invalid subscription key format".to_string())
        })?;
        headers.insert(HeaderName::from_static(SUBSCRIPTION_KEY_HEADER), key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            language: config.language,
        })
    }

    /// Fetch the raw search response for `text`, top match only.
    pub async fn search(&self, text: &str) -> Result<GeocodeResponse, GeocodingError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("text", text),
                ("size", "1"),
                ("lang", self.language.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodingError::Json {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl Geocoder for GeocodingClient {
    async fn resolve(&self, address: &str) -> Result<Option<ResolvedAddress>, GeocodingError> {
        let resolved = self.search(address).await?.into_best_match(address)?;
        match &resolved {
            Some(r) => debug!(address, label = %r.label, at = %r.coordinate, "Geocoded address"),
            None => debug!(address, "Geocoder returned no features"),
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = GeocodingConfig::new("test-key")
            .with_base_url("http://localhost:8080/search")
            .with_language("sv")
            .with_timeout(3);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080/search");
        assert_eq!(config.language, "sv");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn config_defaults() {
        let config = GeocodingConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.language, "fi");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn client_creation() {
        assert!(GeocodingClient::new(GeocodingConfig::new("test-key")).is_ok());
    }

    #[test]
    fn rejects_unprintable_key() {
        let err = GeocodingClient::new(GeocodingConfig::new("bad\nkey")).unwrap_err();
        assert!(matches!(err, GeocodingError::NotConfigured(_)));
    }
}
