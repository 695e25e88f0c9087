//! Digitransit routing GraphQL client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::config::SUBSCRIPTION_KEY_HEADER;
use crate::domain::Coordinate;

use super::TransitApi;
use super::error::RoutingError;
use super::queries::{STOP_DEPARTURES_QUERY, STOPS_BY_RADIUS_QUERY};
use super::types::{
    GraphQlRequest, GraphQlResponse, StopAtDistance, StopDeparturesData, StopTime,
    StopsByRadiusData,
};

/// Default GraphQL endpoint (HSL region).
const DEFAULT_BASE_URL: &str = "https://api.digitransit.fi/routing/v2/hsl/gtfs/v1";

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// Subscription key sent with every request
    pub api_key: String,
    /// GraphQL endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutingConfig {
    /// Create a new config with the given subscription key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom endpoint URL (for testing or another region).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Routing API client.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoutingClient {
    /// Create a new routing client with the given configuration.
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            RoutingError::NotConfigured("invalid subscription key format".to_string())
        })?;
        headers.insert(HeaderName::from_static(SUBSCRIPTION_KEY_HEADER), key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Run a GraphQL query and return its `data`.
    ///
    /// A `null` or absent `data` yields `T::default()`. A non-empty
    /// `errors` array is reported as [`RoutingError::GraphQl`].
    pub async fn query<V, T>(&self, query: &str, variables: V) -> Result<T, RoutingError>
    where
        V: Serialize,
        T: DeserializeOwned + Default,
    {
        let response = self
            .http
            .post(&self.base_url)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let envelope: GraphQlResponse<T> =
            serde_json::from_str(&body).map_err(|e| RoutingError::Json {
                message: e.to_string(),
            })?;

        if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
            return Err(RoutingError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        Ok(envelope.data.unwrap_or_default())
    }
}

#[async_trait]
impl TransitApi for RoutingClient {
    async fn stops_by_radius(
        &self,
        at: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<StopAtDistance>, RoutingError> {
        let data: StopsByRadiusData = self
            .query(
                STOPS_BY_RADIUS_QUERY,
                json!({ "lat": at.latitude, "lon": at.longitude, "radius": radius_meters }),
            )
            .await?;

        let nodes = data.into_nodes();
        debug!(%at, radius_meters, stops = nodes.len(), "Fetched stops by radius");
        Ok(nodes)
    }

    async fn stop_times(&self, stop_id: &str, count: u32) -> Result<Vec<StopTime>, RoutingError> {
        let data: StopDeparturesData = self
            .query(STOP_DEPARTURES_QUERY, json!({ "id": stop_id, "n": count }))
            .await?;

        let times = data.into_stop_times();
        debug!(stop_id, requested = count, received = times.len(), "Fetched stop times");
        Ok(times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = RoutingConfig::new("test-key")
            .with_base_url("http://localhost:8080/graphql")
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080/graphql");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = RoutingConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn client_creation() {
        assert!(RoutingClient::new(RoutingConfig::new("test-key")).is_ok());
    }
}
