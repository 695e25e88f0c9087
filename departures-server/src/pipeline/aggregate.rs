//! End-to-end departures query.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::concurrency::run_bounded;
use crate::domain::{AggregatedResult, StopWithDepartures};
use crate::geocoding::Geocoder;
use crate::routing::{RoutingError, TransitApi, find_nearby};

use super::config::PipelineConfig;
use super::departures::{DepartureFilter, departures_for};
use super::error::AggregateError;
use super::merge::flatten_and_rank;

/// Parameters of one departures query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureQuery {
    pub address: String,
    pub radius_meters: u32,
    /// Raw departures requested from upstream per stop, before filtering.
    pub requested_per_stop: u32,
}

impl DepartureQuery {
    pub fn new(address: impl Into<String>, radius_meters: u32, requested_per_stop: u32) -> Self {
        Self {
            address: address.into(),
            radius_meters,
            requested_per_stop,
        }
    }
}

/// Runs departures queries against the geocoder and transit API.
///
/// Holds no per-request state; one instance serves all requests.
#[derive(Clone)]
pub struct Aggregator {
    geocoder: Arc<dyn Geocoder>,
    transit: Arc<dyn TransitApi>,
    config: Arc<PipelineConfig>,
}

impl Aggregator {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        transit: Arc<dyn TransitApi>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            geocoder,
            transit,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run a query against the current wall clock.
    pub async fn aggregate(&self, query: &DepartureQuery) -> Result<AggregatedResult, AggregateError> {
        self.aggregate_at(query, Utc::now().timestamp()).await
    }

    /// Run a query as if the current time were `now_epoch` (Unix seconds).
    #[instrument(skip(self, query), fields(address = %query.address, radius = query.radius_meters))]
    pub async fn aggregate_at(
        &self,
        query: &DepartureQuery,
        now_epoch: i64,
    ) -> Result<AggregatedResult, AggregateError> {
        let resolved = self
            .geocoder
            .resolve(&query.address)
            .await?
            .ok_or(AggregateError::AddressNotFound)?;

        let transit = self.transit.as_ref();
        let stops = find_nearby(
            transit,
            resolved.coordinate,
            query.radius_meters,
            self.config.max_stops,
        )
        .await?;
        debug!(stops = stops.len(), label = %resolved.label, "Found nearby stops");

        let filter = DepartureFilter::for_config(&self.config, now_epoch);
        let filter = &filter;
        let requested = query.requested_per_stop;

        let with_departures = run_bounded(stops, self.config.concurrency, |stop| async move {
            let departures = departures_for(transit, &stop.stop_id, requested, filter).await?;
            Ok::<_, RoutingError>(StopWithDepartures { stop, departures })
        })
        .await?;

        let results = flatten_and_rank(&with_departures, self.config.max_results);
        info!(
            stops = with_departures.len(),
            results = results.len(),
            "Aggregated departures"
        );

        Ok(AggregatedResult {
            address_label: resolved.label,
            radius_meters: query.radius_meters,
            results,
        })
    }
}
