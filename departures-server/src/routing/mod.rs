//! Digitransit routing (GraphQL) client.
//!
//! Two queries are used:
//! - `stopsByRadius` to find stops around a coordinate
//! - `stop.stoptimesWithoutPatterns` to list a stop's upcoming departures
//!
//! The [`TransitApi`] trait returns raw wire records; [`find_nearby`] and
//! [`departure_event`] turn them into domain values.

mod client;
mod convert;
mod error;
mod queries;
mod types;

use async_trait::async_trait;

use crate::domain::Coordinate;

pub use client::{RoutingClient, RoutingConfig};
pub use convert::{departure_event, find_nearby, select_nearest};
pub use error::RoutingError;
pub use queries::{STOP_DEPARTURES_QUERY, STOPS_BY_RADIUS_QUERY};
pub use types::{
    GraphQlError, GraphQlRequest, GraphQlResponse, Route, StopAtDistance, StopConnection,
    StopDeparturesData, StopEdge, StopRef, StopTime, StopTimes, StopsByRadiusData, Trip,
};

/// Upstream transit data needed by the departures pipeline.
#[async_trait]
pub trait TransitApi: Send + Sync {
    /// Stops within `radius_meters` of `at`, in upstream order.
    async fn stops_by_radius(
        &self,
        at: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<StopAtDistance>, RoutingError>;

    /// Up to `count` upcoming stop times for `stop_id`, unfiltered.
    async fn stop_times(&self, stop_id: &str, count: u32) -> Result<Vec<StopTime>, RoutingError>;
}
