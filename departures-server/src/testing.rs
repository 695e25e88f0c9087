//! In-memory upstream fakes shared by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{Coordinate, ResolvedAddress};
use crate::geocoding::{Geocoder, GeocodingError};
use crate::routing::{Route, RoutingError, StopAtDistance, StopRef, StopTime, TransitApi, Trip};

/// Build a stops-by-radius node.
pub fn stop_node(id: &str, name: &str, distance: f64) -> StopAtDistance {
    StopAtDistance {
        distance: Some(distance),
        stop: Some(StopRef {
            gtfs_id: Some(id.to_string()),
            name: Some(name.to_string()),
            ..StopRef::default()
        }),
    }
}

/// Build a scheduled-only stop time departing at `epoch`.
pub fn stop_time(line: &str, headsign: &str, epoch: i64) -> StopTime {
    let service_day = epoch - epoch.rem_euclid(86_400);
    StopTime {
        service_day: Some(service_day),
        scheduled_departure: Some(epoch - service_day),
        realtime_departure: None,
        realtime: Some(false),
        headsign: Some(headsign.to_string()),
        trip: Some(Trip {
            route: Some(Route {
                short_name: Some(line.to_string()),
            }),
        }),
    }
}

/// Geocoder answering from a fixed table.
#[derive(Default)]
pub struct FakeGeocoder {
    addresses: HashMap<String, ResolvedAddress>,
    fail_status: Option<u16>,
    calls: AtomicUsize,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, query: &str, resolved: ResolvedAddress) -> Self {
        self.addresses.insert(query.to_string(), resolved);
        self
    }

    pub fn failing_with(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn resolve(&self, address: &str) -> Result<Option<ResolvedAddress>, GeocodingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.fail_status {
            return Err(GeocodingError::Api {
                status,
                message: "geocoder unavailable".to_string(),
            });
        }
        Ok(self.addresses.get(address).cloned())
    }
}

/// Transit API answering from fixed stops and stop times.
#[derive(Default)]
pub struct FakeTransit {
    stops: Vec<StopAtDistance>,
    stop_times: HashMap<String, Vec<StopTime>>,
    failing_stops: HashSet<String>,
    stops_fail_status: Option<u16>,
    stop_queries: Mutex<Vec<u32>>,
    departure_queries: Mutex<Vec<(String, u32)>>,
}

impl FakeTransit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stops(mut self, stops: Vec<StopAtDistance>) -> Self {
        self.stops = stops;
        self
    }

    pub fn with_stop_times(mut self, stop_id: &str, times: Vec<StopTime>) -> Self {
        self.stop_times.insert(stop_id.to_string(), times);
        self
    }

    /// Departure queries for `stop_id` answer with HTTP 502.
    pub fn failing_stop(mut self, stop_id: &str) -> Self {
        self.failing_stops.insert(stop_id.to_string());
        self
    }

    pub fn failing_stop_search(mut self, status: u16) -> Self {
        self.stops_fail_status = Some(status);
        self
    }

    /// Radii of every stop search so far.
    pub fn stop_queries(&self) -> Vec<u32> {
        self.stop_queries.lock().unwrap().clone()
    }

    /// `(stop_id, count)` of every departure query so far.
    pub fn departure_queries(&self) -> Vec<(String, u32)> {
        self.departure_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransitApi for FakeTransit {
    async fn stops_by_radius(
        &self,
        _at: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<StopAtDistance>, RoutingError> {
        self.stop_queries.lock().unwrap().push(radius_meters);
        if let Some(status) = self.stops_fail_status {
            return Err(RoutingError::Api {
                status,
                message: "stop search failed".to_string(),
            });
        }
        Ok(self.stops.clone())
    }

    async fn stop_times(&self, stop_id: &str, count: u32) -> Result<Vec<StopTime>, RoutingError> {
        self.departure_queries
            .lock()
            .unwrap()
            .push((stop_id.to_string(), count));
        tokio::task::yield_now().await;
        if self.failing_stops.contains(stop_id) {
            return Err(RoutingError::Api {
                status: 502,
                message: format!("no departures for {stop_id}"),
            });
        }
        Ok(self
            .stop_times
            .get(stop_id)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .take(count as usize)
            .collect())
    }
}
