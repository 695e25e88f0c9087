//! Stops and aggregated results.

use super::departure::{DepartureEvent, FlattenedDeparture};
use super::location::Coordinate;

/// A stop found near the queried position.
#[derive(Debug, Clone, PartialEq)]
pub struct StopCandidate {
    /// Opaque upstream identifier (a GTFS id such as `HSL:2314601`).
    pub stop_id: String,
    pub name: String,
    /// Distance from the query point, as reported upstream.
    pub distance_meters: f64,
    /// Stop position, when upstream reports both coordinates.
    pub position: Option<Coordinate>,
}

impl StopCandidate {
    pub fn new(stop_id: impl Into<String>, name: impl Into<String>, distance_meters: f64) -> Self {
        Self {
            stop_id: stop_id.into(),
            name: name.into(),
            distance_meters,
            position: None,
        }
    }

    pub fn with_position(mut self, position: Option<Coordinate>) -> Self {
        self.position = position;
        self
    }

    /// Distance rounded to the nearest whole meter.
    pub fn rounded_distance(&self) -> i64 {
        self.distance_meters.round() as i64
    }
}

/// A stop together with its filtered, time-ordered departures.
#[derive(Debug, Clone, PartialEq)]
pub struct StopWithDepartures {
    pub stop: StopCandidate,
    pub departures: Vec<DepartureEvent>,
}

/// Final answer to one departures query.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedResult {
    /// The label the geocoder resolved the address to.
    pub address_label: String,
    pub radius_meters: u32,
    pub results: Vec<FlattenedDeparture>,
}
