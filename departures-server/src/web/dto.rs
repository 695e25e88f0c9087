//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{AggregatedResult, FlattenedDeparture};
use crate::pipeline::{DepartureQuery, PipelineConfig};

/// Largest accepted search radius (meters).
const MAX_RADIUS: u32 = 5000;

/// Largest accepted per-stop departure count.
const MAX_REQUESTED: u32 = 100;

/// Query string of a departures request.
///
/// Numbers arrive as strings so that junk values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    /// Free-text address
    pub address: Option<String>,

    /// Search radius in meters
    pub radius: Option<String>,

    /// Raw departures to request per stop
    pub n: Option<String>,
}

impl NextQuery {
    /// Fill in defaults and clamp limits.
    pub fn to_query(&self, config: &PipelineConfig) -> DepartureQuery {
        let address = self
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(config.default_address.as_str());

        let radius = parse_positive(self.radius.as_deref())
            .unwrap_or(config.default_radius)
            .min(MAX_RADIUS);
        let requested = parse_positive(self.n.as_deref())
            .unwrap_or(config.default_requested)
            .min(MAX_REQUESTED);

        DepartureQuery::new(address, radius, requested)
    }
}

/// Parse a positive integer, rounding fractional input. Zero, negative, and
/// unparseable values are `None`.
fn parse_positive(raw: Option<&str>) -> Option<u32> {
    let value: f64 = raw?.trim().parse().ok()?;
    if !value.is_finite() || value < 1.0 {
        return None;
    }
    Some(value.round().min(f64::from(u32::MAX)) as u32)
}

/// Response of `/api/next`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextResponse {
    /// Address label the geocoder resolved to
    pub address_used: String,

    /// Radius actually searched
    pub radius: u32,

    /// Departures, earliest first
    pub results: Vec<DepartureRow>,
}

/// One departure in the response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureRow {
    pub stop_name: String,

    /// Distance to the stop, whole meters
    #[serde(rename = "distanceM")]
    pub distance_m: i64,

    pub line: String,

    pub headsign: String,

    /// Whether the time is a realtime estimate
    pub realtime: bool,

    /// ISO-8601 UTC instant
    pub time: String,
}

impl From<&FlattenedDeparture> for DepartureRow {
    fn from(row: &FlattenedDeparture) -> Self {
        Self {
            stop_name: row.stop_name.clone(),
            distance_m: row.distance_meters,
            line: row.line.clone(),
            headsign: row.headsign.clone(),
            realtime: row.is_realtime,
            time: row.iso_timestamp(),
        }
    }
}

impl From<&AggregatedResult> for NextResponse {
    fn from(result: &AggregatedResult) -> Self {
        Self {
            address_used: result.address_label.clone(),
            radius: result.radius_meters,
            results: result.results.iter().map(DepartureRow::from).collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
