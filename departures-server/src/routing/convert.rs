//! Conversion from routing wire records to domain values.

use crate::domain::{Coordinate, DepartureEvent, StopCandidate, departure_epoch};

use super::TransitApi;
use super::error::RoutingError;
use super::types::{StopAtDistance, StopTime};

/// Find the nearest usable stops around `at`.
///
/// Stops without an id or name are dropped, the rest are ordered by
/// distance (upstream order breaks ties) and cut to `max_stops`. An empty
/// area is not an error.
pub async fn find_nearby(
    api: &dyn TransitApi,
    at: Coordinate,
    radius_meters: u32,
    max_stops: usize,
) -> Result<Vec<StopCandidate>, RoutingError> {
    let nodes = api.stops_by_radius(at, radius_meters).await?;
    Ok(select_nearest(nodes, max_stops))
}

/// Keep valid stops, sort ascending by distance, truncate.
pub fn select_nearest(nodes: Vec<StopAtDistance>, max_stops: usize) -> Vec<StopCandidate> {
    let mut stops: Vec<StopCandidate> = nodes.into_iter().filter_map(stop_candidate).collect();
    // `sort_by` is stable, so equal distances keep upstream order.
    stops.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    stops.truncate(max_stops);
    stops
}

/// A node becomes a candidate only with a non-empty id and name.
fn stop_candidate(node: StopAtDistance) -> Option<StopCandidate> {
    let stop = node.stop?;
    let stop_id = stop.gtfs_id.filter(|s| !s.is_empty())?;
    let name = stop.name.filter(|s| !s.is_empty())?;
    let position = match (stop.lat, stop.lon) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
        _ => None,
    };
    Some(StopCandidate::new(stop_id, name, node.distance.unwrap_or(0.0)).with_position(position))
}

/// Map a raw stop time to a departure event.
///
/// Missing line or headsign become empty strings, a missing realtime flag
/// is `false`.
pub fn departure_event(stop_time: &StopTime) -> DepartureEvent {
    DepartureEvent {
        line: stop_time.line().unwrap_or_default().to_string(),
        headsign: stop_time.headsign.clone().unwrap_or_default(),
        is_realtime: stop_time.realtime.unwrap_or(false),
        epoch_secs: departure_epoch(
            stop_time.service_day,
            stop_time.realtime_departure,
            stop_time.scheduled_departure,
        ),
    }
}
