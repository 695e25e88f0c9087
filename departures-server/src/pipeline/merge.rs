//! Cross-stop merge of filtered departures.

use chrono::DateTime;
use tracing::warn;

use crate::domain::{FlattenedDeparture, StopWithDepartures};

/// Flatten every stop's departures into rows, earliest first, capped.
///
/// Rows are ordered by the numeric departure instant. Ties keep stop order
/// (nearest stop first) and then per-stop order.
pub fn flatten_and_rank(stops: &[StopWithDepartures], max_results: usize) -> Vec<FlattenedDeparture> {
    let mut rows: Vec<FlattenedDeparture> = stops
        .iter()
        .flat_map(|s| s.departures.iter().map(move |d| (s, d)))
        .filter_map(|(s, d)| {
            let Some(departs_at) = DateTime::from_timestamp(d.epoch_secs, 0) else {
                warn!(
                    stop = %s.stop.stop_id,
                    epoch = d.epoch_secs,
                    "Departure time out of range, skipping"
                );
                return None;
            };
            Some(FlattenedDeparture {
                stop_name: s.stop.name.clone(),
                distance_meters: s.stop.rounded_distance(),
                line: d.line.clone(),
                headsign: d.headsign.clone(),
                is_realtime: d.is_realtime,
                departs_at,
            })
        })
        .collect();

    rows.sort_by_key(|r| r.departs_at);
    rows.truncate(max_results);
    rows
}
