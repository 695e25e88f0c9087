//! Departure events.

use chrono::{DateTime, SecondsFormat, Utc};

/// Absolute departure time in Unix seconds.
///
/// The realtime estimate is preferred over the schedule. Missing values
/// count as zero, so a record with neither estimate lands on the service
/// day's midnight (or the epoch itself) and is normally discarded as stale.
/// A sum that does not fit in `i64` is also treated as zero.
pub fn departure_epoch(
    service_day: Option<i64>,
    realtime_departure: Option<i64>,
    scheduled_departure: Option<i64>,
) -> i64 {
    let since_midnight = realtime_departure.or(scheduled_departure).unwrap_or(0);
    service_day
        .unwrap_or(0)
        .checked_add(since_midnight)
        .unwrap_or(0)
}

/// One vehicle departure from a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureEvent {
    pub line: String,
    pub headsign: String,
    pub is_realtime: bool,
    /// Unix seconds; the sort key.
    pub epoch_secs: i64,
}

/// A departure joined with its stop, ready for output.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedDeparture {
    pub stop_name: String,
    pub distance_meters: i64,
    pub line: String,
    pub headsign: String,
    pub is_realtime: bool,
    pub departs_at: DateTime<Utc>,
}

impl FlattenedDeparture {
    /// ISO-8601 UTC with millisecond precision, e.g. `2023-11-14T22:13:20.000Z`.
    ///
    /// Fixed width for all four-digit years, so textual order matches
    /// chronological order.
    pub fn iso_timestamp(&self) -> String {
        self.departs_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
