//! Askama templates for the web frontend.

use askama::Template;
use chrono::{DateTime, Local, Utc};

use crate::domain::FlattenedDeparture;

/// Home page: address form plus the departures list.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub address: String,
    pub radius: u32,
    pub address_used: Option<String>,
    pub rows: Vec<DepartureView>,
    pub error: Option<String>,
}

/// Departure view model for templates.
#[derive(Debug, Clone)]
pub struct DepartureView {
    /// Local wall-clock time, `HH:MM`
    pub clock: String,
    pub minutes_until: i64,
    pub line: String,
    pub stop_name: String,
    pub distance_m: i64,
    pub headsign: String,
    pub realtime: bool,
}

impl DepartureView {
    pub fn from_row(row: &FlattenedDeparture, now: DateTime<Utc>) -> Self {
        let seconds = (row.departs_at - now).num_seconds();
        // Nearest whole minute, never negative.
        let minutes_until = ((seconds + 30).div_euclid(60)).max(0);

        Self {
            clock: row
                .departs_at
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string(),
            minutes_until,
            line: row.line.clone(),
            stop_name: row.stop_name.clone(),
            distance_m: row.distance_meters,
            headsign: row.headsign.clone(),
            realtime: row.is_realtime,
        }
    }
}
