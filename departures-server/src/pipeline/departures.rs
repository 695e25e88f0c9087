//! Per-stop departure fetch and filtering.

use crate::domain::{DepartureEvent, LineAllowList};
use crate::routing::{RoutingError, TransitApi, departure_event};

use super::config::PipelineConfig;

/// Line, staleness, and count filter applied to each stop's departures.
#[derive(Debug, Clone, Copy)]
pub struct DepartureFilter<'a> {
    allowed_lines: &'a LineAllowList,
    /// Departures must be strictly later than this (Unix seconds).
    cutoff_epoch: i64,
    max_per_stop: usize,
}

impl<'a> DepartureFilter<'a> {
    pub fn new(allowed_lines: &'a LineAllowList, cutoff_epoch: i64, max_per_stop: usize) -> Self {
        Self {
            allowed_lines,
            cutoff_epoch,
            max_per_stop,
        }
    }

    /// Filter for a query running at `now_epoch`.
    pub fn for_config(config: &'a PipelineConfig, now_epoch: i64) -> Self {
        Self::new(
            &config.allowed_lines,
            now_epoch - config.staleness_grace_secs,
            config.departures_per_stop,
        )
    }

    pub fn cutoff_epoch(&self) -> i64 {
        self.cutoff_epoch
    }

    /// Keep allow-listed, non-stale events; earliest first, capped.
    pub fn apply(&self, events: impl IntoIterator<Item = DepartureEvent>) -> Vec<DepartureEvent> {
        let mut kept: Vec<DepartureEvent> = events
            .into_iter()
            .filter(|e| self.allowed_lines.contains(&e.line))
            .filter(|e| e.epoch_secs > self.cutoff_epoch)
            .collect();
        kept.sort_by_key(|e| e.epoch_secs);
        kept.truncate(self.max_per_stop);
        kept
    }
}

/// Fetch up to `requested` raw departures for a stop and filter them.
///
/// Upstream failures are returned as-is; a stop with nothing matching is
/// just an empty list.
pub async fn departures_for(
    api: &dyn TransitApi,
    stop_id: &str,
    requested: u32,
    filter: &DepartureFilter<'_>,
) -> Result<Vec<DepartureEvent>, RoutingError> {
    let raw = api.stop_times(stop_id, requested).await?;
    Ok(filter.apply(raw.iter().map(departure_event)))
}
