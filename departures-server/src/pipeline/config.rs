//! Pipeline configuration.

use crate::domain::LineAllowList;

/// Address used when a request does not name one.
const DEFAULT_ADDRESS: &str = "Matinpuronkuja 1";

/// Limits, defaults, and the line allow-list for the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Lines to report. Everything else is discarded.
    pub allowed_lines: LineAllowList,

    /// Maximum number of nearby stops to query.
    pub max_stops: usize,

    /// Maximum departures kept per stop after filtering.
    pub departures_per_stop: usize,

    /// Maximum rows in the final result.
    pub max_results: usize,

    /// Maximum concurrent per-stop departure queries.
    pub concurrency: usize,

    /// Departures up to this many seconds in the past are still shown.
    /// Absorbs clock skew and request latency.
    pub staleness_grace_secs: i64,

    /// Address used when the request gives none.
    pub default_address: String,

    /// Search radius (meters) used when the request gives none.
    pub default_radius: u32,

    /// Raw departures requested per stop when the request gives no count.
    pub default_requested: u32,
}

impl PipelineConfig {
    /// Replace the line allow-list.
    pub fn with_allowed_lines(mut self, lines: LineAllowList) -> Self {
        self.allowed_lines = lines;
        self
    }

    /// Set the per-stop concurrency ceiling.
    pub fn with_concurrency(mut self, n: usize) -> Self {
        self.concurrency = n;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            allowed_lines: LineAllowList::default(),
            max_stops: 10,
            departures_per_stop: 4,
            max_results: 12,
            concurrency: 4,
            staleness_grace_secs: 60,
            default_address: DEFAULT_ADDRESS.to_string(),
            default_radius: 700,
            default_requested: 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PipelineConfig::default();

        assert_eq!(config.max_stops, 10);
        assert_eq!(config.departures_per_stop, 4);
        assert_eq!(config.max_results, 12);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.staleness_grace_secs, 60);
        assert_eq!(config.default_address, "Matinpuronkuja 1");
        assert_eq!(config.default_radius, 700);
        assert_eq!(config.default_requested, 25);
        assert!(config.allowed_lines.contains("164k"));
    }

    #[test]
    fn custom_config() {
        let config = PipelineConfig::default()
            .with_allowed_lines(LineAllowList::new(["550"]))
            .with_concurrency(2);

        assert!(config.allowed_lines.contains("550"));
        assert!(!config.allowed_lines.contains("111"));
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.default_address, "Matinpuronkuja 1");
    }
}
