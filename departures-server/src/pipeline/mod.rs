//! The departures aggregation pipeline.
//!
//! address → geocode → nearby stops → per-stop departures (bounded fan-out)
//! → per-stop filter → flatten → global sort → cap.

mod aggregate;
mod config;
mod departures;
mod error;
mod merge;

pub use aggregate::{Aggregator, DepartureQuery};
pub use config::PipelineConfig;
pub use departures::{DepartureFilter, departures_for};
pub use error::AggregateError;
pub use merge::flatten_and_rank;
