//! Core domain types for the departures pipeline.
//!
//! Everything here is request-scoped: values are built while answering one
//! query and dropped once the response is written.

mod departure;
mod lines;
mod location;
mod stop;

pub use departure::{DepartureEvent, FlattenedDeparture, departure_epoch};
pub use lines::LineAllowList;
pub use location::{Coordinate, ResolvedAddress};
pub use stop::{AggregatedResult, StopCandidate, StopWithDepartures};
