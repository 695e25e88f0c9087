//! Pipeline error types.

use crate::geocoding::GeocodingError;
use crate::routing::RoutingError;

/// Errors that abort a departures query.
///
/// Any failing stage fails the whole query; there are no partial results.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    /// The geocoder found no match for the address
    #[error("Address not found")]
    AddressNotFound,

    /// Geocoding failed
    #[error(transparent)]
    Geocoding(#[from] GeocodingError),

    /// Stop search or a departure query failed
    #[error(transparent)]
    Routing(#[from] RoutingError),
}

impl AggregateError {
    /// Whether this is a "no such address" outcome rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AggregateError::AddressNotFound)
    }
}
