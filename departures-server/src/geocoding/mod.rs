//! Address geocoding.
//!
//! Resolves free-text addresses to a single best-matching coordinate using
//! the Digitransit geocoding API (a Pelias deployment). Only the top match
//! is requested; an empty feature list is a normal "not found" outcome,
//! not an error.

mod cache;
mod client;
mod error;
mod types;

use async_trait::async_trait;

use crate::domain::ResolvedAddress;

pub use cache::{CachedGeocoder, GeocodeCacheConfig};
pub use client::{GeocodingClient, GeocodingConfig};
pub use error::GeocodingError;
pub use types::{Feature, FeatureProperties, GeocodeResponse, Geometry};

/// Something that can resolve an address to a position.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve `address` to its best match.
    ///
    /// Returns `Ok(None)` when the service answered but found nothing.
    async fn resolve(&self, address: &str) -> Result<Option<ResolvedAddress>, GeocodingError>;
}
