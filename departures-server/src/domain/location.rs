//! Geographic positions and resolved addresses.

use std::fmt;

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build from a GeoJSON position, which is `[longitude, latitude]`.
    ///
    /// Returns `None` if the slice has fewer than two elements.
    pub fn from_geojson(position: &[f64]) -> Option<Self> {
        match position {
            [longitude, latitude, ..] => Some(Self::new(*latitude, *longitude)),
            _ => None,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// An address resolved by the geocoder.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAddress {
    pub coordinate: Coordinate,
    /// Display name from the geocoder, or the query text when it gave none.
    pub label: String,
}

impl ResolvedAddress {
    pub fn new(coordinate: Coordinate, label: impl Into<String>) -> Self {
        Self {
            coordinate,
            label: label.into(),
        }
    }
}
