//! Geocoding API response types (GeoJSON FeatureCollection).
//!
//! Every field is optional: absent or `null` values fall back to defaults
//! during conversion rather than failing deserialization.

use serde::Deserialize;

use crate::domain::{Coordinate, ResolvedAddress};

use super::error::GeocodingError;

/// Top-level search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Option<Vec<Feature>>,
}

/// One candidate match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
}

/// GeoJSON point geometry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude]`
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub label: Option<String>,
}

impl GeocodeResponse {
    /// Convert the first feature into a resolved address.
    ///
    /// `query` is used as the label when the feature carries none. Returns
    /// `Ok(None)` if there are no features.
    pub fn into_best_match(self, query: &str) -> Result<Option<ResolvedAddress>, GeocodingError> {
        let Some(feature) = self.features.and_then(|f| f.into_iter().next()) else {
            return Ok(None);
        };

        let coordinate = feature
            .geometry
            .and_then(|g| g.coordinates)
            .and_then(|c| Coordinate::from_geojson(&c))
            .ok_or_else(|| GeocodingError::Malformed("feature has no coordinates".to_string()))?;

        let label = feature
            .properties
            .and_then(|p| p.label)
            .unwrap_or_else(|| query.to_string());

        Ok(Some(ResolvedAddress::new(coordinate, label)))
    }
}
