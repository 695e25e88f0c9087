//! Geocoding error types.

/// Errors from the geocoding client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Geocode HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status
    #[error("Geocode {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("Geocode JSON parse error: {message}")]
    Json { message: String },

    /// Response parsed but lacks data we cannot default
    #[error("Geocode malformed response: {0}")]
    Malformed(String),

    /// Client could not be configured
    #[error("Geocode client not configured: {0}")]
    NotConfigured(String),
}
