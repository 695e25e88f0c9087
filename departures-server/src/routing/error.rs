//! Routing API error types.

/// Errors from the routing GraphQL client.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("GraphQL HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("GraphQL {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("GraphQL JSON parse error: {message}")]
    Json { message: String },

    /// Request succeeded but the response carries GraphQL errors
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// Client could not be configured
    #[error("GraphQL client not configured: {0}")]
    NotConfigured(String),
}
