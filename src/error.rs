//! Error types for the catalog API client.

use thiserror::Error;

/// Main error type for all catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The API rejected the request as malformed (HTTP 400). Carries
    /// the message from the API's error body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Missing, invalid or expired credential (HTTP 401). Carries the
    /// `error_description` from the API's error body.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limited (HTTP 429) and still limited after exhausting the
    /// configured retry budget.
    #[error("rate limited: gave up after {attempts} attempts")]
    RateLimited {
        /// How many attempts were made before giving up.
        attempts: u32,
    },

    /// HTTP request failed at the transport level (DNS, connection,
    /// timeout).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not valid JSON or did not match the expected
    /// shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
