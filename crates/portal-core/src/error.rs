use thiserror::Error;

/// Errors produced by the landing-page data pipeline.
///
/// Every variant here is recoverable by design: the page loader maps any of
/// them into degraded (empty-state) props instead of surfacing them to the
/// renderer. They still carry enough detail to be useful in logs.
///
/// # Error Conversion
///
/// `serde_json::Error` converts automatically via `#[from]`; HTTP-layer
/// errors are classified by the client into the network/timeout/client
/// variants so log lines distinguish "backend unreachable" from "backend
/// answered garbage".
#[derive(Error, Debug)]
pub enum PortalError {
    /// The outbound search request failed or returned a non-success status.
    #[error("Search API error: {0}")]
    ClientError(String),

    /// The response body could not be parsed as the expected JSON shape.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A base URL or joined endpoint URL was malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connectivity failure: DNS, refused connection, unreachable host.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The backend did not answer within the client timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The API returned a success status but an empty body.
    #[error("Empty response from API")]
    EmptyResponse,

    /// Catch-all for cases not covered by a specific variant.
    #[error("Error: {0}")]
    Generic(String),
}

impl PortalError {
    /// Returns true when the failure is an acquisition problem (the call
    /// never produced usable data) rather than a local programming error.
    /// Both classes degrade the same way; this only shapes the log line.
    pub fn is_acquisition_failure(&self) -> bool {
        matches!(
            self,
            PortalError::ClientError(_)
                | PortalError::NetworkError(_)
                | PortalError::Timeout(_)
                | PortalError::EmptyResponse
        )
    }
}
