//! Error types for HTTP transport and message delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL was rejected by the transport.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for a failed message delivery.
///
/// Every variant is fatal for the invocation: there is no automatic retry.
#[derive(Debug, Error)]
pub enum SendError {
    /// The request never completed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The service processed the request and rejected the message.
    ///
    /// Carries the remote `errors` payload verbatim.
    #[error("Message rejected ({status}): {}", errors.join("; "))]
    Rejected {
        /// HTTP status of the response
        status: http::StatusCode,
        /// Diagnostic messages from the service
        errors: Vec<String>,
    },

    /// The response body could not be decoded as an API payload.
    #[error("Unexpected response from server ({status}): {reason}")]
    MalformedResponse {
        /// HTTP status of the response
        status: http::StatusCode,
        /// Decoding failure description
        reason: String,
    },
}
