//! Error types for client operations.

use thiserror::Error;

/// Errors surfaced by the client to its host.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No HubSpot token is present in the plugin configuration.
    #[error("HubSpot access token is not configured")]
    MissingCredential,
    /// The HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The proxy returned a non-success status.
    #[error("API Error {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },
    /// The response body could not be parsed.
    #[error("failed to parse response: {0}")]
    Parse(String),
    /// No loaded file carries the requested id.
    #[error("no loaded PDF with id {0}")]
    UnknownFile(String),
}
