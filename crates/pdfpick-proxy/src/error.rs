//! Request-level errors and their HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::upstream::UpstreamError;

/// Errors that end a search request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// No HubSpot token is configured; nothing was sent upstream.
    #[error("HubSpot API key not configured")]
    MissingCredential,
    /// The `limit` query parameter is not a positive integer.
    #[error("limit must be a positive integer, got {0:?}")]
    InvalidLimit(String),
    /// An upstream call failed and the aggregation was abandoned.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::Upstream(UpstreamError::Status { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::InvalidLimit(_) => StatusCode::BAD_REQUEST,
            ProxyError::MissingCredential | ProxyError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // Upstream bodies are relayed untouched.
        let message = match self {
            ProxyError::Upstream(UpstreamError::Status { body, .. }) => body,
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
