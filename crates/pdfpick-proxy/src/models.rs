//! API response and query models.

use pdfpick_core::record::RawRecord;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/hubspot-search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Free-text query passed to HubSpot.
    pub q: Option<String>,
    /// Total number of records wanted (default 500).
    pub limit: Option<String>,
}

/// Successful search response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Upstream records, at most `limit` of them.
    pub results: Vec<RawRecord>,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message, or the upstream body verbatim.
    pub error: String,
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: &'static str,
}
