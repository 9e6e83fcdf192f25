//! Handlers for `/api/hubspot-search`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use log::info;
use pdfpick_core::search::{SearchRequest, DEFAULT_LIMIT};

use crate::aggregate::collect_results;
use crate::error::ProxyError;
use crate::models::{ErrorResponse, SearchQuery, SearchResponse};
use crate::router::AppState;

/// Parse the `limit` parameter, falling back to [`DEFAULT_LIMIT`].
///
/// # Errors
///
/// Returns [`ProxyError::InvalidLimit`] unless the value is a positive integer.
pub fn parse_limit(raw: Option<&str>) -> Result<usize, ProxyError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LIMIT);
    };
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ProxyError::InvalidLimit(raw.to_owned())),
    }
}

/// `GET /api/hubspot-search`: aggregate HubSpot PDF search pages.
///
/// # Errors
///
/// Returns `500` when no token is configured, `400` for a bad `limit`, and the
/// upstream status with its body when HubSpot rejects a page.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ProxyError> {
    let upstream = state.upstream.as_deref().ok_or(ProxyError::MissingCredential)?;
    let max_results = parse_limit(params.limit.as_deref())?;
    let request = SearchRequest::new(params.q, max_results);

    let results = collect_results(upstream, &request).await?;
    info!("total files collected: {}", results.len());

    Ok(Json(SearchResponse { results }))
}

/// `OPTIONS /api/hubspot-search`: CORS preflight.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// Any other method on the search route.
pub async fn method_not_allowed_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_owned(),
        }),
    )
}
