//! Axum router construction.

use std::sync::Arc;

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::middleware::map_response;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use crate::config::ProxyConfig;
use crate::handlers::search::{method_not_allowed_handler, preflight_handler, search_handler};
use crate::models::HealthResponse;
use crate::upstream::{HttpUpstream, UpstreamSearch};

/// Path of the aggregating search endpoint.
pub const SEARCH_ROUTE: &str = "/api/hubspot-search";

/// Shared handler state.
///
/// `upstream` is `None` when no HubSpot token is configured.
#[derive(Clone, Default)]
pub struct AppState {
    /// Upstream search client.
    pub upstream: Option<Arc<dyn UpstreamSearch>>,
}

impl AppState {
    /// Build state for the given configuration.
    #[must_use]
    pub fn from_config(config: &ProxyConfig) -> Self {
        let upstream = config.api_key.as_ref().map(|key| {
            Arc::new(HttpUpstream::new(config.api_base.clone(), key.clone()))
                as Arc<dyn UpstreamSearch>
        });
        Self { upstream }
    }

    /// Build state around an existing upstream client.
    #[must_use]
    pub fn with_upstream(upstream: Arc<dyn UpstreamSearch>) -> Self {
        Self {
            upstream: Some(upstream),
        }
    }
}

/// Build the Axum application router.
pub fn build_router(state: AppState) -> Router {
    let search = get(search_handler)
        .head(method_not_allowed_handler)
        .options(preflight_handler)
        .fallback(method_not_allowed_handler)
        .layer(map_response(with_cors_headers));

    Router::new()
        .route("/healthz", get(health_handler))
        .route(SEARCH_ROUTE, search)
        .with_state(state)
}

async fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
