//! HubSpot file search: the trait the aggregation loop talks to, and the
//! `reqwest`-backed implementation used in production.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::{debug, error};
use pdfpick_core::record::RawRecord;
use pdfpick_core::search::RemotePage;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use thiserror::Error;

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Largest page HubSpot will return for a single search call.
pub const PAGE_SIZE: usize = 100;

/// Production HubSpot API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.hubapi.com";

const SEARCH_PATH: &str = "/files/v3/files/search";

/// Parameters for a single upstream page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<'a> {
    /// Free-text query, if any.
    pub query: Option<&'a str>,
    /// Cursor from the previous page.
    pub after: Option<&'a str>,
    /// Page size, at most [`PAGE_SIZE`].
    pub limit: usize,
}

/// Errors from a single upstream round trip.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status.
    #[error("upstream returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code received.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },
    /// The request could not be sent or the response could not be read.
    #[error("upstream request failed: {0}")]
    Transport(String),
    /// The response body was not a valid search page.
    #[error("failed to parse upstream response: {0}")]
    Decode(String),
}

/// A paginated file search restricted to PDFs.
pub trait UpstreamSearch: Send + Sync {
    /// Fetch one page of PDF files.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on a non-success status, network failure,
    /// or malformed body.
    fn search_page<'a>(
        &'a self,
        page: PageRequest<'a>,
    ) -> BoxFuture<'a, Result<RemotePage, UpstreamError>>;
}

#[derive(Debug, Deserialize)]
struct SearchPageDto {
    #[serde(default)]
    results: Vec<RawRecord>,
    paging: Option<PagingDto>,
}

#[derive(Debug, Deserialize)]
struct PagingDto {
    next: Option<NextPageDto>,
}

#[derive(Debug, Deserialize)]
struct NextPageDto {
    after: Option<String>,
}

impl From<SearchPageDto> for RemotePage {
    fn from(dto: SearchPageDto) -> Self {
        RemotePage {
            items: dto.results,
            next_cursor: dto
                .paging
                .and_then(|p| p.next)
                .and_then(|n| n.after)
                .filter(|a| !a.is_empty()),
        }
    }
}

/// `reqwest`-backed implementation of [`UpstreamSearch`].
///
/// The default client has no request timeout; a hanging upstream stalls
/// the aggregation.
#[derive(Clone)]
pub struct HttpUpstream {
    base_url: String,
    token: String,
    http: Arc<reqwest::Client>,
}

impl HttpUpstream {
    /// Create a client for `base_url` authenticating with `token`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            http: Arc::new(reqwest::Client::new()),
        }
    }
}

impl fmt::Debug for HttpUpstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpUpstream")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl UpstreamSearch for HttpUpstream {
    fn search_page<'a>(
        &'a self,
        page: PageRequest<'a>,
    ) -> BoxFuture<'a, Result<RemotePage, UpstreamError>> {
        Box::pin(async move {
            let url = format!("{}{SEARCH_PATH}", self.base_url);
            let mut params: Vec<(&str, String)> = vec![
                ("limit", page.limit.min(PAGE_SIZE).to_string()),
                ("extension", "pdf".to_owned()),
            ];
            if let Some(q) = page.query {
                params.push(("q", q.to_owned()));
            }
            if let Some(after) = page.after {
                params.push(("after", after.to_owned()));
            }

            debug!("calling upstream {url} with {params:?}");

            let response = self
                .http
                .get(&url)
                .bearer_auth(&self.token)
                .header(CONTENT_TYPE, "application/json")
                .query(&params)
                .send()
                .await
                .map_err(|e| UpstreamError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .map_err(|e| UpstreamError::Transport(e.to_string()))?;
                error!("HubSpot API error: {status} {body}");
                return Err(UpstreamError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let dto: SearchPageDto = response
                .json()
                .await
                .map_err(|e| UpstreamError::Decode(e.to_string()))?;
            Ok(dto.into())
        })
    }
}
