//! Search proxy client trait and `reqwest`-backed implementation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::debug;
use pdfpick_core::record::RawRecord;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::error::ClientError;

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Path of the aggregating search endpoint.
pub const SEARCH_PATH: &str = "/api/hubspot-search";

/// Fetches the aggregated PDF list from the search proxy.
pub trait ProxyClient: Send + Sync {
    /// Fetch up to `limit` raw records in one proxy call.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network failure, non-success status, or a
    /// malformed body.
    fn fetch_files(&self, limit: usize) -> BoxFuture<'_, Result<Vec<RawRecord>, ClientError>>;
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    results: Vec<RawRecord>,
}

/// `reqwest`-backed implementation of [`ProxyClient`].
#[derive(Debug, Clone)]
pub struct HttpProxyClient {
    base_url: String,
    http: Arc<reqwest::Client>,
}

impl HttpProxyClient {
    /// Create a new client targeting the proxy at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http: Arc::new(reqwest::Client::new()),
        }
    }
}

impl ProxyClient for HttpProxyClient {
    fn fetch_files(&self, limit: usize) -> BoxFuture<'_, Result<Vec<RawRecord>, ClientError>> {
        Box::pin(async move {
            let url = format!("{}{SEARCH_PATH}", self.base_url);
            debug!("loading all PDFs from proxy: {url}?limit={limit}");

            let response = self
                .http
                .get(&url)
                .header(CONTENT_TYPE, "application/json")
                .query(&[("limit", limit.to_string())])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(ClientError::UnexpectedStatus {
                    status: status.as_u16(),
                    body: response.text().await?,
                });
            }

            let payload: SearchResults = response
                .json()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))?;
            debug!("proxy returned {} PDFs", payload.results.len());
            Ok(payload.results)
        })
    }
}
