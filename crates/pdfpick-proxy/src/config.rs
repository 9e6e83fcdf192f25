//! Proxy configuration loaded from environment variables.

use std::env;
use std::fmt;

use crate::upstream::DEFAULT_API_BASE;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Proxy runtime configuration.
#[derive(Clone)]
pub struct ProxyConfig {
    /// HubSpot private app token. `None` when unset or blank.
    pub api_key: Option<String>,
    /// Base URL of the HubSpot API.
    pub api_base: String,
    /// TCP address to bind (e.g. `0.0.0.0:8080`).
    pub bind_addr: String,
}

impl ProxyConfig {
    /// Load configuration from the process environment.
    ///
    /// A missing `HUBSPOT_API_KEY` is not an error here: the server still
    /// starts and answers every search with a configuration error.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup("HUBSPOT_API_KEY").filter(|k| !k.trim().is_empty()),
            api_base: lookup("HUBSPOT_API_BASE")
                .map_or_else(|| DEFAULT_API_BASE.to_owned(), |b| b.trim_end_matches('/').to_owned()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
        }
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}
