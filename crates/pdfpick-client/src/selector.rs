//! Field editor state: loads the PDF list once per credential, filters it
//! locally, and keeps the field's URL in sync with the selected file.

use chrono::Utc;
use log::{debug, error, info, warn};
use pdfpick_core::matching::{decode_url, find_selected};
use pdfpick_core::record::{normalize_all, NormalizedFile};
use pdfpick_core::search::filter_files;

use crate::cache::ResultCache;
use crate::error::ClientError;
use crate::host::{HostContext, TOKEN_PARAMETER};
use crate::proxy::ProxyClient;
use crate::store::KeyValueStore;

/// Number of records requested from the proxy on every fetch.
pub const FETCH_LIMIT: usize = 1000;

/// Load lifecycle of the file list.
///
/// Only `Uninitialized` may move to `Loading` on activation; a manual refresh
/// is the only way out of `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing loaded yet for the current credential.
    Uninitialized,
    /// A cache read or proxy fetch is in progress.
    Loading,
    /// The file list is available.
    Ready,
    /// The last fetch failed with this message.
    Failed(String),
}

/// PDF picker bound to one host field.
pub struct FileSelector<P, S, H> {
    proxy: P,
    store: S,
    host: H,
    state: LoadState,
    credential: Option<String>,
    all_files: Vec<NormalizedFile>,
    filtered: Vec<NormalizedFile>,
    query: String,
    selected: Option<NormalizedFile>,
}

impl<P, S, H> FileSelector<P, S, H>
where
    P: ProxyClient,
    S: KeyValueStore,
    H: HostContext,
{
    /// Create an uninitialized selector.
    pub fn new(proxy: P, store: S, host: H) -> Self {
        Self {
            proxy,
            store,
            host,
            state: LoadState::Uninitialized,
            credential: None,
            all_files: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            selected: None,
        }
    }

    /// Current load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Every loaded file, in proxy order.
    pub fn all_files(&self) -> &[NormalizedFile] {
        &self.all_files
    }

    /// Files matching the current query.
    pub fn filtered_files(&self) -> &[NormalizedFile] {
        &self.filtered
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The file whose URL the field currently holds.
    pub fn selected(&self) -> Option<&NormalizedFile> {
        self.selected.as_ref()
    }

    /// The host this selector writes to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to change the field from outside.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// One-line summary of what is loaded and shown.
    pub fn status_line(&self) -> String {
        match &self.state {
            LoadState::Loading => "Loading all PDFs...".to_owned(),
            LoadState::Failed(message) => format!("Error: {message}"),
            _ if self.all_files.is_empty() => "No PDFs loaded yet".to_owned(),
            _ => format!(
                "{} PDFs loaded • Showing {} results",
                self.all_files.len(),
                self.filtered.len()
            ),
        }
    }

    fn current_credential(&self) -> Option<String> {
        self.host
            .plugin_parameter(TOKEN_PARAMETER)
            .filter(|t| !t.trim().is_empty())
    }

    /// Load the file list for the configured credential, at most once.
    ///
    /// A fresh cache entry is adopted without any network call; otherwise the
    /// proxy is queried. Calling this again with the same credential does
    /// nothing, even after a failure. A changed credential starts over.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] without touching cache or
    /// network, or the proxy error when the fetch fails.
    pub async fn activate(&mut self) -> Result<(), ClientError> {
        let credential = self.current_credential().ok_or(ClientError::MissingCredential)?;

        if self.credential.as_deref() != Some(credential.as_str()) {
            self.reset();
            self.credential = Some(credential.clone());
        }
        if self.state != LoadState::Uninitialized {
            debug!("already initialized ({:?}), skipping activation", self.state);
            return Ok(());
        }
        self.state = LoadState::Loading;

        let cached = ResultCache::new(&self.store, &credential).load(Utc::now());
        match cached {
            Ok(Some(files)) => {
                self.adopt(files);
                self.state = LoadState::Ready;
                return Ok(());
            }
            Ok(None) => {}
            Err(e) => warn!("cache read failed, loading from proxy: {e}"),
        }

        self.fetch(&credential).await
    }

    /// Drop the cache entry and in-memory list, then fetch again.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] or the proxy error.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let credential = self.current_credential().ok_or(ClientError::MissingCredential)?;

        if let Err(e) = ResultCache::new(&self.store, &credential).evict() {
            warn!("failed to clear cache: {e}");
        }
        self.reset();
        self.credential = Some(credential.clone());
        self.state = LoadState::Loading;

        self.fetch(&credential).await
    }

    async fn fetch(&mut self, credential: &str) -> Result<(), ClientError> {
        info!("loading all PDFs from proxy");
        let result = self.proxy.fetch_files(FETCH_LIMIT).await;

        match result {
            Ok(records) => {
                let files = normalize_all(records);
                if let Err(e) = ResultCache::new(&self.store, credential).save(&files, Utc::now()) {
                    warn!("failed to cache PDFs: {e}");
                }
                info!("loaded {} PDFs and cached for 24 hours", files.len());
                self.adopt(files);
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                error!("load error: {e}");
                self.state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    fn reset(&mut self) {
        self.state = LoadState::Uninitialized;
        self.all_files.clear();
        self.filtered.clear();
        self.selected = None;
    }

    fn adopt(&mut self, files: Vec<NormalizedFile>) {
        self.all_files = files;
        self.filtered = filter_files(&self.all_files, &self.query);
        self.resolve_selection();
    }

    /// Filter the loaded files by `query` (name or path, case-insensitive).
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.filtered = filter_files(&self.all_files, &self.query);
        debug!("filtered to {} files matching {query:?}", self.filtered.len());
        self.resolve_selection();
    }

    /// Re-resolve the selection after the host changed the field value.
    pub fn field_changed(&mut self) {
        self.resolve_selection();
    }

    fn resolve_selection(&mut self) {
        let value = self.host.field_value().unwrap_or_default();
        self.selected = find_selected(&self.all_files, &value).cloned();
        match &self.selected {
            Some(file) => debug!("found matching file for URL: {}", file.name),
            None if !value.is_empty() => debug!("no matching file found for URL: {value}"),
            None => {}
        }
    }

    /// Store the decoded URL of file `id` in the field and mark it selected.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownFile`] if no loaded file has that id.
    pub fn select(&mut self, id: &str) -> Result<&NormalizedFile, ClientError> {
        let file = self
            .all_files
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| ClientError::UnknownFile(id.to_owned()))?;

        let clean_url = decode_url(&file.url).into_owned();
        info!("setting field value to {clean_url} (from {})", file.url);
        self.host.set_field_value(&clean_url);
        self.host.notice(&format!("Selected: {}", file.name));

        Ok(self.selected.insert(file))
    }

    /// Empty the field and clear the selection.
    pub fn clear_selection(&mut self) {
        self.host.set_field_value("");
        self.selected = None;
        self.host.notice("Selection cleared");
    }
}
