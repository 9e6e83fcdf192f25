//! Time-boxed cache of normalized files, keyed by credential fingerprint.

use chrono::{DateTime, Utc};
use log::{info, warn};
use pdfpick_core::record::NormalizedFile;
use serde::{Deserialize, Serialize};

use crate::store::{KeyValueStore, StoreError};

/// Prefix of every cache key.
pub const KEY_PREFIX: &str = "hubspot-pdfs-";

/// Number of credential characters used to namespace the cache.
pub const FINGERPRINT_LEN: usize = 8;

/// How long an entry stays valid, in milliseconds.
pub const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

const HOUR_MS: i64 = 60 * 60 * 1000;

/// Build the cache key for `credential` without storing the credential.
#[must_use]
pub fn cache_key(credential: &str) -> String {
    let fingerprint: String = credential.chars().take(FINGERPRINT_LEN).collect();
    format!("{KEY_PREFIX}{fingerprint}")
}

/// A stored result set and the instant it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Cached files.
    pub data: Vec<NormalizedFile>,
    /// Write time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl CacheEntry {
    /// Create an entry stamped with `now`.
    #[must_use]
    pub fn new(data: Vec<NormalizedFile>, now: DateTime<Utc>) -> Self {
        Self {
            data,
            timestamp: now.timestamp_millis(),
        }
    }

    /// Milliseconds elapsed between the write and `now`.
    ///
    /// `None` when the stored timestamp is too far from `now` to subtract.
    #[must_use]
    pub fn age_ms(&self, now: DateTime<Utc>) -> Option<i64> {
        now.timestamp_millis().checked_sub(self.timestamp)
    }

    /// `true` while the entry is younger than [`CACHE_TTL_MS`].
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.age_ms(now).is_some_and(|age| age < CACHE_TTL_MS)
    }
}

/// View of the cache slot belonging to one credential.
#[derive(Debug)]
pub struct ResultCache<'a, S: ?Sized> {
    store: &'a S,
    key: String,
}

impl<'a, S: KeyValueStore + ?Sized> ResultCache<'a, S> {
    /// Open the slot for `credential` in `store`.
    pub fn new(store: &'a S, credential: &str) -> Self {
        Self {
            store,
            key: cache_key(credential),
        }
    }

    /// Key this slot is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the cached files if the entry is still fresh at `now`.
    ///
    /// Expired and unparseable entries are deleted and reported as absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store fails.
    pub fn load(&self, now: DateTime<Utc>) -> Result<Option<Vec<NormalizedFile>>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("cache parse error for {}: {e}", self.key);
                self.store.delete(&self.key)?;
                return Ok(None);
            }
        };

        let Some(age) = entry.age_ms(now) else {
            warn!("cache timestamp out of range for {}", self.key);
            self.store.delete(&self.key)?;
            return Ok(None);
        };
        if !entry.is_fresh(now) {
            info!("cache expired, refreshing");
            self.store.delete(&self.key)?;
            return Ok(None);
        }

        info!(
            "loaded {} PDFs from cache (age: {} hours)",
            entry.data.len(),
            age / HOUR_MS
        );
        Ok(Some(entry.data))
    }

    /// Write `data` as a fresh entry stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store fails.
    pub fn save(&self, data: &[NormalizedFile], now: DateTime<Utc>) -> Result<(), StoreError> {
        let entry = CacheEntry::new(data.to_vec(), now);
        let raw = serde_json::to_string(&entry)?;
        self.store.set(&self.key, &raw)
    }

    /// Delete the entry unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store fails.
    pub fn evict(&self) -> Result<(), StoreError> {
        self.store.delete(&self.key)
    }
}
