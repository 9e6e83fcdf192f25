//! Search requests, upstream pages, and local filtering.

use serde::{Deserialize, Serialize};

use crate::record::{NormalizedFile, RawRecord};

/// Result count used when the caller does not pass a limit.
pub const DEFAULT_LIMIT: usize = 500;

/// A bounded search across every upstream page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text filter passed through to upstream.
    pub query: Option<String>,
    /// Upper bound on the number of records returned; always positive.
    pub max_results: usize,
}

impl SearchRequest {
    /// Build a request, treating a blank query as no query.
    #[must_use]
    pub fn new(query: Option<String>, max_results: usize) -> Self {
        Self {
            query: query.filter(|q| !q.is_empty()),
            max_results,
        }
    }
}

/// One page returned by the upstream search API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemotePage {
    /// Records on this page.
    pub items: Vec<RawRecord>,
    /// Cursor for the next page, `None` on the last page.
    pub next_cursor: Option<String>,
}

/// Case-insensitive substring match against a file's name or path.
#[must_use]
pub fn matches_query(file: &NormalizedFile, needle: &str) -> bool {
    file.name.to_lowercase().contains(needle) || file.path.to_lowercase().contains(needle)
}

/// Filter `files` by `query`, keeping the original order.
///
/// A blank query returns every file.
#[must_use]
pub fn filter_files(files: &[NormalizedFile], query: &str) -> Vec<NormalizedFile> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return files.to_vec();
    }
    files
        .iter()
        .filter(|f| matches_query(f, &needle))
        .cloned()
        .collect()
}
