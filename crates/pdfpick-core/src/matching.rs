//! Reverse lookup from a stored field URL to a loaded file.
//!
//! HubSpot does not encode URLs consistently between the search index and the
//! hosting URL, so both sides are compared raw and percent-decoded.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::record::NormalizedFile;

/// Percent-decode a URL. Invalid UTF-8 sequences are replaced, never rejected.
#[must_use]
pub fn decode_url(url: &str) -> Cow<'_, str> {
    percent_decode_str(url).decode_utf8_lossy()
}

/// `true` when `stored` and `candidate` name the same URL in any of the four
/// raw/decoded combinations.
#[must_use]
pub fn urls_match(stored: &str, candidate: &str) -> bool {
    let stored_decoded = decode_url(stored);
    let candidate_decoded = decode_url(candidate);
    candidate == stored
        || candidate_decoded == stored
        || candidate == stored_decoded
        || candidate_decoded == stored_decoded
}

/// Find the first file whose URL matches the stored field value.
///
/// An empty field value never matches.
#[must_use]
pub fn find_selected<'a>(files: &'a [NormalizedFile], field_value: &str) -> Option<&'a NormalizedFile> {
    if field_value.is_empty() {
        return None;
    }
    files.iter().find(|f| urls_match(field_value, &f.url))
}
