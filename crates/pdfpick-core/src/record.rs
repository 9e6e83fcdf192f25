//! Upstream file records and their normalized, cacheable form.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display name used when upstream omits a file name.
pub const UNNAMED: &str = "Unnamed";

/// A file exactly as returned by the HubSpot Files search API.
///
/// Only the fields the picker reads are typed; everything else is kept in
/// `extra` so the proxy can pass records through unchanged. A known field
/// that arrives as `null` or with an unexpected type stays in `extra` and its
/// typed slot is `None`, so it serialises back exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct RawRecord {
    /// Upstream file id (string or number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// File name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Search-index URL of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Canonical hosting URL, used when `url` is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hosting_url: Option<String>,
    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Folder path inside the file manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Creation timestamp as sent by upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Any other upstream fields, plus known fields that did not fit their type.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Move `key` out of `fields` if its value has the expected type.
fn take_typed<T: DeserializeOwned>(fields: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = fields.get(key).filter(|v| !v.is_null())?;
    let typed = T::deserialize(value).ok()?;
    fields.remove(key);
    Some(typed)
}

impl From<Map<String, Value>> for RawRecord {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            id: take_typed(&mut fields, "id"),
            name: take_typed(&mut fields, "name"),
            url: take_typed(&mut fields, "url"),
            default_hosting_url: take_typed(&mut fields, "defaultHostingUrl"),
            size: take_typed(&mut fields, "size"),
            path: take_typed(&mut fields, "path"),
            created_at: take_typed(&mut fields, "createdAt"),
            extra: fields,
        }
    }
}

/// The stable file shape shared between proxy consumers and the local cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFile {
    /// Upstream file id rendered as a string.
    pub id: String,
    /// Display name; never empty.
    pub name: String,
    /// Best available URL, possibly empty.
    pub url: String,
    /// Size in bytes.
    pub size: u64,
    /// Folder path.
    pub path: String,
    /// Creation timestamp.
    pub created_at: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn id_string(id: Option<Value>) -> String {
    match id {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

impl From<RawRecord> for NormalizedFile {
    fn from(raw: RawRecord) -> Self {
        Self {
            id: id_string(raw.id),
            name: non_empty(raw.name).unwrap_or_else(|| UNNAMED.to_owned()),
            url: non_empty(raw.url)
                .or_else(|| non_empty(raw.default_hosting_url))
                .unwrap_or_default(),
            size: raw.size.unwrap_or(0),
            path: raw.path.unwrap_or_default(),
            created_at: raw.created_at.unwrap_or_default(),
        }
    }
}

/// Normalize a batch of upstream records, preserving order.
#[must_use]
pub fn normalize_all(records: Vec<RawRecord>) -> Vec<NormalizedFile> {
    records.into_iter().map(NormalizedFile::from).collect()
}
