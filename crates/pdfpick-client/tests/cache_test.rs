use chrono::{DateTime, Duration, Utc};
use pdfpick_client::cache::{CacheEntry, ResultCache};
use pdfpick_client::store::{KeyValueStore, MemoryStore};
use pdfpick_core::record::NormalizedFile;

fn files() -> Vec<NormalizedFile> {
    ["f1", "f2"]
        .iter()
        .map(|id| NormalizedFile {
            id: (*id).to_owned(),
            name: format!("{id}.pdf"),
            url: format!("https://x/{id}.pdf"),
            size: 10,
            path: "/".to_owned(),
            created_at: String::new(),
        })
        .collect()
}

fn written_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

#[test]
fn entry_is_served_just_before_expiry() {
    let store = MemoryStore::new();
    let cache = ResultCache::new(&store, "pat-123456789");
    cache.save(&files(), written_at()).unwrap();

    let later = written_at() + Duration::hours(23) + Duration::minutes(59);
    assert_eq!(cache.load(later).unwrap(), Some(files()));
    assert!(store.contains(cache.key()));
}

#[test]
fn expired_entry_is_evicted() {
    let store = MemoryStore::new();
    let cache = ResultCache::new(&store, "pat-123456789");
    cache.save(&files(), written_at()).unwrap();

    let later = written_at() + Duration::hours(24) + Duration::minutes(1);
    assert_eq!(cache.load(later).unwrap(), None);
    assert!(!store.contains(cache.key()));
}

#[test]
fn corrupt_entry_is_evicted_not_surfaced() {
    let store = MemoryStore::new();
    let cache = ResultCache::new(&store, "pat-123456789");
    store.set(cache.key(), "{ not json").unwrap();

    assert_eq!(cache.load(written_at()).unwrap(), None);
    assert!(!store.contains(cache.key()));
}

#[test]
fn credentials_sharing_a_prefix_share_a_slot() {
    let store = MemoryStore::new();
    ResultCache::new(&store, "pat-na1-aaaa")
        .save(&files(), written_at())
        .unwrap();
    let other = ResultCache::new(&store, "pat-na1-bbbb");
    assert_eq!(other.load(written_at()).unwrap(), Some(files()));
}

#[test]
fn different_prefixes_are_isolated() {
    let store = MemoryStore::new();
    ResultCache::new(&store, "pat-eu1-aaaa")
        .save(&files(), written_at())
        .unwrap();
    assert_eq!(
        ResultCache::new(&store, "pat-na1-aaaa").load(written_at()).unwrap(),
        None
    );
}

#[test]
fn stored_value_is_json_data_and_timestamp() {
    let store = MemoryStore::new();
    let cache = ResultCache::new(&store, "pat-123456789");
    cache.save(&files(), written_at()).unwrap();

    let raw = store.get("hubspot-pdfs-pat-1234").unwrap().unwrap();
    let entry: CacheEntry = serde_json::from_str(&raw).unwrap();
    assert_eq!(entry.timestamp, written_at().timestamp_millis());
    assert_eq!(entry.data, files());
}

#[test]
fn evict_removes_fresh_entry() {
    let store = MemoryStore::new();
    let cache = ResultCache::new(&store, "pat-123456789");
    cache.save(&files(), written_at()).unwrap();
    cache.evict().unwrap();
    assert_eq!(cache.load(written_at()).unwrap(), None);
}

#[test]
fn out_of_range_timestamp_is_evicted_not_surfaced() {
    let store = MemoryStore::new();
    let cache = ResultCache::new(&store, "pat-123456789");
    store
        .set(cache.key(), r#"{"data":[],"timestamp":-9223372036854775808}"#)
        .unwrap();

    assert_eq!(cache.load(Utc::now()).unwrap(), None);
    assert!(!store.contains(cache.key()));
}
