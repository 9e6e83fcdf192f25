#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pdfpick_client::error::ClientError;
use pdfpick_client::host::{HostContext, TOKEN_PARAMETER};
use pdfpick_client::proxy::{BoxFuture, ProxyClient};
use pdfpick_core::record::RawRecord;
use serde_json::json;

pub const TOKEN: &str = "pat-na1-0123456789";
pub const CACHE_KEY: &str = "hubspot-pdfs-pat-na1-";

/// Host double that records every write and notice.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub field: Option<String>,
    pub params: HashMap<String, String>,
    pub notices: Vec<String>,
}

impl RecordingHost {
    pub fn with_token(token: &str) -> Self {
        let mut host = Self::default();
        host.params.insert(TOKEN_PARAMETER.to_owned(), token.to_owned());
        host
    }

    pub fn with_field(mut self, value: &str) -> Self {
        self.field = Some(value.to_owned());
        self
    }
}

impl HostContext for RecordingHost {
    fn field_value(&self) -> Option<String> {
        self.field.clone()
    }

    fn set_field_value(&mut self, value: &str) {
        self.field = Some(value.to_owned());
    }

    fn plugin_parameter(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }
}

/// Proxy double serving a fixed record list.
#[derive(Debug, Clone, Default)]
pub struct FakeProxy {
    records: Vec<RawRecord>,
    pub calls: Arc<AtomicUsize>,
    pub failure: Arc<Mutex<Option<(u16, String)>>>,
}

impl FakeProxy {
    pub fn serving(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail_with(&self, status: u16, body: &str) {
        *self.failure.lock().unwrap() = Some((status, body.to_owned()));
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }
}

impl ProxyClient for FakeProxy {
    fn fetch_files(&self, limit: usize) -> BoxFuture<'_, Result<Vec<RawRecord>, ClientError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let failure = self.failure.lock().unwrap().clone();
            if let Some((status, body)) = failure {
                return Err(ClientError::UnexpectedStatus { status, body });
            }
            Ok(self.records.iter().take(limit).cloned().collect())
        })
    }
}

pub fn raw(id: u64, name: &str, url: &str, path: &str) -> RawRecord {
    RawRecord {
        id: Some(json!(id)),
        name: Some(name.to_owned()),
        url: Some(url.to_owned()),
        size: Some(2048),
        path: Some(path.to_owned()),
        created_at: Some("2024-05-01T09:00:00Z".to_owned()),
        ..RawRecord::default()
    }
}

pub fn library() -> Vec<RawRecord> {
    vec![
        raw(41, "Invoice March.pdf", "https://cdn.example.com/Invoice%20March.pdf", "/billing/"),
        raw(42, "Annual Report.pdf", "https://cdn.example.com/Annual%20Report.pdf", "/reports/"),
        raw(43, "Brochure.pdf", "https://cdn.example.com/Brochure.pdf", "/marketing/report-assets/"),
    ]
}
