#![allow(dead_code)]

use std::sync::Mutex;

use pdfpick_core::record::RawRecord;
use pdfpick_core::search::RemotePage;
use pdfpick_proxy::upstream::{BoxFuture, PageRequest, UpstreamError, UpstreamSearch};
use serde_json::json;

/// One recorded call to [`FakeUpstream::search_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub query: Option<String>,
    pub after: Option<String>,
    pub limit: usize,
}

/// In-memory HubSpot stand-in serving `total` PDFs with numeric cursors.
pub struct FakeUpstream {
    total: usize,
    failure: Option<(usize, u16, String)>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeUpstream {
    pub fn with_files(total: usize) -> Self {
        Self {
            total,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail the `call`-th request (1-based) with `status` and `body`.
    pub fn failing_on(mut self, call: usize, status: u16, body: &str) -> Self {
        self.failure = Some((call, status, body.to_owned()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn pdf_record(index: usize) -> RawRecord {
    RawRecord {
        id: Some(json!(index.to_string())),
        name: Some(format!("file-{index}.pdf")),
        url: Some(format!("https://files.example.com/file-{index}.pdf")),
        size: Some(1024),
        path: Some(format!("/library/file-{index}.pdf")),
        ..RawRecord::default()
    }
}

impl UpstreamSearch for FakeUpstream {
    fn search_page<'a>(
        &'a self,
        page: PageRequest<'a>,
    ) -> BoxFuture<'a, Result<RemotePage, UpstreamError>> {
        Box::pin(async move {
            let call_number = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(RecordedCall {
                    query: page.query.map(str::to_owned),
                    after: page.after.map(str::to_owned),
                    limit: page.limit,
                });
                calls.len()
            };

            if let Some((fail_at, status, body)) = &self.failure {
                if *fail_at == call_number {
                    return Err(UpstreamError::Status {
                        status: *status,
                        body: body.clone(),
                    });
                }
            }

            let start: usize = page.after.map_or(0, |a| a.parse().unwrap());
            let end = (start + page.limit).min(self.total);
            Ok(RemotePage {
                items: (start..end).map(pdf_record).collect(),
                next_cursor: (end < self.total).then(|| end.to_string()),
            })
        })
    }
}
