//! Walks the upstream cursor chain until the requested number of records is
//! collected or upstream runs out.

use log::info;
use pdfpick_core::record::RawRecord;
use pdfpick_core::search::SearchRequest;

use crate::upstream::{PageRequest, UpstreamError, UpstreamSearch, PAGE_SIZE};

/// Collect up to `request.max_results` records across upstream pages.
///
/// Pages are fetched one at a time, each with the previous page's cursor.
/// The loop stops once enough records are collected, when a page carries no
/// cursor, or when a page is empty, so an upstream that always reports more
/// pages cannot keep it running. The result is truncated to exactly
/// `max_results`.
///
/// # Errors
///
/// Returns the first [`UpstreamError`]; records from earlier pages are
/// discarded.
pub async fn collect_results<U>(
    upstream: &U,
    request: &SearchRequest,
) -> Result<Vec<RawRecord>, UpstreamError>
where
    U: UpstreamSearch + ?Sized,
{
    let mut results: Vec<RawRecord> = Vec::new();
    let mut after: Option<String> = None;

    while results.len() < request.max_results {
        let page = upstream
            .search_page(PageRequest {
                query: request.query.as_deref(),
                after: after.as_deref(),
                limit: PAGE_SIZE,
            })
            .await?;

        let returned = page.items.len();
        results.extend(page.items);
        info!(
            "HubSpot returned {returned} files, total so far: {}",
            results.len()
        );

        match page.next_cursor {
            Some(cursor) if returned > 0 => after = Some(cursor),
            _ => {
                info!("no more pages, stopping pagination");
                break;
            }
        }
    }

    if results.len() >= request.max_results {
        info!("reached max results limit: {}", request.max_results);
    }
    results.truncate(request.max_results);
    Ok(results)
}
