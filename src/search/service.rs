//! Search orchestration: resolve the resource, clamp the offset, run the scan.

use crate::content::ContentStore;
use crate::error::{Result, TextRangeError};
use crate::search::scanner::scan_lines;
use crate::search::{SearchQuery, SearchResult};
use log::debug;
use std::sync::Arc;

/// Serves paginated substring searches out of a content store.
pub struct StreamingSearcher {
    store: Arc<dyn ContentStore>,
}

impl StreamingSearcher {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Run one scan pass over the resource.
    ///
    /// The query's start offset is clamped to `[0, total-1]` before
    /// scanning. Fails with `BadRequest` for a blank identifier and
    /// `NotFound` for absent or empty content; mid-scan I/O faults
    /// propagate after the stream is dropped.
    pub async fn search(&self, resource_id: &str, query: &SearchQuery) -> Result<SearchResult> {
        if resource_id.trim().is_empty() {
            return Err(TextRangeError::bad_request(
                "resource identifier is required",
            ));
        }

        let reader = self
            .store
            .open_reader(resource_id)
            .await?
            .ok_or_else(|| TextRangeError::not_found(resource_id))?;
        if reader.size == 0 {
            return Err(TextRangeError::not_found(resource_id));
        }

        let total = reader.size;
        let start_offset = query.start_offset().min(total - 1);

        let outcome = scan_lines(
            reader.stream,
            query.needle(),
            start_offset,
            query.max_hits(),
            total,
        )
        .await?;
        debug!(
            "search {resource_id}: {:?} after {} hit(s), resuming at {}",
            outcome.end,
            outcome.hits.len(),
            outcome.next_offset
        );

        Ok(SearchResult {
            q: query.needle().to_string(),
            total_bytes: total,
            start_offset,
            next_offset: outcome.next_offset,
            hits: outcome.hits,
        })
    }
}
