//! Fetch orchestration: resolve → window → read → decode → trim.

use crate::content::stream::{read_up_to, skip_fully};
use crate::content::ContentStore;
use crate::error::{Result, TextRangeError};
use crate::fetch::range::{resolve_range, ByteRange};
use crate::fetch::window::{trim_to_line_boundaries, SafeWindow, LINE_SAFETY_MARGIN};
use bstr::ByteSlice;
use log::debug;
use std::sync::Arc;

/// `Accept-Ranges` value advertised alongside every successful fetch
pub const ACCEPT_RANGES: &str = "bytes";

/// Caching directive for fetch responses; windows are cheap to re-read and
/// must not be served stale
pub const CACHE_CONTROL: &str = "no-store";

/// The outcome of a ranged fetch: a line-clean text payload plus the
/// metadata the transport layer reports.
///
/// `range` is the originally requested interval. The payload may extend past
/// it on either side (line trimming works on the safe window), but the
/// metadata always reflects what was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    partial: bool,
    /// The requested (not expanded) byte range
    pub range: ByteRange,
    /// Total resource size in bytes
    pub total_size: u64,
    /// UTF-8 text payload trimmed to whole lines
    pub payload: Vec<u8>,
}

impl FetchResult {
    /// Whether this was a ranged (partial) request
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    /// HTTP-equivalent status: 206 for a ranged request, 200 otherwise
    pub fn status(&self) -> u16 {
        if self.partial {
            206
        } else {
            200
        }
    }

    /// `Content-Range` value: `bytes <start>-<end>/<total>`
    pub fn content_range(&self) -> String {
        format!(
            "bytes {}-{}/{}",
            self.range.start, self.range.end, self.total_size
        )
    }
}

/// Serves line-boundary-safe text windows out of a content store.
pub struct RangeTextFetcher {
    store: Arc<dyn ContentStore>,
    margin: u64,
}

impl RangeTextFetcher {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self::with_margin(store, LINE_SAFETY_MARGIN)
    }

    /// Override the line-safety margin (mostly for tests; larger margins
    /// tolerate longer lines at the cost of larger reads)
    pub fn with_margin(store: Arc<dyn ContentStore>, margin: u64) -> Self {
        Self { store, margin }
    }

    /// Fetch a window of the resource trimmed to whole lines.
    ///
    /// `range_spec` is the optional client-supplied range string
    /// (`bytes=START-END` form). Fails with `BadRequest` for a blank
    /// identifier, `NotFound` for absent or empty content, and a range error
    /// when the spec is invalid against the resource size.
    pub async fn fetch(&self, resource_id: &str, range_spec: Option<&str>) -> Result<FetchResult> {
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
        let resolved = resolve_range(range_spec, total)?;
        let window = SafeWindow::around(resolved.range, total, self.margin);
        debug!(
            "fetch {resource_id}: range {}-{}/{total}, window {}-{}",
            resolved.range.start, resolved.range.end, window.start, window.end
        );

        // The stream is owned by this scope; any early return drops and
        // releases it.
        let mut stream = reader.stream;
        skip_fully(&mut stream, window.start).await?;
        let raw = read_up_to(&mut stream, window.byte_count()).await?;
        drop(stream);

        let decoded = raw.to_str_lossy();
        let trimmed = trim_to_line_boundaries(&decoded, resolved.range, total);

        Ok(FetchResult {
            partial: resolved.partial,
            range: resolved.range,
            total_size: total,
            payload: trimmed.as_bytes().to_vec(),
        })
    }
}
