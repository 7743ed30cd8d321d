//! Resumable substring search.
//!
//! Scans a resource line-by-line from a byte offset, collecting bounded
//! match snippets with an approximate byte offset per hit. The returned
//! `next_offset` is the resumption point for the following page, so an
//! unbounded resource can be searched in bounded slices.

pub mod scanner;
pub mod service;
pub mod snippet;

pub use scanner::{scan_lines, ScanEnd, ScanOutcome};
pub use service::StreamingSearcher;
pub use snippet::build_snippet;

use crate::error::{Result, TextRangeError};
use serde::Serialize;

/// Default hit cap when the caller does not supply one
pub const DEFAULT_MAX_HITS: usize = 100;

/// Upper bound on the per-request hit cap
pub const MAX_HITS_LIMIT: usize = 1000;

/// Maximum snippet width in characters (ellipsis markers excluded)
pub const SNIPPET_MAX_CHARS: usize = 80;

/// A validated search request.
///
/// The needle is a literal substring, not a pattern. `max_hits` is clamped
/// to `[1, 1000]` at construction; `start_offset` is clamped against the
/// resource size at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
    start_offset: u64,
    max_hits: usize,
}

impl SearchQuery {
    /// Build a query for `needle`, starting at offset 0 with the default
    /// hit cap. Fails with `BadRequest` when the needle is blank.
    pub fn new(needle: impl Into<String>) -> Result<Self> {
        let needle = needle.into();
        if needle.trim().is_empty() {
            return Err(TextRangeError::bad_request("query text is required"));
        }
        Ok(Self {
            needle,
            start_offset: 0,
            max_hits: DEFAULT_MAX_HITS,
        })
    }

    /// Resume scanning from a byte offset (typically a previous
    /// `next_offset`)
    pub fn with_start_offset(mut self, start_offset: u64) -> Self {
        self.start_offset = start_offset;
        self
    }

    /// Cap the number of hits per page, clamped to `[1, 1000]`
    pub fn with_max_hits(mut self, max_hits: usize) -> Self {
        self.max_hits = max_hits.clamp(1, MAX_HITS_LIMIT);
        self
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn start_offset(&self) -> u64 {
        self.start_offset
    }

    pub fn max_hits(&self) -> usize {
        self.max_hits
    }
}

/// One match: the approximate byte offset of the line that contained it,
/// plus a bounded context snippet.
///
/// Offsets are resumption hints, not exact seeks: they are computed by
/// re-encoding decoded lines, which can drift from the raw byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub offset: u64,
    pub snippet: String,
}

/// A page of search results.
///
/// `hits` is bounded by the query's hit cap and `next_offset` never exceeds
/// `total_bytes`; feeding it back as the next `start_offset` continues the
/// scan where this page stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub q: String,
    pub total_bytes: u64,
    pub start_offset: u64,
    pub next_offset: u64,
    pub hits: Vec<SearchHit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = SearchQuery::new("error").unwrap();
        assert_eq!(query.needle(), "error");
        assert_eq!(query.start_offset(), 0);
        assert_eq!(query.max_hits(), DEFAULT_MAX_HITS);
    }

    #[test]
    fn test_blank_needle_rejected() {
        assert!(SearchQuery::new("").is_err());
        assert!(SearchQuery::new("   ").is_err());
    }

    #[test]
    fn test_max_hits_clamped() {
        let query = SearchQuery::new("x").unwrap().with_max_hits(0);
        assert_eq!(query.max_hits(), 1);

        let query = SearchQuery::new("x").unwrap().with_max_hits(5000);
        assert_eq!(query.max_hits(), MAX_HITS_LIMIT);

        let query = SearchQuery::new("x").unwrap().with_max_hits(250);
        assert_eq!(query.max_hits(), 250);
    }

    #[test]
    fn test_result_serializes_with_wire_field_names() {
        let result = SearchResult {
            q: "error".to_string(),
            total_bytes: 100,
            start_offset: 0,
            next_offset: 42,
            hits: vec![SearchHit {
                offset: 10,
                snippet: "an error here".to_string(),
            }],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["q"], "error");
        assert_eq!(value["totalBytes"], 100);
        assert_eq!(value["startOffset"], 0);
        assert_eq!(value["nextOffset"], 42);
        assert_eq!(value["hits"][0]["offset"], 10);
        assert_eq!(value["hits"][0]["snippet"], "an error here");
    }
}
