//! Ranged text fetch.
//!
//! Resolves an HTTP-style byte range against a resource, reads a safe window
//! around it, and trims the decoded text to whole-line boundaries. The
//! requested range, not the expanded window, is what gets reported back in
//! the response metadata.

pub mod range;
pub mod service;
pub mod window;

pub use range::{resolve_range, ByteRange, ResolvedRange, DEFAULT_WINDOW_BYTES};
pub use service::{FetchResult, RangeTextFetcher, ACCEPT_RANGES, CACHE_CONTROL};
pub use window::{trim_to_line_boundaries, SafeWindow, LINE_SAFETY_MARGIN};
