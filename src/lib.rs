//! # textrange - Ranged Text Windows and Resumable Search
//!
//! Read-only access to large, opaque text resources through two operations:
//! a byte-range fetch that returns a window trimmed to whole lines, and a
//! resumable substring search that scans line-by-line from a byte offset.
//!
//! ## Features
//!
//! - **HTTP-style ranges**: `bytes=START-END`, open-ended, and suffix forms,
//!   validated against the resource size
//! - **Line-boundary safety**: windows are expanded by a margin before
//!   decoding so payloads start and end on whole lines
//! - **Bounded scanning**: search reads one line at a time, never the whole
//!   resource, and stops at a configurable hit cap
//! - **Resumable pagination**: every search page carries the offset where
//!   the next page should resume
//!
//! ## Architecture
//!
//! The library is organized into focused modules following modern Rust patterns:
//!
//! - [`error`] - Centralized error types with response-contract status values
//! - [`content`] - Content resolution abstraction with filesystem and
//!   in-memory stores
//! - [`fetch`] - Range resolution, safe-window expansion, and line trimming
//! - [`search`] - Streaming line scanner, snippets, and pagination

// Core modules
pub mod content;
pub mod error;
pub mod fetch;
pub mod search;

// Re-export commonly used types for convenience
pub use error::{Result, TextRangeError};

// Public API surface for external usage
pub use content::{ContentReader, ContentStore, FsContentStore, InMemoryContentStore};
pub use fetch::{FetchResult, RangeTextFetcher};
pub use search::{SearchHit, SearchQuery, SearchResult, StreamingSearcher};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
