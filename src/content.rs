//! Content resolution abstraction.
//!
//! This module defines the ContentStore trait through which the fetch and search
//! operations obtain a byte stream and total size for an opaque resource
//! identifier. Stores are constructor-injected into the operations, so the core
//! stays testable without a live content backend.
//!
//! Two implementations ship with the crate: [`FsContentStore`] resolves
//! identifiers to files under a root directory, and [`InMemoryContentStore`]
//! serves named byte buffers for embedding and tests.

pub mod fs;
pub mod memory;
pub mod stream;
pub mod validation;

pub use fs::FsContentStore;
pub use memory::InMemoryContentStore;

use crate::error::Result;
use async_trait::async_trait;
use tokio::io::AsyncRead;

/// Raw byte stream handed out by a store, positioned at byte 0.
///
/// Supports forward skip and bounded read only; the operation that opened it
/// owns it exclusively and releases it by drop on every exit path.
pub type ContentStream = Box<dyn AsyncRead + Send + Unpin>;

/// An opened resource: its total size plus a stream over its bytes.
///
/// The size is stable for the lifetime of one request; the resource is
/// assumed immutable while the reader is alive.
pub struct ContentReader {
    /// Total resource size in bytes
    pub size: u64,
    /// Byte stream positioned at the start of the resource
    pub stream: ContentStream,
}

impl std::fmt::Debug for ContentReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentReader")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Resolves opaque resource identifiers to readable content.
///
/// Implementations must be thread-safe and re-openable: every call to
/// [`open_reader`](ContentStore::open_reader) yields an independent stream, so
/// concurrent requests never share stream state.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Whether the identifier resolves to existing content
    async fn exists(&self, resource_id: &str) -> bool;

    /// Open the resource for reading.
    ///
    /// Returns `Ok(None)` when the identifier does not resolve to content;
    /// errors are reserved for I/O faults on content that should exist.
    async fn open_reader(&self, resource_id: &str) -> Result<Option<ContentReader>>;
}
