//! In-memory content store.
//!
//! Serves named byte buffers. The primary test double for the fetch and
//! search operations, and usable directly when embedding the crate with
//! content that already lives in memory.

use crate::content::{ContentReader, ContentStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Cursor;

/// Content store backed by a map of named byte buffers.
///
/// Entries are registered up front; the store is immutable once shared, so
/// it is safe to hand out via `Arc` to concurrent requests.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    entries: HashMap<String, Vec<u8>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under `resource_id`, replacing any previous entry
    pub fn insert(&mut self, resource_id: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.entries.insert(resource_id.into(), content.into());
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn exists(&self, resource_id: &str) -> bool {
        self.entries.contains_key(resource_id)
    }

    async fn open_reader(&self, resource_id: &str) -> Result<Option<ContentReader>> {
        Ok(self.entries.get(resource_id).map(|content| ContentReader {
            size: content.len() as u64,
            stream: Box::new(Cursor::new(content.clone())),
        }))
    }
}
