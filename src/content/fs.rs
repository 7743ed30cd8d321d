//! Filesystem-backed content store.
//!
//! Resource identifiers are relative paths under a root directory. Every
//! `open_reader` call opens a fresh file handle, so concurrent requests read
//! independently.

use crate::content::validation::resolve_resource_path;
use crate::content::{ContentReader, ContentStore};
use crate::error::{Result, TextRangeError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::File;

/// Content store serving files under a root directory.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    /// Create a store rooted at `root`. The directory is not required to
    /// exist yet; resolution happens per request.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root this store serves from
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn exists(&self, resource_id: &str) -> bool {
        let Ok(path) = resolve_resource_path(&self.root, resource_id) else {
            return false;
        };
        tokio::fs::metadata(&path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    async fn open_reader(&self, resource_id: &str) -> Result<Option<ContentReader>> {
        let path = resolve_resource_path(&self.root, resource_id)?;

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(TextRangeError::io(
                    format!("failed to stat {}", path.display()),
                    e,
                ))
            }
        };

        if !metadata.is_file() {
            return Ok(None);
        }

        let file = File::open(&path)
            .await
            .map_err(|e| TextRangeError::io(format!("failed to open {}", path.display()), e))?;

        Ok(Some(ContentReader {
            size: metadata.len(),
            stream: Box::new(file),
        }))
    }
}
