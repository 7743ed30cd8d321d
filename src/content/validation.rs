//! Resource identifier validation for the filesystem store.
//!
//! Identifiers are relative paths under the store root. Anything that could
//! escape the root (absolute paths, parent-directory components) is rejected
//! before any filesystem access happens.

use crate::error::{Result, TextRangeError};
use std::path::{Component, Path, PathBuf};

/// Resolve a resource identifier to a path under `root`.
///
/// # Error Cases
/// - Identifier is empty or blank
/// - Identifier is an absolute path
/// - Identifier contains a `..` component
pub fn resolve_resource_path(root: &Path, resource_id: &str) -> Result<PathBuf> {
    if resource_id.trim().is_empty() {
        return Err(TextRangeError::bad_request(
            "resource identifier is required",
        ));
    }

    let relative = Path::new(resource_id);
    for component in relative.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(TextRangeError::bad_request(format!(
                    "resource identifier escapes the content root: {resource_id}"
                )));
            }
        }
    }

    Ok(root.join(relative))
}
