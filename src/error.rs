//! Error types and handling infrastructure for textrange.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! The variants mirror the response contract of the two operations: every error
//! maps to a well-defined status value via [`TextRangeError::status`], and the
//! range errors carry the resource's total size so callers can advertise it
//! (`Content-Range: bytes */<total>`) when rejecting a range.

use thiserror::Error;

/// The main error type for textrange operations.
///
/// Covers all failure conditions of the fetch and search paths: invalid
/// request input, unresolvable resources, range-spec problems, and stream
/// I/O faults.
#[derive(Error, Debug)]
pub enum TextRangeError {
    /// A required request input is missing or blank
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Resource identifier did not resolve, or the resource has no content
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Range spec does not match the `bytes=START-END` dash form
    #[error("Malformed range spec {spec:?} (resource is {total} bytes)")]
    MalformedRange { spec: String, total: u64 },

    /// Range spec is syntactically valid but lies outside the resource
    #[error("Unsatisfiable range {spec:?} (resource is {total} bytes)")]
    UnsatisfiableRange { spec: String, total: u64 },

    /// Stream read failure mid-operation
    #[error("I/O failure: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for textrange operations.
pub type Result<T> = std::result::Result<T, TextRangeError>;

impl TextRangeError {
    /// Create a BadRequest for a missing or blank input
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a NotFound for an unresolvable resource identifier
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a MalformedRange carrying the total size for the caller's retry
    pub fn malformed_range(spec: impl Into<String>, total: u64) -> Self {
        Self::MalformedRange {
            spec: spec.into(),
            total,
        }
    }

    /// Create an UnsatisfiableRange carrying the total size for the caller's retry
    pub fn unsatisfiable_range(spec: impl Into<String>, total: u64) -> Self {
        Self::UnsatisfiableRange {
            spec: spec.into(),
            total,
        }
    }

    /// Create an Io error from an io::Error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// The HTTP-equivalent status value for this error.
    ///
    /// These are contract values consumed by the transport layer; the core
    /// never writes a response itself.
    pub fn status(&self) -> u16 {
        match self {
            Self::BadRequest { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::MalformedRange { .. } | Self::UnsatisfiableRange { .. } => 416,
            Self::Io { .. } => 500,
        }
    }

    /// `Content-Range` indicator for rejected ranges (`bytes */<total>`).
    ///
    /// Present only on the two range-error variants.
    pub fn content_range_unsatisfied(&self) -> Option<String> {
        match self {
            Self::MalformedRange { total, .. } | Self::UnsatisfiableRange { total, .. } => {
                Some(format!("bytes */{total}"))
            }
            _ => None,
        }
    }
}

// Automatic conversion from io::Error for `?` on raw stream calls
impl From<std::io::Error> for TextRangeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: "stream read failed".to_string(),
            source: err,
        }
    }
}
