//! Byte-range parsing and validation.
//!
//! Accepts the three HTTP dash forms (`START-END`, `START-`, `-SUFFIX`),
//! with or without the `bytes=` header prefix, and validates the result
//! against the resource's total size. Resolution is a pure function of its
//! inputs: the same spec against the same size always yields the same range.

use crate::error::{Result, TextRangeError};

/// Window served when the client gives no explicit end (or no range at all)
pub const DEFAULT_WINDOW_BYTES: u64 = 1024 * 1024;

/// An inclusive byte interval within a resource.
///
/// Invariant: `start <= end <= total - 1` for the total it was resolved
/// against. No valid range exists for an empty resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered (both endpoints inclusive, so never zero)
    pub fn byte_count(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// A validated range plus whether the request was a partial (ranged) fetch.
///
/// A default range synthesized from an absent spec reports as a full fetch
/// even when the resource is larger than the default window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    pub range: ByteRange,
    pub partial: bool,
}

/// Resolve an optional range spec against the resource size.
///
/// - Absent spec: `[0, min(total-1, 1MiB-1)]`, full fetch.
/// - `-SUFFIX`: the trailing `SUFFIX` bytes, clamped to the resource.
/// - `START-`: a default-sized window from `START`, clamped.
/// - `START-END`: both explicit, `END` clamped to `total-1`.
///
/// Fails with `MalformedRange` on any other syntax and `UnsatisfiableRange`
/// when the range lies outside the resource.
pub fn resolve_range(spec: Option<&str>, total: u64) -> Result<ResolvedRange> {
    if total == 0 {
        return Err(TextRangeError::unsatisfiable_range(
            spec.unwrap_or_default(),
            0,
        ));
    }

    let Some(raw) = spec else {
        return Ok(ResolvedRange {
            range: ByteRange {
                start: 0,
                end: (total - 1).min(DEFAULT_WINDOW_BYTES - 1),
            },
            partial: false,
        });
    };

    let trimmed = raw.trim();
    let dash_form = trimmed.strip_prefix("bytes=").unwrap_or(trimmed);

    let (first, second) = dash_form
        .split_once('-')
        .ok_or_else(|| TextRangeError::malformed_range(raw, total))?;

    if !is_digits(first) || !is_digits(second) {
        return Err(TextRangeError::malformed_range(raw, total));
    }

    let (start, end) = if first.is_empty() && !second.is_empty() {
        // -SUFFIX: trailing N bytes
        let suffix: u64 = second
            .parse()
            .map_err(|_| TextRangeError::malformed_range(raw, total))?;
        let suffix = suffix.min(total);
        (total - suffix, total - 1)
    } else {
        let start: u64 = if first.is_empty() {
            0
        } else {
            first
                .parse()
                .map_err(|_| TextRangeError::malformed_range(raw, total))?
        };
        let end: u64 = if second.is_empty() {
            start.saturating_add(DEFAULT_WINDOW_BYTES - 1)
        } else {
            second
                .parse()
                .map_err(|_| TextRangeError::malformed_range(raw, total))?
        };
        (start, end)
    };

    if start >= total {
        return Err(TextRangeError::unsatisfiable_range(raw, total));
    }
    let end = end.min(total - 1);
    if end < start {
        return Err(TextRangeError::unsatisfiable_range(raw, total));
    }

    Ok(ResolvedRange {
        range: ByteRange { start, end },
        partial: true,
    })
}

// Digits only, matching the strict two-number dash form; empty is allowed
// because open-ended and suffix forms leave one side blank.
fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
