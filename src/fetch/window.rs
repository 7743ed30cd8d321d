//! Safe-window expansion and line-boundary trimming.
//!
//! A requested range may begin or end mid-line or mid-character. The window
//! read from the stream is therefore expanded by a fixed margin on both
//! sides before decoding, which guarantees enough context to trim the
//! decoded text back to true line boundaries without a second read.

use crate::fetch::range::ByteRange;
use memchr::{memchr, memrchr};

/// Margin added on each side of the requested range before reading.
///
/// Lines longer than this defeat trimming: if no newline falls inside the
/// margin, the trim degrades to a no-op rather than emptying the payload.
pub const LINE_SAFETY_MARGIN: u64 = 4096;

/// A requested range expanded by the safety margin and clamped to the
/// resource. Always a superset of the range it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeWindow {
    pub start: u64,
    pub end: u64,
}

impl SafeWindow {
    /// Expand `range` by `margin` bytes on both sides, clamped to
    /// `[0, total-1]`. Inputs are already validated, so this cannot fail.
    pub fn around(range: ByteRange, total: u64, margin: u64) -> Self {
        Self {
            start: range.start.saturating_sub(margin),
            end: range.end.saturating_add(margin).min(total - 1),
        }
    }

    /// Number of bytes the window covers
    pub fn byte_count(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Trim decoded safe-window text to whole-line boundaries.
///
/// Trimming decisions use the ORIGINAL requested range, not the window: a
/// leading partial line is dropped only when the request does not begin at
/// the resource start, and a trailing one only when it does not reach the
/// resource end. The trailing newline itself is kept.
///
/// When a required newline is missing inside the window, that side of the
/// trim is skipped (a documented limitation for lines longer than the
/// margin), so the payload never collapses to nothing.
pub fn trim_to_line_boundaries(text: &str, requested: ByteRange, total: u64) -> &str {
    let bytes = text.as_bytes();
    let mut from = 0;
    let mut to = bytes.len();

    if requested.start > 0 {
        if let Some(first_nl) = memchr(b'\n', bytes) {
            from = first_nl + 1;
        }
    }

    if requested.end < total - 1 {
        if let Some(last_nl) = memrchr(b'\n', &bytes[from..to]) {
            to = from + last_nl + 1;
        }
    }

    // Slice positions sit just past ASCII newlines, so they are always
    // char boundaries.
    &text[from..to]
}
