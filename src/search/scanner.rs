//! Streaming line scanner: the forward pass behind resumable search.
//!
//! Reads a content stream as lines, matching a literal needle per line and
//! tracking a running byte offset. The offset advances by the UTF-8 length
//! of each re-encoded decoded line plus one for the consumed newline, so it
//! is approximate whenever the raw bytes were not valid UTF-8. That
//! approximation is part of the contract: callers treat offsets as
//! resumption hints, never as exact seeks.

use crate::content::stream::{skip_fully, IO_CHUNK_BYTES};
use crate::error::Result;
use crate::search::snippet::build_snippet;
use crate::search::{SearchHit, SNIPPET_MAX_CHARS};
use bstr::ByteSlice;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Why a scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEnd {
    /// The hit cap was reached; more matches may remain
    HitCapReached,
    /// The running offset reached the resource size, or the stream ended
    EndOfResource,
}

/// The hits of one scan pass plus where the next pass should resume.
#[derive(Debug)]
pub struct ScanOutcome {
    pub hits: Vec<SearchHit>,
    /// Running offset at the stopping point, clamped to the resource size
    pub next_offset: u64,
    pub end: ScanEnd,
}

/// Scan `stream` line-by-line for `needle`, starting at `start_offset`.
///
/// The skip is byte-exact on the raw stream; everything after it is decoded
/// per line with replacement characters for invalid sequences. Each hit
/// carries the running offset at the START of its line. Scanning stops at
/// the hit cap, at `total` bytes, or at end-of-stream, whichever comes
/// first.
pub async fn scan_lines<R>(
    stream: R,
    needle: &str,
    start_offset: u64,
    max_hits: usize,
    total: u64,
) -> Result<ScanOutcome>
where
    R: AsyncRead + Unpin,
{
    let mut stream = stream;
    skip_fully(&mut stream, start_offset).await?;

    let mut reader = BufReader::with_capacity(IO_CHUNK_BYTES, stream);
    let mut hits: Vec<SearchHit> = Vec::new();
    let mut offset = start_offset;
    let mut buf: Vec<u8> = Vec::new();

    let end = loop {
        if hits.len() >= max_hits {
            break ScanEnd::HitCapReached;
        }
        if offset >= total {
            break ScanEnd::EndOfResource;
        }

        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).await?;
        if read == 0 {
            break ScanEnd::EndOfResource;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }

        let line = buf.to_str_lossy();
        if line.contains(needle) {
            hits.push(SearchHit {
                offset,
                snippet: build_snippet(&line, needle, SNIPPET_MAX_CHARS),
            });
        }

        // Re-encoded line length + the consumed newline; approximate by
        // contract when the raw bytes were not valid UTF-8.
        offset += line.len() as u64 + 1;
    };

    Ok(ScanOutcome {
        hits,
        next_offset: offset.min(total),
        end,
    })
}
