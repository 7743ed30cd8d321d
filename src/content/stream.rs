//! Forward-skip and bounded-read helpers for content streams.
//!
//! Content streams only support sequential reads, so positioning is done by
//! reading and discarding. Both helpers tolerate early EOF: a short skip or
//! short read is reported through the return value, not as an error.

use crate::error::Result;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Chunk size for skip and bounded-read loops
pub const IO_CHUNK_BYTES: usize = 64 * 1024;

/// Initial allocation cap for bounded reads, so a huge requested window does
/// not translate into a huge up-front allocation
const PREALLOC_CAP_BYTES: u64 = 2 * 1024 * 1024;

/// Skip exactly `count` bytes by reading and discarding.
///
/// Returns the number of bytes actually skipped, which is less than `count`
/// only when the stream ends first.
pub async fn skip_fully<R>(stream: &mut R, count: u64) -> Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut buf = vec![0u8; IO_CHUNK_BYTES];
    let mut remaining = count;

    while remaining > 0 {
        let want = remaining.min(buf.len() as u64) as usize;
        let read = stream.read(&mut buf[..want]).await?;
        if read == 0 {
            break;
        }
        remaining -= read as u64;
    }

    Ok(count - remaining)
}

/// Read up to `count` bytes from the stream.
///
/// The result is shorter than `count` only when the stream ends first; a
/// short read at true end-of-stream is not an error.
pub async fn read_up_to<R>(stream: &mut R, count: u64) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut out = Vec::with_capacity(count.min(PREALLOC_CAP_BYTES) as usize);
    let mut buf = vec![0u8; IO_CHUNK_BYTES];
    let mut remaining = count;

    while remaining > 0 {
        let want = remaining.min(buf.len() as u64) as usize;
        let read = stream.read(&mut buf[..want]).await?;
        if read == 0 {
            break;
        }
        out.extend_from_slice(&buf[..read]);
        remaining -= read as u64;
    }

    Ok(out)
}
