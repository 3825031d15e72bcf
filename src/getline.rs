//! Line reads into a [`LineBuffer`].
//!
//! [`read_line`] allocates the buffer on first use, reads one line with
//! [`read_bounded`](crate::read_bounded), and strips the trailing newline. Lines that don't fit
//! are handled according to a [`GrowthPolicy`].

use crate::bounded::read_bounded;
use crate::buffer::LineBuffer;
use crate::constants::{DEFAULT_CAPACITY, DEFAULT_MAX_CAPACITY, MIN_CAPACITY};
use crate::cstr::str_len;
use crate::error::{LineError, Result};
use std::io::BufRead;
use tracing::{debug, trace};

/// What to do with a line that doesn't fit in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Return what fits and leave the rest of the line in the stream.
    ///
    /// The remainder comes back as separate lines on the following reads, and no newline is
    /// consumed at the cut.
    Truncate,

    /// Grow the buffer until the whole line fits, up to `max_capacity` bytes including the
    /// terminator. Past that, the line is truncated just like [`Truncate`](Self::Truncate).
    Grow { max_capacity: usize },
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::Grow {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

/// Reads one line into `line`, truncating lines that don't fit.
///
/// This is [`read_line_with`] using [`GrowthPolicy::Truncate`]: an unallocated buffer gets
/// [`DEFAULT_CAPACITY`] bytes and is never grown past its current capacity.
///
/// # Errors
///
/// See [`read_line_with`].
///
/// # Examples
///
/// ```
/// # use dyn_line_reader::{LineBuffer, read_line};
/// use std::io::Cursor;
///
/// let mut stream = Cursor::new(b"hello\nworld\n");
/// let mut line = LineBuffer::new();
///
/// assert_eq!(read_line(&mut line, &mut stream).unwrap(), 5);
/// assert_eq!(read_line(&mut line, &mut stream).unwrap(), 5);
/// assert!(read_line(&mut line, &mut stream).unwrap_err().is_eof());
/// ```
pub fn read_line<R: BufRead + ?Sized>(line: &mut LineBuffer, reader: &mut R) -> Result<usize> {
    read_line_with(line, reader, GrowthPolicy::Truncate)
}

/// Reads one line into `line` and returns its length without the newline.
///
/// If `line` is unallocated it first gets [`DEFAULT_CAPACITY`] bytes, or the growth limit if that
/// is smaller. The line is read with
/// [`read_bounded`], its length is taken up to the first zero byte, and a trailing newline is
/// replaced by the terminator. The stream advances past the newline.
///
/// On success the buffer holds the line, see [`LineBuffer::as_bytes`]. A zero byte inside a line
/// ends the reported content, but the stream is still consumed up to the newline.
///
/// # Errors
///
/// - [`LineError::InvalidArgument`] if a [`GrowthPolicy::Grow`] limit is below 2 bytes.
/// - [`LineError::AllocationFailure`] if the buffer can't be allocated or grown. No stream I/O
///   happens when the first allocation fails.
/// - [`LineError::EndOfStream`] if the stream has no more bytes.
/// - [`LineError::Io`] if the stream fails. Bytes read before the failure are lost.
///
/// # Examples
///
/// ```
/// # use dyn_line_reader::{GrowthPolicy, LineBuffer, read_line_with};
/// use std::io::Cursor;
///
/// let long = "x".repeat(3000) + "\n";
/// let mut stream = Cursor::new(long.as_bytes());
/// let mut line = LineBuffer::new();
///
/// let policy = GrowthPolicy::Grow { max_capacity: 1 << 20 };
/// assert_eq!(read_line_with(&mut line, &mut stream, policy).unwrap(), 3000);
/// assert_eq!(line.cap(), 4096);
/// ```
#[expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "Safe by invariant"
)]
pub fn read_line_with<R: BufRead + ?Sized>(
    line: &mut LineBuffer,
    reader: &mut R,
    policy: GrowthPolicy,
) -> Result<usize> {
    let limit = match policy {
        GrowthPolicy::Truncate => None,
        GrowthPolicy::Grow { max_capacity } if max_capacity < MIN_CAPACITY => {
            return Err(LineError::InvalidArgument(
                "growth limit leaves no room for a line",
            ));
        }
        GrowthPolicy::Grow { max_capacity } => Some(max_capacity),
    };

    if !line.is_allocated() {
        line.ensure_capacity(limit.map_or(DEFAULT_CAPACITY, |max| DEFAULT_CAPACITY.min(max)))?;
    }

    // Drop the previous line so a failed read never exposes stale content
    line.clear();

    let (read, truncated) = fill_line(line, reader, limit)?;

    let storage = line.storage();
    let mut len = str_len(&storage[..=read]);

    if len > 0 && storage[len - 1] == b'\n' {
        len -= 1;
    }

    line.set_len(len);
    trace!(len, truncated, "read line");

    Ok(len)
}

/// Reads into the whole of `line`, growing it up to `limit` while the line doesn't fit.
///
/// Returns the bytes read and whether the line was cut short of its newline.
#[expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "Safe by invariant"
)]
fn fill_line<R: BufRead + ?Sized>(
    line: &mut LineBuffer,
    reader: &mut R,
    limit: Option<usize>,
) -> Result<(usize, bool)> {
    let mut read = read_bounded(line.storage_mut(), reader)?;
    let mut truncated = is_cut(line, read);

    let Some(limit) = limit else {
        return Ok((read, truncated));
    };

    while truncated {
        if !line.grow(limit)? {
            debug!(
                cap = line.cap(),
                max_capacity = limit,
                "line exceeds the growth limit, truncating"
            );
            break;
        }
        debug!(cap = line.cap(), read, "line buffer grown to fit a long line");

        // Carry on right where the last read stopped, over its terminator
        match read_bounded(&mut line.storage_mut()[read..], reader) {
            Ok(more) => read += more,
            Err(LineError::EndOfStream) => {
                truncated = false;
                break;
            }
            Err(e) => return Err(e),
        }
        truncated = is_cut(line, read);
    }

    Ok((read, truncated))
}

/// Reads one line the way sentinel-returning code expects.
///
/// Returns the line length, or `-1` for any failure, including end-of-stream.
///
/// # Examples
///
/// ```
/// # use dyn_line_reader::{LineBuffer, read_line_sentinel};
/// # use std::io::Cursor;
/// let mut stream = Cursor::new(b"ok\n");
/// let mut line = LineBuffer::new();
///
/// assert_eq!(read_line_sentinel(&mut line, &mut stream), 2);
/// assert_eq!(read_line_sentinel(&mut line, &mut stream), -1);
/// ```
pub fn read_line_sentinel<R: BufRead + ?Sized>(line: &mut LineBuffer, reader: &mut R) -> isize {
    read_line(line, reader)
        .ok()
        .and_then(|len| isize::try_from(len).ok())
        .unwrap_or(-1)
}

/// Whether a read of `read` bytes filled the buffer without reaching a newline.
#[expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "Safe by invariant"
)]
fn is_cut(line: &LineBuffer, read: usize) -> bool {
    read + 1 == line.cap() && (read == 0 || line.storage()[read - 1] != b'\n')
}
