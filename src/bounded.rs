//! Line reads into a fixed-size destination.
//!
//! [`read_bounded`] is the building block for every other read in the crate. It never allocates
//! and never consumes a byte it doesn't copy, so the stream is left exactly after the last byte
//! that landed in the destination.

use crate::error::{LineError, Result};
use std::cmp;
use std::io::{self, BufRead};

/// Reads one line, or as much of it as fits, into `dest`.
///
/// Bytes are copied from `reader` until one of the following happens:
///
/// - `dest.len() - 1` bytes have been written,
/// - a newline has been written (the newline itself is copied),
/// - the stream reached end-of-stream.
///
/// The byte right after the last written byte is set to `0`, and the number of bytes written is
/// returned. The stream advances by exactly that number of bytes.
///
/// A destination of length 1 only has room for the terminator, so `Ok(0)` is returned without
/// reading.
///
/// # Errors
///
/// - [`LineError::InvalidArgument`] if `dest` is empty. The stream is not touched.
/// - [`LineError::EndOfStream`] if the stream had no bytes at all. `dest` is not touched.
/// - [`LineError::Io`] for any stream error other than [`io::ErrorKind::Interrupted`], which is
///   retried. Bytes copied before the error remain consumed.
///
/// # Examples
///
/// ```
/// # use dyn_line_reader::read_bounded;
/// use std::io::Cursor;
///
/// let mut stream = Cursor::new(b"abc\ndef");
/// let mut dest = [0xffu8; 8];
///
/// assert_eq!(read_bounded(&mut dest, &mut stream).unwrap(), 4);
/// assert_eq!(&dest[..5], b"abc\n\0");
/// assert_eq!(stream.position(), 4);
///
/// assert_eq!(read_bounded(&mut dest, &mut stream).unwrap(), 3);
/// assert_eq!(&dest[..4], b"def\0");
///
/// assert!(read_bounded(&mut dest, &mut stream).unwrap_err().is_eof());
/// ```
#[expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "Safe by bounds checks"
)]
pub fn read_bounded<R: BufRead + ?Sized>(dest: &mut [u8], reader: &mut R) -> Result<usize> {
    // One byte is always reserved for the terminator
    let Some(limit) = dest.len().checked_sub(1) else {
        return Err(LineError::InvalidArgument("destination has no capacity"));
    };

    let mut written = 0;

    while written < limit {
        // Get whatever the stream has buffered, retrying on interrupt
        let available = loop {
            match reader.fill_buf() {
                Ok(available) => break available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        };

        if available.is_empty() {
            // We've hit EOF
            break;
        }

        // Never look past the room we have left
        let window = &available[..cmp::min(limit - written, available.len())];

        // Take up to and including the newline, if there is one
        let (taken, found_newline) = match memchr::memchr(b'\n', window) {
            Some(i) => (i + 1, true),
            None => (window.len(), false),
        };

        dest[written..written + taken].copy_from_slice(&window[..taken]);
        reader.consume(taken);
        written += taken;

        if found_newline {
            break;
        }
    }

    if written == 0 && limit > 0 {
        // Nothing was read, and we've reached the end of the stream
        return Err(LineError::EndOfStream);
    }

    dest[written] = 0;

    Ok(written)
}
