//! Line reading into a reusable, lazily allocated buffer, with explicit control over how long lines
//! are handled.
//!
//! [`BufRead::read_line`](std::io::BufRead::read_line) appends into a `String`, grows without a
//! limit, and requires UTF-8. This crate reads raw bytes into a [`LineBuffer`] that is allocated
//! on first use, reused across reads, and released when you say so. Lines that don't fit are
//! either truncated, leaving the rest of the line in the stream, or trigger growth up to a
//! configurable maximum.
//!
//! # When to use this
//!
//! This crate is a good fit for shells, line-based protocol handlers, and other loops that read
//! one line at a time and want to keep a single scratch buffer alive across iterations. The stream
//! is never read past the end of the current line, so the caller can hand it to other code
//! between lines.
//!
//! # Quick start
//!
//! ```
//! use dyn_line_reader::{LineBuffer, read_line};
//! use std::io::Cursor;
//!
//! let mut stream = Cursor::new(b"hello\nworld\n");
//! let mut line = LineBuffer::new();
//!
//! // The buffer is allocated by the first read
//! assert_eq!(read_line(&mut line, &mut stream).unwrap(), 5);
//! assert_eq!(line.as_bytes(), b"hello");
//!
//! // And reused by the next one
//! assert_eq!(read_line(&mut line, &mut stream).unwrap(), 5);
//! assert_eq!(line.as_bytes(), b"world");
//!
//! // End-of-stream is an error, distinct from an empty line
//! assert!(read_line(&mut line, &mut stream).unwrap_err().is_eof());
//! ```
//!
//! # Capacity configuration
//!
//! ```
//! use dyn_line_reader::LineReader;
//! use std::io::Cursor;
//!
//! let mut reader = LineReader::builder(Cursor::new(b"a very long line\n"))
//!     .initial_capacity(4)     // start tiny
//!     .max_capacity(64 * 1024) // grow up to 64 KiB
//!     .build();
//!
//! assert_eq!(reader.read_line().unwrap(), Some(&b"a very long line"[..]));
//! ```
//!
//! # Crate organisation
//!
//! - [`read_line`] / [`read_line_with`] — read one line into a [`LineBuffer`], truncating or
//!   growing according to a [`GrowthPolicy`].
//! - [`read_bounded`] — the underlying read into a fixed `&mut [u8]`, keeping the newline and
//!   zero-terminating the result.
//! - [`str_len`] — length of a zero-terminated byte string.
//! - [`LineReader`] — a stream bundled with its buffer and policy, configured through
//!   [`LineReaderBuilder`].
//! - [`LineRead`] — extension trait giving every [`BufRead`](std::io::BufRead) the line reads as
//!   methods.
//! - [`constants`] — buffer size constants ([`DEFAULT_CAPACITY`](constants::DEFAULT_CAPACITY),
//!   [`DEFAULT_MAX_CAPACITY`](constants::DEFAULT_MAX_CAPACITY)) used throughout the crate.
//!
//! # Logging
//!
//! Allocation, growth, release and truncation at the growth limit are reported through
//! [`tracing`] at `debug` level, and every line read at `trace` level. No subscriber is installed
//! by this crate.

mod bounded;
pub mod buffer;
pub mod constants;
pub mod cstr;
mod error;
mod getline;
mod read;
mod reader;

#[cfg(test)]
mod testing;

pub use bounded::read_bounded;
pub use buffer::LineBuffer;
pub use cstr::str_len;
pub use error::{LineError, Result};
pub use getline::{GrowthPolicy, read_line, read_line_sentinel, read_line_with};
pub use read::LineRead;
pub use reader::{LineReader, LineReaderBuilder, Lines};
