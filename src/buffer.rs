//! Reusable, caller-owned line storage.
//!
//! The [`LineBuffer`] type holds the bytes of the most recently read line. It starts out
//! unallocated, gets its first allocation lazily on the first read, and keeps that allocation
//! across reads until it is [released](LineBuffer::release) or dropped.
//!
//! # Example
//!
//! ```
//! use dyn_line_reader::{LineBuffer, read_line};
//! use dyn_line_reader::constants::DEFAULT_CAPACITY;
//! use std::io::Cursor;
//!
//! let mut stream = Cursor::new(b"hello\nworld\n");
//! let mut line = LineBuffer::new();
//! assert!(!line.is_allocated());
//!
//! // The first read allocates
//! assert_eq!(read_line(&mut line, &mut stream).unwrap(), 5);
//! assert_eq!(line.as_bytes(), b"hello");
//! assert_eq!(line.cap(), DEFAULT_CAPACITY);
//!
//! // Later reads reuse the same storage
//! assert_eq!(read_line(&mut line, &mut stream).unwrap(), 5);
//! assert_eq!(line.as_bytes(), b"world");
//!
//! // Hand the memory back once done
//! line.release();
//! assert_eq!(line.cap(), 0);
//! ```

use crate::constants::{DEFAULT_CAPACITY, PRACTICAL_MAX_SIZE};
use crate::error::{LineError, Result};
use tracing::debug;

/// A growable byte buffer holding one line and its terminator.
///
/// # Invariants
///
/// This buffer maintains `len < cap == buf.len() <= buf.capacity()` whenever it is allocated, and
/// `buf[len] == 0` in that case. An unallocated buffer has `cap == len == 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    /// Internal storage, always exactly `cap` bytes long.
    buf: Vec<u8>,
    /// Tracked capacity of the buffer, including room for the terminator.
    cap: usize,
    /// Length of the current line, excluding the terminator.
    len: usize,
}

impl LineBuffer {
    /// Creates an unallocated buffer.
    ///
    /// Nothing is allocated until the first read, or until [`ensure_capacity`](Self::ensure_capacity)
    /// is called.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            cap: 0,
            len: 0,
        }
    }

    /// Creates a buffer with exactly the given capacity.
    ///
    /// A capacity of `0` is the same as [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_line_reader::LineBuffer;
    /// let line = LineBuffer::with_capacity(64);
    /// assert_eq!(line.cap(), 64);
    /// assert!(line.is_empty());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity],
            cap: capacity,
            len: 0,
        }
    }

    /// Returns the current line, without its newline or terminator.
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the current line followed by its zero terminator.
    ///
    /// An unallocated buffer yields just the terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_line_reader::{LineBuffer, read_line};
    /// # use std::io::Cursor;
    /// let mut line = LineBuffer::new();
    /// assert_eq!(line.as_bytes_with_nul(), b"\0");
    ///
    /// read_line(&mut line, &mut Cursor::new(b"abc\n")).unwrap();
    /// assert_eq!(line.as_bytes_with_nul(), b"abc\0");
    /// ```
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.cap == 0 {
            return b"\0";
        }

        &self.buf[..=self.len]
    }

    /// Returns the length of the current line in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the current line is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the tracked capacity, including the byte reserved for the terminator.
    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Returns `true` once the buffer holds an allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.cap > 0
    }

    /// Forgets the current line without touching the capacity.
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        if self.cap > 0 {
            self.buf[0] = 0;
        }
    }

    /// Makes sure the buffer can hold at least `min` bytes, terminator included.
    ///
    /// Growing keeps the current line intact. Asking for less than the current capacity does
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`LineError::AllocationFailure`] if `min` exceeds [`PRACTICAL_MAX_SIZE`] or the allocator
    /// refuses the request. The buffer is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_line_reader::LineBuffer;
    /// let mut line = LineBuffer::new();
    /// line.ensure_capacity(100).unwrap();
    /// assert_eq!(line.cap(), 100);
    ///
    /// // Never shrinks
    /// line.ensure_capacity(10).unwrap();
    /// assert_eq!(line.cap(), 100);
    ///
    /// assert!(line.ensure_capacity(usize::MAX).is_err());
    /// ```
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by bounds checks")]
    pub fn ensure_capacity(&mut self, min: usize) -> Result<()> {
        if min <= self.cap {
            return Ok(());
        }

        if min > PRACTICAL_MAX_SIZE {
            return Err(LineError::AllocationFailure { requested: min });
        }

        // Reserve first so that a failure leaves the buffer as it was
        self.buf
            .try_reserve_exact(min - self.buf.len())
            .map_err(|_| LineError::AllocationFailure { requested: min })?;
        self.buf.resize(min, 0);

        debug!(from = self.cap, to = min, "line buffer allocated");
        self.cap = min;

        Ok(())
    }

    /// Grows the buffer one step, never past `limit`.
    ///
    /// Returns `false` if the buffer is already at (or past) the limit.
    pub(crate) fn grow(&mut self, limit: usize) -> Result<bool> {
        let next = Self::cap_up(self.cap.saturating_add(1)).min(limit);

        if next <= self.cap {
            return Ok(false);
        }

        self.ensure_capacity(next)?;

        Ok(true)
    }

    /// Frees the allocation and returns the buffer to its unallocated state.
    ///
    /// Dropping the buffer has the same effect. After a release the next read allocates afresh.
    pub fn release(&mut self) {
        if self.cap > 0 {
            debug!(cap = self.cap, "line buffer released");
        }

        self.buf = Vec::new();
        self.cap = 0;
        self.len = 0;
    }

    /// Rounds capacity up to the nearest power-of-2 multiple of [`DEFAULT_CAPACITY`].
    ///
    /// This is the growth step used when a line doesn't fit. The result is at least
    /// [`DEFAULT_CAPACITY`] and at most [`PRACTICAL_MAX_SIZE`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_line_reader::LineBuffer;
    /// # use dyn_line_reader::constants::DEFAULT_CAPACITY;
    /// assert_eq!(LineBuffer::cap_up(0), DEFAULT_CAPACITY);
    /// assert_eq!(LineBuffer::cap_up(DEFAULT_CAPACITY), DEFAULT_CAPACITY);
    /// assert_eq!(LineBuffer::cap_up(DEFAULT_CAPACITY + 1), 2 * DEFAULT_CAPACITY);
    /// assert_eq!(LineBuffer::cap_up(3 * DEFAULT_CAPACITY), 4 * DEFAULT_CAPACITY);
    /// ```
    #[inline]
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by bounds checks")]
    pub fn cap_up(capacity: usize) -> usize {
        // The early return for large capacities ensures the power-of-two calculation can't
        // overflow.

        // Max bounds check
        if capacity >= PRACTICAL_MAX_SIZE >> 1 {
            return PRACTICAL_MAX_SIZE;
        }

        // Min bounds check
        if capacity < DEFAULT_CAPACITY {
            return DEFAULT_CAPACITY;
        }

        capacity.div_ceil(DEFAULT_CAPACITY).next_power_of_two() * DEFAULT_CAPACITY
    }

    /// The whole storage, terminator and stale bytes included.
    #[inline]
    pub(crate) fn storage(&self) -> &[u8] {
        &self.buf
    }

    /// The whole storage, for reads to write into.
    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Marks the first `len` bytes as the current line and terminates it.
    #[expect(clippy::indexing_slicing, reason = "Callers keep len < cap")]
    #[inline]
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len < self.cap);
        self.buf[len] = 0;
        self.len = len;
    }
}

#[cfg(test)]
mod tests;
