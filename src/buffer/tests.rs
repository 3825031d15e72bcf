//! Tests for the LineBuffer
//!
//! These tests are in the same narrative order as the main file: creation, accessors, then the
//! memory management operations.

#![expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    clippy::unwrap_used,
    reason = "Okay in tests"
)]

use super::*;
use rstest::rstest;

// -----------------------------------------------------------------------------
// LineBuffer - Creation
// -----------------------------------------------------------------------------

#[test]
fn test_buffer_new() {
    let line = LineBuffer::new();

    // Nothing is allocated up front
    assert_eq!(line.buf.capacity(), 0);
    assert_eq!(line.cap, 0);
    assert_eq!(line.len, 0);
    assert!(!line.is_allocated());

    // `Default` is the same thing
    assert_eq!(LineBuffer::default(), line);
}

#[test]
fn test_buffer_with_capacity() {
    let line = LineBuffer::with_capacity(123);

    // Exact, no rounding
    assert_eq!(line.buf.len(), 123);
    assert_eq!(line.cap, 123);
    assert_eq!(line.len, 0);
    assert!(line.is_allocated());

    // Storage starts out terminated
    assert_eq!(line.as_bytes_with_nul(), b"\0");
}

#[test]
fn test_buffer_with_zero_capacity() {
    assert_eq!(LineBuffer::with_capacity(0), LineBuffer::new());
}

// -----------------------------------------------------------------------------
// LineBuffer - Accessors
// -----------------------------------------------------------------------------

#[test]
fn test_buffer_as_bytes() {
    let mut line = LineBuffer::with_capacity(16);

    // Starts empty
    assert_eq!(line.as_bytes(), b"");
    assert!(line.is_empty());

    // Write a line the way a read does
    line.storage_mut()[..5].copy_from_slice(b"hello");
    line.set_len(5);

    assert_eq!(line.as_bytes(), b"hello");
    assert_eq!(line.as_bytes_with_nul(), b"hello\0");
    assert_eq!(line.len(), 5);
    assert!(!line.is_empty());
}

#[test]
fn test_buffer_set_len_terminates() {
    let mut line = LineBuffer::with_capacity(8);
    line.storage_mut().copy_from_slice(b"abcdefgh");

    line.set_len(3);

    // The byte after the line becomes the terminator
    assert_eq!(line.buf[3], 0);
    assert_eq!(line.as_bytes_with_nul(), b"abc\0");
}

#[test]
fn test_buffer_clear() {
    let mut line = LineBuffer::with_capacity(16);
    line.storage_mut()[..3].copy_from_slice(b"abc");
    line.set_len(3);

    line.clear();

    assert!(line.is_empty());
    assert_eq!(line.as_bytes_with_nul(), b"\0");
    assert_eq!(line.cap(), 16);

    // Clearing an unallocated buffer is fine too
    let mut line = LineBuffer::new();
    line.clear();
    assert_eq!(line, LineBuffer::new());
}

// -----------------------------------------------------------------------------
// LineBuffer - Memory management
// -----------------------------------------------------------------------------

#[test]
fn test_buffer_ensure_capacity() {
    let mut line = LineBuffer::new();

    line.ensure_capacity(DEFAULT_CAPACITY).unwrap();
    assert_eq!(line.cap(), DEFAULT_CAPACITY);
    assert_eq!(line.buf.len(), DEFAULT_CAPACITY);

    // Smaller requests are no-ops
    line.ensure_capacity(1).unwrap();
    assert_eq!(line.cap(), DEFAULT_CAPACITY);
}

#[test]
fn test_buffer_ensure_capacity_keeps_line() {
    let mut line = LineBuffer::with_capacity(8);
    line.storage_mut()[..5].copy_from_slice(b"hello");
    line.set_len(5);

    line.ensure_capacity(64).unwrap();

    assert_eq!(line.cap(), 64);
    assert_eq!(line.as_bytes_with_nul(), b"hello\0");
}

#[rstest]
#[case::past_practical_max(PRACTICAL_MAX_SIZE + 1)]
#[case::usize_max(usize::MAX)]
fn test_buffer_ensure_capacity_too_large(#[case] min: usize) {
    let mut line = LineBuffer::with_capacity(16);

    let err = line.ensure_capacity(min).unwrap_err();

    assert!(matches!(err, LineError::AllocationFailure { requested } if requested == min));
    // The buffer is untouched
    assert_eq!(line.cap(), 16);
}

#[test]
fn test_buffer_grow() {
    let mut line = LineBuffer::with_capacity(DEFAULT_CAPACITY);

    // Doubles within the limit
    assert!(line.grow(usize::MAX).unwrap());
    assert_eq!(line.cap(), 2 * DEFAULT_CAPACITY);

    // Clamped to the limit
    assert!(line.grow(3 * DEFAULT_CAPACITY).unwrap());
    assert_eq!(line.cap(), 3 * DEFAULT_CAPACITY);

    // Already at the limit
    assert!(!line.grow(3 * DEFAULT_CAPACITY).unwrap());
    assert_eq!(line.cap(), 3 * DEFAULT_CAPACITY);
}

#[test]
fn test_buffer_grow_from_small_capacity() {
    let mut line = LineBuffer::with_capacity(10);

    // Jumps straight to the default capacity
    assert!(line.grow(usize::MAX).unwrap());
    assert_eq!(line.cap(), DEFAULT_CAPACITY);
}

#[test_log::test]
fn test_buffer_release() {
    let mut line = LineBuffer::with_capacity(DEFAULT_CAPACITY);
    line.storage_mut()[..2].copy_from_slice(b"hi");
    line.set_len(2);

    line.release();

    assert_eq!(line, LineBuffer::new());
    assert_eq!(line.buf.capacity(), 0);

    // Releasing twice is harmless
    line.release();
    assert_eq!(line, LineBuffer::new());
}

#[rstest]
#[case(0, DEFAULT_CAPACITY)]
#[case(1, DEFAULT_CAPACITY)]
#[case(DEFAULT_CAPACITY, DEFAULT_CAPACITY)]
#[case(DEFAULT_CAPACITY + 1, 2 * DEFAULT_CAPACITY)]
#[case(2 * DEFAULT_CAPACITY, 2 * DEFAULT_CAPACITY)]
#[case(5 * DEFAULT_CAPACITY, 8 * DEFAULT_CAPACITY)]
#[case(PRACTICAL_MAX_SIZE >> 1, PRACTICAL_MAX_SIZE)]
#[case(usize::MAX, PRACTICAL_MAX_SIZE)]
fn test_buffer_cap_up(#[case] capacity: usize, #[case] expected: usize) {
    assert_eq!(LineBuffer::cap_up(capacity), expected);
}
