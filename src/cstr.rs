//! Lengths of zero-terminated byte strings.
//!
//! Line storage keeps a `0` byte right after the line content, so that its length can be
//! recovered the same way for both the bounded and the dynamic reads.

/// Returns the number of bytes before the first zero byte.
///
/// The end of the slice counts as a terminator, so a slice without any zero byte yields its full
/// length.
///
/// # Examples
///
/// ```
/// # use dyn_line_reader::str_len;
/// assert_eq!(str_len(b"abc\0def\0"), 3);
/// assert_eq!(str_len(b"\0"), 0);
/// assert_eq!(str_len(b"no terminator"), 13);
/// ```
#[inline]
pub fn str_len(bytes: &[u8]) -> usize {
    str_len_checked(bytes).unwrap_or(bytes.len())
}

/// Returns the number of bytes before the first zero byte, or `None` if there is none.
///
/// # Examples
///
/// ```
/// # use dyn_line_reader::cstr::str_len_checked;
/// assert_eq!(str_len_checked(b"abc\0"), Some(3));
/// assert_eq!(str_len_checked(b"abc"), None);
/// ```
#[inline]
pub fn str_len_checked(bytes: &[u8]) -> Option<usize> {
    memchr::memchr(0, bytes)
}
