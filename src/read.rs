use crate::buffer::LineBuffer;
use crate::error::Result;
use crate::getline::{GrowthPolicy, read_line, read_line_with};
use std::io::BufRead;

/// A `LineRead` is a [`BufRead`] that can read lines into a reusable [`LineBuffer`].
///
/// It's implemented for every [`BufRead`], so reading a line is a method call on the stream:
///
/// ```
/// use dyn_line_reader::{LineBuffer, LineRead};
/// use std::io::Cursor;
///
/// let mut stream = Cursor::new(b"alpha\nbeta\n");
/// let mut line = LineBuffer::new();
///
/// while stream.read_line_into(&mut line).is_ok() {
///     assert!(!line.is_empty());
/// }
/// ```
pub trait LineRead: BufRead {
    /// Reads one line into `line`, truncating lines that don't fit.
    ///
    /// See [`read_line`].
    fn read_line_into(&mut self, line: &mut LineBuffer) -> Result<usize> {
        read_line(line, self)
    }

    /// Reads one line into `line`, handling long lines according to `policy`.
    ///
    /// See [`read_line_with`].
    fn read_line_into_with(&mut self, line: &mut LineBuffer, policy: GrowthPolicy) -> Result<usize> {
        read_line_with(line, self, policy)
    }
}

impl<R: BufRead + ?Sized> LineRead for R {}
