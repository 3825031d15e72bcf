use crate::buffer::LineBuffer;
use crate::constants::{DEFAULT_MAX_CAPACITY, MIN_CAPACITY};
use crate::error::{LineError, Result};
use crate::getline::{GrowthPolicy, read_line_with};
use std::io::BufRead;
use tracing::debug;

/// A stream paired with the [`LineBuffer`] its lines are read into.
///
/// This is the owning counterpart of [`read_line_with`]: the buffer and the policy live next to
/// the stream, so each call just hands back the next line.
///
/// ```
/// use dyn_line_reader::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new(b"one\ntwo\n"));
///
/// assert_eq!(reader.read_line().unwrap(), Some(&b"one"[..]));
/// assert_eq!(reader.read_line().unwrap(), Some(&b"two"[..]));
/// assert_eq!(reader.read_line().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct LineReader<R: ?Sized> {
    line: LineBuffer,
    policy: GrowthPolicy,
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a new `LineReader` with default configuration.
    ///
    /// The buffer is allocated on the first read and grows up to [`DEFAULT_MAX_CAPACITY`].
    pub fn new(reader: R) -> LineReader<R> {
        LineReader::builder(reader).build()
    }

    /// Returns a [`LineReaderBuilder`] for configuring a new `LineReader`.
    pub fn builder(reader: R) -> LineReaderBuilder<R> {
        LineReaderBuilder {
            reader,
            initial_capacity: None,
            max_capacity: None,
            truncate: false,
        }
    }
}

/// A builder for constructing a [`LineReader`] with custom capacity settings.
///
/// A non-zero `initial_capacity` is raised to [`MIN_CAPACITY`], so every read makes progress. If
/// `max_capacity` is less than `initial_capacity`, it is raised to match.
///
/// ```
/// use dyn_line_reader::{GrowthPolicy, LineReader};
/// use std::io::Cursor;
///
/// let reader = LineReader::builder(Cursor::new(b"data"))
///     .initial_capacity(256)
///     .max_capacity(64 * 1024)
///     .build();
///
/// assert_eq!(reader.capacity(), 256);
/// assert_eq!(reader.policy(), GrowthPolicy::Grow { max_capacity: 64 * 1024 });
/// ```
#[must_use]
pub struct LineReaderBuilder<R> {
    reader: R,
    initial_capacity: Option<usize>,
    max_capacity: Option<usize>,
    truncate: bool,
}

impl<R: BufRead> LineReaderBuilder<R> {
    /// Sets the capacity allocated up front. `0` defers the allocation to the first read.
    pub fn initial_capacity(mut self, cap: usize) -> Self {
        self.initial_capacity = Some(cap);
        self
    }

    /// Sets the maximum buffer capacity. Defaults to [`DEFAULT_MAX_CAPACITY`].
    pub fn max_capacity(mut self, cap: usize) -> Self {
        self.max_capacity = Some(cap);
        self
    }

    /// Never grow the buffer, truncating lines that don't fit.
    pub fn truncate(mut self) -> Self {
        self.truncate = true;
        self
    }

    /// Sets the growth policy directly.
    pub fn growth(mut self, policy: GrowthPolicy) -> Self {
        match policy {
            GrowthPolicy::Truncate => self.truncate = true,
            GrowthPolicy::Grow { max_capacity } => {
                self.truncate = false;
                self.max_capacity = Some(max_capacity);
            }
        }
        self
    }

    /// Builds the [`LineReader`] with the configured settings.
    pub fn build(self) -> LineReader<R> {
        let line = match self.initial_capacity {
            Some(0) => LineBuffer::new(),
            Some(cap) => LineBuffer::with_capacity(cap.max(MIN_CAPACITY)),
            None => LineBuffer::new(),
        };

        let policy = if self.truncate {
            GrowthPolicy::Truncate
        } else {
            let max_capacity = self
                .max_capacity
                .unwrap_or(DEFAULT_MAX_CAPACITY)
                .max(line.cap())
                .max(MIN_CAPACITY);
            GrowthPolicy::Grow { max_capacity }
        };

        debug!(cap = line.cap(), ?policy, "line reader configured");

        LineReader {
            line,
            policy,
            reader: self.reader,
        }
    }
}

impl<R: ?Sized> LineReader<R> {
    /// The buffer holding the most recent line.
    pub fn buffer(&self) -> &LineBuffer {
        &self.line
    }

    /// The current buffer capacity.
    pub fn capacity(&self) -> usize {
        self.line.cap()
    }

    /// The growth policy applied to every read.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Frees the buffer. The next read allocates it again.
    pub fn release(&mut self) {
        self.line.release();
    }

    /// Gets a reference to the underlying stream.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying stream.
    ///
    /// Reading from it directly skips those bytes for this reader too, since nothing is buffered
    /// beyond the current line.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }
}

impl<R> LineReader<R> {
    /// Unwraps this `LineReader`, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Unwraps this `LineReader`, returning the underlying stream and the line buffer.
    pub fn into_parts(self) -> (R, LineBuffer) {
        (self.reader, self.line)
    }
}

impl<R: BufRead + ?Sized> LineReader<R> {
    /// Reads the next line, without its newline.
    ///
    /// Returns `Ok(None)` once the stream is exhausted.
    ///
    /// # Errors
    ///
    /// Any error from [`read_line_with`] other than [`LineError::EndOfStream`].
    pub fn read_line(&mut self) -> Result<Option<&[u8]>> {
        match read_line_with(&mut self.line, &mut self.reader, self.policy) {
            Ok(_) => Ok(Some(self.line.as_bytes())),
            Err(LineError::EndOfStream) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Returns an iterator over the remaining lines, each copied out of the buffer.
    ///
    /// ```
    /// use dyn_line_reader::LineReader;
    /// use std::io::Cursor;
    ///
    /// let mut reader = LineReader::new(Cursor::new(b"a\nb\nc"));
    /// let lines: Vec<_> = reader.lines().collect::<Result<_, _>>().unwrap();
    ///
    /// assert_eq!(lines, [b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    /// ```
    pub fn lines(&mut self) -> Lines<'_, R> {
        Lines {
            reader: self,
            done: false,
        }
    }
}

/// An iterator over the lines of a [`LineReader`].
///
/// Created by [`LineReader::lines`]. It stops for good after the end of the stream or after the
/// first error.
#[derive(Debug)]
pub struct Lines<'a, R: ?Sized> {
    reader: &'a mut LineReader<R>,
    done: bool,
}

impl<R: BufRead + ?Sized> Iterator for Lines<'_, R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_line() {
            Ok(Some(line)) => Some(Ok(line.to_vec())),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead + ?Sized> std::iter::FusedIterator for Lines<'_, R> {}
