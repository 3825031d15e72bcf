//! Stream doubles shared by the unit tests.

use std::io::{self, BufRead, Cursor, Read};

/// A stream that hands out at most `chunk` bytes per `fill_buf` and can inject errors.
///
/// Each `fill_buf` first yields one [`io::ErrorKind::Interrupted`] when `interrupt` is set. Once
/// the data is exhausted, `fail_with` (if any) is returned instead of end-of-stream.
pub struct FlakyStream {
    data: Cursor<Vec<u8>>,
    chunk: usize,
    interrupt: bool,
    interrupted: bool,
    fail_with: Option<io::ErrorKind>,
    pub fill_calls: usize,
}

impl FlakyStream {
    pub fn new(data: &[u8], chunk: usize) -> Self {
        Self {
            data: Cursor::new(data.to_vec()),
            chunk,
            interrupt: false,
            interrupted: false,
            fail_with: None,
            fill_calls: 0,
        }
    }

    pub fn interrupting(mut self) -> Self {
        self.interrupt = true;
        self
    }

    pub fn failing_at_end(mut self, kind: io::ErrorKind) -> Self {
        self.fail_with = Some(kind);
        self
    }

    pub fn position(&self) -> u64 {
        self.data.position()
    }
}

impl Read for FlakyStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut available = self.fill_buf()?;
        let n = available.read(buf)?;
        self.consume(n);
        Ok(n)
    }
}

#[expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "Okay in tests"
)]
impl BufRead for FlakyStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.fill_calls += 1;

        if self.interrupt && !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.interrupted = false;

        let pos = self.data.position() as usize;
        let data = self.data.get_ref();
        if pos >= data.len() {
            if let Some(kind) = self.fail_with {
                return Err(io::Error::new(kind, "injected failure"));
            }
            return Ok(&[]);
        }

        let end = data.len().min(pos + self.chunk);
        Ok(&data[pos..end])
    }

    fn consume(&mut self, amt: usize) {
        self.data.consume(amt);
    }
}
