//! Error types for line reading.

use std::io;

use thiserror::Error;

/// Result type for line reading operations.
pub type Result<T> = std::result::Result<T, LineError>;

/// Errors that can occur while reading a line.
///
/// A zero-length line is a success (`Ok(0)`), never one of these.
#[derive(Error, Debug)]
pub enum LineError {
    /// A destination or configuration value cannot be used
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The line buffer could not be allocated or grown
    #[error("Failed to allocate a line buffer of {requested} bytes")]
    AllocationFailure { requested: usize },

    /// The stream had no more bytes to give
    #[error("End of stream")]
    EndOfStream,

    /// The stream reported an error other than end-of-stream
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl LineError {
    /// Returns `true` if the stream was exhausted.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}
