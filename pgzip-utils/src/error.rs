//! Error types for the stream filter.

use std::io;

use gzp::GzpError;
use thiserror::Error;

/// Exit code reported for runtime failures (I/O or codec errors).
pub const EXIT_FAILURE: i32 = 1;

/// Exit code reported for malformed command lines.
///
/// Usage errors are raised by the argument resolver before any stream I/O
/// happens; they never appear as an [`Error`] value.
pub const EXIT_USAGE: i32 = 2;

/// Main error type for stream filter operations.
///
/// Each variant names the pipeline phase that failed, so an invoker can
/// tell whether any output had already been written when the process died.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to create the gzip reader over standard input
    #[error("failed creating gzip reader: {source}")]
    CreateDecoder {
        /// Underlying I/O error (e.g. malformed or missing gzip header)
        #[source]
        source: io::Error,
    },

    /// Byte transfer failed while compressing
    #[error("compress: {source}")]
    Compress {
        /// Underlying I/O error from the copy
        #[source]
        source: io::Error,
    },

    /// Byte transfer failed while decompressing
    #[error("decompress: {source}")]
    Decompress {
        /// Underlying I/O error from the copy
        #[source]
        source: io::Error,
    },

    /// Finalizing the compressed stream failed
    #[error("compress closing: {source}")]
    CompressClose {
        /// Error from the compression engine while flushing the trailer
        #[source]
        source: GzpError,
    },
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Every runtime failure maps to [`EXIT_FAILURE`]; the distinct
    /// [`EXIT_USAGE`] code is reserved for argument parsing.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Specialized `Result` type for stream filter operations.
pub type Result<T> = std::result::Result<T, Error>;
