//! Stream dispatch between the resolved configuration and the operations.

use std::io::{self, BufReader, BufWriter};

use crate::config::{OperationMode, StreamConfig, DEFAULT_BUFFER_SIZE};
use crate::error::Result;
use crate::operations::{compress_stream, decompress_stream};

/// Runs exactly one stream transformation over stdin/stdout.
///
/// The branch is selected once from `config.mode` and driven to
/// completion; there is no retry and no second pass within a process
/// invocation.
///
/// # Errors
///
/// Propagates the phase-tagged error of whichever operation ran; see
/// [`crate::error::Error`]. Any failure means stdout holds unreliable
/// output, even if some bytes were already written.
pub fn run_stream(config: &StreamConfig) -> Result<()> {
    let input = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, io::stdin().lock());

    match config.mode {
        OperationMode::Compress => {
            // The encoder moves its writer onto a worker thread, which a
            // StdoutLock cannot cross; hand over the owned handle instead.
            compress_stream(input, io::stdout(), config.level)
        }
        OperationMode::Decompress => {
            let output = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, io::stdout().lock());
            decompress_stream(input, output)
        }
    }
}
