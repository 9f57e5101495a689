//! Parallel gzip filtering between standard streams.
//!
//! This crate backs the `pgzip` binary: it resolves a command line into an
//! immutable [`StreamConfig`], then runs a single compress or decompress
//! pass from stdin to stdout. Compression is delegated to a block-parallel
//! gzip engine; decompression streams through a gzip decoder that accepts
//! concatenated members. Neither direction buffers the whole stream, so
//! inputs larger than memory are fine.

pub mod config;
pub mod error;
pub mod operations;
pub mod process;


pub use config::{
    OperationMode, StreamConfig, DEFAULT_BUFFER_SIZE, DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL,
};
pub use error::{Error, Result, EXIT_FAILURE, EXIT_USAGE};
pub use operations::{compress_stream, decompress_stream};
pub use process::run_stream;
