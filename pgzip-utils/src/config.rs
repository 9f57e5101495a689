//! Configuration types and constants for the stream filter.

/// Default buffer size for standard stream I/O
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Default compression level
pub const DEFAULT_LEVEL: u32 = 6;

/// Lowest accepted compression level (gzip framing without compression)
pub const MIN_LEVEL: u32 = 0;

/// Highest accepted compression level (best compression)
pub const MAX_LEVEL: u32 = 9;

/// Represents the two directions the filter can run in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Compress input data
    Compress,
    /// Decompress input data
    Decompress,
}

/// Resolved configuration for a single filter invocation.
///
/// Built once from the command line, then consumed by the pipeline;
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Operation mode
    pub mode: OperationMode,
    /// Compression level (0-9, only meaningful when compressing)
    pub level: u32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            mode: OperationMode::Compress,
            level: DEFAULT_LEVEL,
        }
    }
}
