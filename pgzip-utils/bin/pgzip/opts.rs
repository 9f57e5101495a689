//! Command line argument parsing for the pgzip filter.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use pgzip_utils::{OperationMode, StreamConfig, DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};

/// Parallel gzip stream filter
///
/// Reads stdin, writes stdout; no file operands are accepted.
#[derive(Parser, Debug)]
#[command(
    name = "pgzip",
    version,
    about = "Compress or decompress a gzip stream from stdin to stdout",
    long_about = "pgzip is a gzip-compatible filter that reads standard input, compresses \
                  (or decompresses with -d) the stream on all available cores, and writes \
                  the result to standard output."
)]
pub struct PgzipOpts {
    /// Decompress instead of compress
    #[arg(short = 'd', long = "decompress")]
    pub decompress: bool,

    /// Compression level (0 = no compression, 9 = best)
    #[arg(
        short = 'n',
        long = "level",
        value_name = "LEVEL",
        default_value_t = DEFAULT_LEVEL,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_LEVEL)..=i64::from(MAX_LEVEL))
    )]
    pub level: u32,
}

/// Outcome of argument resolution.
///
/// Help and version requests are successful resolutions that bypass the
/// pipeline entirely; the caller matches on the tag.
#[derive(Debug)]
pub enum Resolution {
    /// Run the stream pipeline with this configuration
    Run(StreamConfig),
    /// Print the rendered help/version text to stdout and exit 0
    Help(clap::Error),
}

impl PgzipOpts {
    /// Resolves raw arguments into a [`Resolution`].
    ///
    /// Performs no I/O; printing (help to stdout, usage errors to stderr)
    /// is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error for malformed invocations:
    /// unknown flags, missing or non-integer level values, levels outside
    /// the accepted range, or unexpected positional operands.
    pub fn resolve<I, T>(args: I) -> Result<Resolution, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(opts) => Ok(Resolution::Run(opts.config())),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Ok(Resolution::Help(err))
            }
            Err(err) => Err(err),
        }
    }

    /// Build the stream configuration from the parsed options
    pub fn config(&self) -> StreamConfig {
        StreamConfig {
            mode: if self.decompress {
                OperationMode::Decompress
            } else {
                OperationMode::Compress
            },
            level: self.level,
        }
    }
}
