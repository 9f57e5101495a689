//! Compression and decompression operations for the stream filter.

use std::io::{self, Read, Write};

use flate2::read::MultiGzDecoder;
use flate2::Compression;
use gzp::deflate::Gzip;
use gzp::par::compress::{ParCompress, ParCompressBuilder};
use gzp::ZWriter;

use crate::error::{Error, Result};

/// Compresses all bytes from `input` into gzip format on `output`.
///
/// The encoder splits the stream into blocks and compresses them on a
/// worker pool, which is why it takes ownership of the writer; `level`
/// must already be validated to the accepted 0-9 range.
///
/// # Errors
///
/// Returns [`Error::Compress`] if the streaming copy fails (upstream read
/// error, downstream write error, broken pipe) and [`Error::CompressClose`]
/// if flushing the gzip trailer fails. Both are terminal; any bytes already
/// written to `output` must be considered garbage.
pub fn compress_stream(
    mut input: impl Read,
    output: impl Write + Send + 'static,
    level: u32,
) -> Result<()> {
    let mut encoder: ParCompress<Gzip> = ParCompressBuilder::new()
        .compression_level(Compression::new(level))
        .from_writer(output);

    io::copy(&mut input, &mut encoder).map_err(|source| Error::Compress { source })?;

    // The trailer (CRC32 and size fields) is only written on finish, so a
    // successful copy alone does not make the output a valid gzip stream.
    encoder.finish().map_err(|source| Error::CompressClose { source })?;

    Ok(())
}

/// Decompresses a gzip stream from `input` onto `output`.
///
/// Concatenated gzip members decode to the concatenation of their
/// payloads, like `gzip -d`. The decoder is released on every exit path.
///
/// # Errors
///
/// Returns [`Error::CreateDecoder`] if no valid gzip header can be read
/// from `input` and [`Error::Decompress`] if the copy fails later on
/// (truncated or corrupt data, checksum mismatch, write failure).
pub fn decompress_stream(input: impl Read, mut output: impl Write) -> Result<()> {
    let mut decoder = MultiGzDecoder::new(input);

    // The decoder parses the gzip header lazily, on the first read. Prime
    // it with a one-byte read so a malformed header surfaces as a reader
    // construction failure rather than a mid-copy one.
    let mut head = [0u8; 1];
    let primed = decoder
        .read(&mut head)
        .map_err(|source| Error::CreateDecoder { source })?;

    output
        .write_all(&head[..primed])
        .map_err(|source| Error::Decompress { source })?;

    io::copy(&mut decoder, &mut output).map_err(|source| Error::Decompress { source })?;

    output
        .flush()
        .map_err(|source| Error::Decompress { source })?;

    Ok(())
}
