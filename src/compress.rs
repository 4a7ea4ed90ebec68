//! Thin wrapper over zstd for text blobs.

use tracing::debug;

use crate::SundryResult;

/// Compression level passed to the codec.
const LEVEL: i32 = 3;

/// Compress a string into a zstd frame.
///
/// # Errors
///
/// Returns [`crate::SundryError::Compression`] when the codec reports an
/// I/O failure.
pub fn compress(text: &str) -> SundryResult<Vec<u8>> {
    let compressed = zstd::encode_all(text.as_bytes(), LEVEL)?;
    debug!(input = text.len(), output = compressed.len(), "compressed text");
    Ok(compressed)
}

/// Decompress a zstd frame back into a string.
///
/// # Errors
///
/// Returns [`crate::SundryError::Compression`] for malformed input and
/// [`crate::SundryError::Utf8`] when the payload is not valid UTF-8 text.
pub fn decompress(bytes: &[u8]) -> SundryResult<String> {
    let decompressed = zstd::decode_all(bytes)?;
    let text = String::from_utf8(decompressed)?;
    debug!(input = bytes.len(), output = text.len(), "decompressed text");
    Ok(text)
}
