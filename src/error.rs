//! Error types produced by the fallible helpers.
//!
//! Most of the crate is infallible by contract: the merge engine and the
//! collection utilities fall back to `Option` sentinels rather than raising.
//! The variants here cover the two seams that genuinely can fail, namely
//! compression and environment lookups.

use thiserror::Error;

/// Errors that can occur in the fallible corners of the library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SundryError {
    /// Requested environment variable is not set (and no fallback was given).
    #[error("environment value '{key}' does not exist")]
    Environment {
        /// Name of the missing variable.
        key: String,
    },

    /// Failure while compressing or decompressing a text blob.
    #[error("compression failed: {source}")]
    Compression {
        /// Underlying I/O error reported by the codec.
        #[from]
        source: std::io::Error,
    },

    /// Decompressed payload was not valid UTF-8 text.
    #[error("decompressed payload is not valid UTF-8: {source}")]
    Utf8 {
        /// Conversion error carrying the offending bytes.
        #[from]
        source: std::string::FromUtf8Error,
    },
}

/// Result alias used by the fallible helpers.
pub type SundryResult<T> = Result<T, SundryError>;
