//! Error types for dbfdecode.
//!
//! Provides a single [`DecodeError`] enum shared by every decoder and by
//! decoder-name parsing.

/// All errors that can occur while decoding a field value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input was required to be UTF-8 but is not.
    #[error("invalid UTF-8 data (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix of the input.
        valid_up_to: usize,
    },

    /// The underlying code page table could not transcode the input.
    #[error("{0}: transcoding failed")]
    Transcoding(&'static str),

    /// A decoder name did not match any known decoder.
    #[error("unknown encoding: {0}")]
    UnknownDecoder(String),
}

impl From<std::str::Utf8Error> for DecodeError {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DecodeError>;
