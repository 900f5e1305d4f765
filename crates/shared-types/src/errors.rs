//! # Error Types
//!
//! Defines error types shared across crates.

use thiserror::Error;

/// Errors decoding a node string key.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyError {
    /// Key has the wrong number of characters.
    #[error("Invalid key length: expected {expected} chars, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Key contains characters outside the encoding alphabet.
    #[error("Invalid key encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),
}
