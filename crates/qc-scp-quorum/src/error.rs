//! Error types for the SCP quorum core
//!
//! The evaluators are total; only encoding, decoding, configuration and
//! installing a local quorum set can fail.

use shared_types::KeyError;
use thiserror::Error;

/// Quorum core errors
#[derive(Debug, Error)]
pub enum QuorumError {
    /// Quorum set document is not a JSON object
    #[error("JSON field 'qset' must be an object")]
    NotAnObject,

    /// `t` missing or not an unsigned 32-bit integer
    #[error("JSON field 't' must exist and be an unsigned integer")]
    InvalidThreshold,

    /// `v` missing or not an array
    #[error("JSON field 'v' must exist and be an array")]
    InvalidValidators,

    /// Entry of `v` is neither a key string nor an inner quorum set object
    #[error("Each entry in 'v' must be either a string (validator key) or an object (inner quorum set), got {found}")]
    InvalidEntry { found: String },

    /// Validator string failed key decoding
    #[error("Invalid validator key in 'v' array: {key}: {source}")]
    InvalidValidatorKey {
        key: String,
        #[source]
        source: KeyError,
    },

    /// Name resolver produced an empty string
    #[error("Failed to convert validator to string: empty validator key generated")]
    EmptyValidatorName,

    /// A validator is listed more than once in the tree
    #[error("Quorum set lists validator {node} more than once")]
    RepeatedValidator { node: String },

    /// Malformed JSON text
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Canonical binary encoding failed
    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Result type for quorum core operations
pub type QuorumResult<T> = Result<T, QuorumError>;
