//! # Core Domain Entities
//!
//! Identity and digest types shared by the quorum evaluation core and its
//! tooling.
//!
//! ## Key Encoding
//!
//! | Form | Example | Decodable |
//! |------|---------|-----------|
//! | Full key | 64 lowercase hex chars | yes |
//! | Short key | first 8 hex chars | no (display only) |

use crate::errors::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 32-byte hash (SHA-256 of canonical encodings).
pub type Hash = [u8; 32];

/// Length of a node public identity in bytes.
pub const NODE_ID_LEN: usize = 32;

/// Number of hex characters kept by the short key form.
pub const SHORT_KEY_LEN: usize = 8;

/// Opaque public identity of a consensus node.
///
/// Equality, ordering and set membership are byte-exact.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct NodeId(pub [u8; NODE_ID_LEN]);

impl NodeId {
    pub fn new(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; NODE_ID_LEN] {
        &self.0
    }

    /// Full, decodable string key.
    pub fn to_str_key(&self) -> String {
        hex::encode(self.0)
    }

    /// Abbreviated key for logs and diagnostics.
    pub fn to_short_string(&self) -> String {
        let mut key = self.to_str_key();
        key.truncate(SHORT_KEY_LEN);
        key
    }

    /// Decode a full string key.
    pub fn from_str_key(key: &str) -> Result<Self, KeyError> {
        if key.len() != NODE_ID_LEN * 2 {
            return Err(KeyError::InvalidLength {
                expected: NODE_ID_LEN * 2,
                actual: key.len(),
            });
        }
        let mut bytes = [0u8; NODE_ID_LEN];
        hex::decode_to_slice(key, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl From<[u8; NODE_ID_LEN]> for NodeId {
    fn from(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for NodeId {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_key(s)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_key())
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.to_short_string())
    }
}

/// Abbreviated hex rendering of a hash (first 3 bytes), for logs.
pub fn hex_abbrev(hash: &Hash) -> String {
    hex::encode(&hash[..3])
}
