//! Driven Ports (SPI - Outbound Dependencies)
//!
//! The quorum core never hashes, names nodes or reads statements on its own;
//! the protocol layer plugs those in here.

use crate::domain::QuorumSet;
use shared_types::{Hash, NodeId};

/// Hashing and node naming supplied by the consensus driver.
pub trait QuorumDriver: Send + Sync {
    /// Hash the concatenation of `chunks`.
    fn hash_of(&self, chunks: &[&[u8]]) -> Hash;

    /// Short, human-friendly node name for logs.
    fn to_short_string(&self, node_id: &NodeId) -> String;

    /// Full decodable key, or the short name when `full_key` is false.
    fn to_str_key(&self, node_id: &NodeId, full_key: bool) -> String {
        if full_key {
            node_id.to_str_key()
        } else {
            self.to_short_string(node_id)
        }
    }
}

/// Statement accessors the protocol layer hands to quorum evaluation.
///
/// Implement this when a single type already knows how to classify
/// statements; plain closures work through the `*_with` functions.
pub trait StatementClassifier<St> {
    /// Whether the statement counts for the question being asked.
    fn accepts(&self, statement: &St) -> bool;

    /// Quorum set advertised by the statement, if known.
    fn quorum_set_of(&self, statement: &St) -> Option<QuorumSet>;
}
