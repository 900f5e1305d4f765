//! Default Quorum Driver Adapter
//!
//! Implements the `QuorumDriver` port with SHA-256 hashing and hex node keys.

use crate::ports::outbound::QuorumDriver;
use sha2::{Digest, Sha256};
use shared_types::{Hash, NodeId};

/// SHA-256 driver with hex keys, optionally mapping known nodes to aliases.
#[derive(Clone, Debug, Default)]
pub struct Sha256Driver {
    aliases: Vec<(NodeId, String)>,
}

impl Sha256Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `alias` instead of the abbreviated key for `node_id` in short names.
    pub fn with_alias(mut self, node_id: NodeId, alias: impl Into<String>) -> Self {
        self.aliases.push((node_id, alias.into()));
        self
    }
}

impl QuorumDriver for Sha256Driver {
    fn hash_of(&self, chunks: &[&[u8]]) -> Hash {
        let mut hasher = Sha256::new();
        for chunk in chunks {
            hasher.update(chunk);
        }
        hasher.finalize().into()
    }

    fn to_short_string(&self, node_id: &NodeId) -> String {
        self.aliases
            .iter()
            .find(|(id, _)| id == node_id)
            .map(|(_, alias)| alias.clone())
            .unwrap_or_else(|| node_id.to_short_string())
    }
}
