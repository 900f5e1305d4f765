//! # Local Node Configuration
//!
//! Loaded once at startup from a JSON file, with environment overrides.
//!
//! ```json
//! {
//!   "node_id": "<64 hex chars>",
//!   "is_validator": true,
//!   "quorum_set": { "t": 2, "v": ["<key>", "<key>", { "t": 1, "v": ["<key>"] }] }
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `QC_NODE_ID` | `node_id` |
//! | `QC_IS_VALIDATOR` | `is_validator` (`true`/`1` or `false`/`0`) |

use crate::codec;
use crate::domain::QuorumSet;
use crate::error::QuorumError;
use crate::local_node::LocalNode;
use crate::ports::outbound::QuorumDriver;
use serde::Deserialize;
use serde_json::Value;
use shared_types::{KeyError, NodeId};
use std::env;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config document is not valid JSON for this schema.
    #[error("Invalid config document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Node identity is not a valid key.
    #[error("Invalid node_id: {0}")]
    InvalidNodeId(#[from] KeyError),

    /// Environment override has an unusable value.
    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },

    /// Quorum set document was rejected.
    #[error("Invalid quorum_set: {0}")]
    InvalidQuorumSet(#[from] QuorumError),
}

/// Startup configuration of the local node.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalNodeConfig {
    /// Full key of this node
    pub node_id: String,
    /// Whether this node votes (watchers only observe)
    #[serde(default = "default_is_validator")]
    pub is_validator: bool,
    /// `{t, v}` quorum set document
    pub quorum_set: Value,
}

fn default_is_validator() -> bool {
    true
}

impl LocalNodeConfig {
    /// Parse a config document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a config file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::from_json_str(&text)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `QC_NODE_ID` / `QC_IS_VALIDATOR` overrides.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(node_id) = env::var("QC_NODE_ID") {
            self.node_id = node_id;
        }
        if let Ok(value) = env::var("QC_IS_VALIDATOR") {
            self.is_validator = parse_flag(&value).ok_or(ConfigError::InvalidEnv {
                var: "QC_IS_VALIDATOR",
                value,
            })?;
        }
        Ok(())
    }

    /// Decoded node identity.
    pub fn node_id(&self) -> Result<NodeId, ConfigError> {
        Ok(NodeId::from_str_key(&self.node_id)?)
    }

    /// Decoded quorum set (not yet normalized).
    pub fn quorum_set(&self) -> Result<QuorumSet, ConfigError> {
        Ok(codec::from_json(&self.quorum_set)?)
    }

    /// Build the local node described by this config.
    pub fn into_local_node(self, driver: Arc<dyn QuorumDriver>) -> Result<LocalNode, ConfigError> {
        let node_id = self.node_id()?;
        let qset = self.quorum_set()?;
        Ok(LocalNode::new(node_id, self.is_validator, qset, driver)?)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
