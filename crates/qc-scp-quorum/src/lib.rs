//! # qc-scp-quorum
//!
//! Federated quorum evaluation for the Stellar Consensus Protocol.
//!
//! ## Overview
//!
//! Every node declares whom it trusts as a recursive threshold tree (a
//! quorum set). This crate answers the questions federated voting asks of
//! those trees:
//! - **Quorum slice**: does a node set satisfy a quorum set?
//! - **V-blocking**: does a node set intersect every slice?
//! - **Quorum**: do the senders of some statements form a quorum?
//! - **Closest v-blocking**: which peers would block us if they failed?
//!
//! It also owns the canonical form, hash and JSON document of a quorum set,
//! and the local node's own trust configuration.
//!
//! ## Architecture
//!
//! ```text
//! Ballot / Nomination protocol
//!         │
//!         ├── statements + filter ──→ domain (pure evaluators)
//!         │                               │
//!         │                               └── QuorumSet (normalized tree)
//!         │
//!         └── LocalNode ──→ QuorumDriver (hash, node names)
//!                 │
//!                 └── codec (JSON document, canonical bytes)
//! ```
//!
//! ## Concurrency
//!
//! Evaluators borrow caller-owned snapshots and hold no state. `LocalNode`
//! swaps its quorum set, hash and singleton set as one snapshot behind a
//! `parking_lot::RwLock`, so readers never see a mixed triple.
//!
//! ## Example
//!
//! ```rust,ignore
//! use qc_scp_quorum::{LocalNode, QuorumSet, Sha256Driver};
//! use std::sync::Arc;
//!
//! let qset = QuorumSet::flat(2, vec![a, b, c]);
//! let local = LocalNode::new(a, true, qset, Arc::new(Sha256Driver::new()))?;
//!
//! if local.is_v_blocking(&accepted_senders) {
//!     // accept the statement ourselves
//! }
//! ```

pub mod adapters;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod local_node;
pub mod metrics;
pub mod ports;

pub use adapters::Sha256Driver;
pub use codec::{
    canonical_bytes, from_json, from_json_str, quorum_set_hash, to_compact_string, to_json,
    to_json_full,
};
pub use config::{ConfigError, LocalNodeConfig};
pub use domain::{
    compare_quorum_sets, find_closest_v_blocking, find_closest_v_blocking_with, is_quorum,
    is_quorum_slice, is_v_blocking, is_v_blocking_with, node_weight, normalize_quorum_set,
    normalize_quorum_set_removing, normalized, quorum_closure, NodeSet, QuorumSet,
};
pub use error::{QuorumError, QuorumResult};
pub use local_node::{LocalNode, QuorumSetSnapshot};
pub use ports::{QuorumDriver, StatementClassifier};
pub use shared_types::{Hash, NodeId};
