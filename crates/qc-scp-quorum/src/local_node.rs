//! Local node
//!
//! Owns this node's identity, validator flag and current quorum set. The
//! quorum set, its hash and the singleton quorum set form one snapshot that
//! is rebuilt off-lock and swapped in as a unit, so readers always see a
//! consistent triple.
//!
//! A quorum set that lists the same validator twice is refused; the previous
//! snapshot stays in place.

use crate::codec::{self, canonical_bytes};
use crate::domain::{
    find_closest_v_blocking, find_closest_v_blocking_with, is_quorum, is_v_blocking,
    is_v_blocking_with, normalize_quorum_set, NodeSet, QuorumSet,
};
use crate::error::{QuorumError, QuorumResult};
use crate::metrics;
use crate::ports::outbound::{QuorumDriver, StatementClassifier};
use parking_lot::RwLock;
use serde_json::Value;
use shared_types::{hex_abbrev, Hash, NodeId};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{info, warn};

/// Immutable view of the local quorum configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuorumSetSnapshot {
    /// Normalized quorum set
    pub quorum_set: QuorumSet,
    /// Hash of the canonical encoding of `quorum_set`
    pub quorum_set_hash: Hash,
    /// `{1 of self}`
    pub singleton_quorum_set: Arc<QuorumSet>,
    /// Hash of the canonical encoding of `singleton_quorum_set`
    pub singleton_quorum_set_hash: Hash,
}

/// This node's identity and trust configuration.
pub struct LocalNode {
    node_id: NodeId,
    is_validator: bool,
    driver: Arc<dyn QuorumDriver>,
    current: RwLock<Arc<QuorumSetSnapshot>>,
}

impl LocalNode {
    /// Create the local node; `qset` is normalized before hashing.
    ///
    /// Fails with [`QuorumError::RepeatedValidator`] if any validator
    /// appears more than once in `qset`.
    pub fn new(
        node_id: NodeId,
        is_validator: bool,
        qset: QuorumSet,
        driver: Arc<dyn QuorumDriver>,
    ) -> QuorumResult<Self> {
        let snapshot = build_snapshot(&node_id, qset, driver.as_ref())?;

        info!(
            "[qc-scp] LocalNode@{} qSet: {}",
            driver.to_short_string(&node_id),
            hex_abbrev(&snapshot.quorum_set_hash)
        );

        Ok(Self {
            node_id,
            is_validator,
            driver,
            current: RwLock::new(Arc::new(snapshot)),
        })
    }

    /// `{1 of node_id}`.
    pub fn build_singleton_quorum_set(node_id: &NodeId) -> QuorumSet {
        QuorumSet::singleton(*node_id)
    }

    /// Shared singleton quorum set for any node.
    pub fn singleton_quorum_set_for(node_id: &NodeId) -> Arc<QuorumSet> {
        Arc::new(Self::build_singleton_quorum_set(node_id))
    }

    /// Replace the quorum set wholesale.
    pub fn update_quorum_set(&self, qset: QuorumSet) -> QuorumResult<()> {
        let snapshot = build_snapshot(&self.node_id, qset, self.driver.as_ref())?;

        info!(
            "[qc-scp] LocalNode@{} updated qSet: {}",
            self.driver.to_short_string(&self.node_id),
            hex_abbrev(&snapshot.quorum_set_hash)
        );

        *self.current.write() = Arc::new(snapshot);
        metrics::record_quorum_set_update();
        Ok(())
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn is_validator(&self) -> bool {
        self.is_validator
    }

    /// Current snapshot; stays valid while a newer one is swapped in.
    pub fn snapshot(&self) -> Arc<QuorumSetSnapshot> {
        Arc::clone(&self.current.read())
    }

    pub fn quorum_set(&self) -> QuorumSet {
        self.snapshot().quorum_set.clone()
    }

    pub fn quorum_set_hash(&self) -> Hash {
        self.snapshot().quorum_set_hash
    }

    pub fn singleton_quorum_set(&self) -> Arc<QuorumSet> {
        Arc::clone(&self.snapshot().singleton_quorum_set)
    }

    pub fn singleton_quorum_set_hash(&self) -> Hash {
        self.snapshot().singleton_quorum_set_hash
    }

    /// JSON document for `qset`, naming nodes through the driver.
    pub fn to_json(&self, qset: &QuorumSet, full_keys: bool) -> QuorumResult<Value> {
        codec::to_json(qset, &|node_id: &NodeId| {
            self.driver.to_str_key(node_id, full_keys)
        })
    }

    /// Compact one-line document with short names.
    pub fn quorum_set_to_string(&self, qset: &QuorumSet) -> QuorumResult<String> {
        Ok(serde_json::to_string(&self.to_json(qset, false)?)?)
    }

    /// Whether `nodes` blocks the local quorum set.
    pub fn is_v_blocking<S>(&self, nodes: &S) -> bool
    where
        S: NodeSet + ?Sized,
    {
        is_v_blocking(&self.snapshot().quorum_set, nodes)
    }

    /// Whether the statements passing `filter` contain a quorum for the
    /// local quorum set.
    pub fn is_quorum<St, Q, F>(
        &self,
        statements: &BTreeMap<NodeId, St>,
        quorum_set_of: Q,
        filter: F,
    ) -> bool
    where
        Q: Fn(&St) -> Option<QuorumSet>,
        F: Fn(&St) -> bool,
    {
        is_quorum(&self.snapshot().quorum_set, statements, quorum_set_of, filter)
    }

    /// Peers from `pool` whose joint failure would block this node without
    /// its own cooperation.
    pub fn find_closest_v_blocking(&self, pool: &BTreeSet<NodeId>) -> Vec<NodeId> {
        find_closest_v_blocking(&self.snapshot().quorum_set, pool, Some(&self.node_id))
    }

    /// `is_v_blocking` over the senders `classifier` accepts.
    pub fn is_v_blocking_classified<St, C>(
        &self,
        statements: &BTreeMap<NodeId, St>,
        classifier: &C,
    ) -> bool
    where
        C: StatementClassifier<St> + ?Sized,
    {
        is_v_blocking_with(&self.snapshot().quorum_set, statements, |st| {
            classifier.accepts(st)
        })
    }

    /// `is_quorum` with both accessors taken from `classifier`.
    pub fn is_quorum_classified<St, C>(
        &self,
        statements: &BTreeMap<NodeId, St>,
        classifier: &C,
    ) -> bool
    where
        C: StatementClassifier<St> + ?Sized,
    {
        self.is_quorum(
            statements,
            |st| classifier.quorum_set_of(st),
            |st| classifier.accepts(st),
        )
    }

    /// Closest v-blocking set among the senders `classifier` accepts,
    /// never including this node.
    pub fn find_closest_v_blocking_classified<St, C>(
        &self,
        statements: &BTreeMap<NodeId, St>,
        classifier: &C,
    ) -> Vec<NodeId>
    where
        C: StatementClassifier<St> + ?Sized,
    {
        find_closest_v_blocking_with(
            &self.snapshot().quorum_set,
            statements,
            |st| classifier.accepts(st),
            Some(&self.node_id),
        )
    }
}

impl std::fmt::Debug for LocalNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalNode")
            .field("node_id", &self.node_id)
            .field("is_validator", &self.is_validator)
            .field("quorum_set_hash", &hex_abbrev(&self.quorum_set_hash()))
            .finish()
    }
}

fn build_snapshot(
    node_id: &NodeId,
    mut qset: QuorumSet,
    driver: &dyn QuorumDriver,
) -> QuorumResult<QuorumSetSnapshot> {
    if let Some(repeated) = qset.first_repeated_node() {
        warn!(
            "[qc-scp] Rejecting qSet for {}: validator {} listed twice",
            driver.to_short_string(node_id),
            driver.to_short_string(&repeated)
        );
        return Err(QuorumError::RepeatedValidator {
            node: driver.to_str_key(&repeated, true),
        });
    }

    normalize_quorum_set(&mut qset);
    let quorum_set_hash = driver.hash_of(&[canonical_bytes(&qset)?.as_slice()]);

    let singleton = LocalNode::build_singleton_quorum_set(node_id);
    let singleton_quorum_set_hash = driver.hash_of(&[canonical_bytes(&singleton)?.as_slice()]);

    Ok(QuorumSetSnapshot {
        quorum_set: qset,
        quorum_set_hash,
        singleton_quorum_set: Arc::new(singleton),
        singleton_quorum_set_hash,
    })
}
