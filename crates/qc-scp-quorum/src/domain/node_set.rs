//! Flat node collections accepted by the evaluators
//!
//! The protocol layer keeps peers in whatever collection suits it; the
//! checkers only need membership.

use shared_types::NodeId;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

/// Membership test over a flat set of node identities.
pub trait NodeSet {
    fn contains_node(&self, node_id: &NodeId) -> bool;
}

impl NodeSet for [NodeId] {
    fn contains_node(&self, node_id: &NodeId) -> bool {
        self.contains(node_id)
    }
}

impl NodeSet for Vec<NodeId> {
    fn contains_node(&self, node_id: &NodeId) -> bool {
        self.as_slice().contains(node_id)
    }
}

impl NodeSet for BTreeSet<NodeId> {
    fn contains_node(&self, node_id: &NodeId) -> bool {
        self.contains(node_id)
    }
}

impl<S: BuildHasher> NodeSet for HashSet<NodeId, S> {
    fn contains_node(&self, node_id: &NodeId) -> bool {
        self.contains(node_id)
    }
}

/// A statement view counts as the set of its senders.
impl<V> NodeSet for BTreeMap<NodeId, V> {
    fn contains_node(&self, node_id: &NodeId) -> bool {
        self.contains_key(node_id)
    }
}

impl<V, S: BuildHasher> NodeSet for HashMap<NodeId, V, S> {
    fn contains_node(&self, node_id: &NodeId) -> bool {
        self.contains_key(node_id)
    }
}

/// Senders whose statement passes `filter`, in map order.
pub(crate) fn filtered_senders<S, F>(statements: &BTreeMap<NodeId, S>, filter: F) -> Vec<NodeId>
where
    F: Fn(&S) -> bool,
{
    statements
        .iter()
        .filter(|(_, statement)| filter(statement))
        .map(|(node_id, _)| *node_id)
        .collect()
}
