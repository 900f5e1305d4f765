//! Quorum set entity
//!
//! A quorum set is an owned, acyclic threshold tree: `threshold` of the
//! direct children (validators plus inner sets) must be satisfied.
//!
//! Structural soundness (`threshold <= validators.len() + inner_sets.len()`,
//! nesting depth, branching factor) is checked by the admission layer before
//! a quorum set reaches this crate.

use serde::{Deserialize, Serialize};
use shared_types::NodeId;
use std::collections::BTreeSet;

/// Recursive threshold structure over node identities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuorumSet {
    pub threshold: u32,
    pub validators: Vec<NodeId>,
    pub inner_sets: Vec<QuorumSet>,
}

impl QuorumSet {
    pub fn new(threshold: u32, validators: Vec<NodeId>, inner_sets: Vec<QuorumSet>) -> Self {
        Self {
            threshold,
            validators,
            inner_sets,
        }
    }

    /// Quorum set with only direct validators.
    pub fn flat(threshold: u32, validators: Vec<NodeId>) -> Self {
        Self::new(threshold, validators, Vec::new())
    }

    /// "Trust only this node": threshold 1 over a single validator.
    pub fn singleton(node_id: NodeId) -> Self {
        Self::flat(1, vec![node_id])
    }

    /// Number of direct children (validators plus inner sets).
    pub fn child_count(&self) -> usize {
        self.validators.len() + self.inner_sets.len()
    }

    /// Visit every validator depth-first (direct validators before inner
    /// sets), stopping as soon as `visit` returns false.
    ///
    /// Returns false if the walk was stopped early.
    pub fn for_all_nodes<F>(&self, visit: &mut F) -> bool
    where
        F: FnMut(&NodeId) -> bool,
    {
        for validator in &self.validators {
            if !visit(validator) {
                return false;
            }
        }
        for inner in &self.inner_sets {
            if !inner.for_all_nodes(visit) {
                return false;
            }
        }
        true
    }

    /// All validators referenced anywhere in the tree, in walk order.
    /// Duplicates are kept.
    pub fn all_nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        self.for_all_nodes(&mut |node| {
            nodes.push(*node);
            true
        });
        nodes
    }

    /// Whether `node_id` appears anywhere in the tree.
    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        !self.for_all_nodes(&mut |node| node != node_id)
    }

    /// First validator met twice in a depth-first walk, if any.
    pub fn first_repeated_node(&self) -> Option<NodeId> {
        let mut seen = BTreeSet::new();
        let mut repeated = None;
        self.for_all_nodes(&mut |node| {
            if seen.insert(*node) {
                true
            } else {
                repeated = Some(*node);
                false
            }
        });
        repeated
    }

    /// Depth of the tree (a flat quorum set has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .inner_sets
            .iter()
            .map(QuorumSet::depth)
            .max()
            .unwrap_or(0)
    }
}
