//! Node weight inside a quorum set
//!
//! The weight is the fraction of slices of `qset` containing a node, scaled
//! to `u64::MAX`. Nomination uses it to pick round leaders. Only the first
//! occurrence of a repeated validator counts.

use super::quorum_set::QuorumSet;
use shared_types::NodeId;

/// Weight of `node_id` in `qset`; the local node is in every slice.
pub fn node_weight(node_id: &NodeId, qset: &QuorumSet, is_local_node: bool) -> u64 {
    if is_local_node {
        return u64::MAX;
    }

    let threshold = u64::from(qset.threshold);
    let total = qset.child_count() as u64;

    if qset.validators.iter().any(|v| v == node_id) {
        return scale_weight(u64::MAX, total, threshold);
    }

    for inner in &qset.inner_sets {
        let leaf_weight = node_weight(node_id, inner, false);
        if leaf_weight > 0 {
            return scale_weight(leaf_weight, total, threshold);
        }
    }

    0
}

/// `ceil(m * threshold / total)`, clamped to `m` when the threshold exceeds
/// the child count.
fn scale_weight(m: u64, total: u64, threshold: u64) -> u64 {
    if total == 0 || threshold >= total {
        return m;
    }
    let numerator = u128::from(m) * u128::from(threshold);
    let scaled = numerator.div_ceil(u128::from(total));
    // threshold < total keeps the result below m
    scaled as u64
}
