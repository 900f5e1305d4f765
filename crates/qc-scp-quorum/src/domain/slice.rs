//! Quorum slice check
//!
//! A flat node set is a quorum slice for a quorum set when at least
//! `threshold` of the direct children are satisfied: a validator is satisfied
//! by membership, an inner set by recursively being a slice.

use super::node_set::NodeSet;
use super::quorum_set::QuorumSet;
use crate::metrics;

/// Whether `nodes` satisfies the threshold tree `qset`.
///
/// Validators are tested before inner sets and evaluation stops as soon as
/// the threshold is met.
pub fn is_quorum_slice<S>(qset: &QuorumSet, nodes: &S) -> bool
where
    S: NodeSet + ?Sized,
{
    metrics::record_evaluation("slice");
    is_quorum_slice_internal(qset, nodes)
}

pub(crate) fn is_quorum_slice_internal<S>(qset: &QuorumSet, nodes: &S) -> bool
where
    S: NodeSet + ?Sized,
{
    // A zero threshold wraps on the first decrement and can never come back
    // to zero, so an empty requirement is never reported as satisfied.
    let mut threshold_left = qset.threshold;

    for validator in &qset.validators {
        if nodes.contains_node(validator) {
            threshold_left = threshold_left.wrapping_sub(1);
            if threshold_left == 0 {
                return true;
            }
        }
    }

    for inner in &qset.inner_sets {
        if is_quorum_slice_internal(inner, nodes) {
            threshold_left = threshold_left.wrapping_sub(1);
            if threshold_left == 0 {
                return true;
            }
        }
    }

    false
}
