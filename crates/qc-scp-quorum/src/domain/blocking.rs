//! V-blocking check
//!
//! A set is v-blocking for a quorum set when it intersects every slice the
//! quorum set could form: more than `children - threshold` of the direct
//! children are blocked.

use super::node_set::{filtered_senders, NodeSet};
use super::quorum_set::QuorumSet;
use crate::metrics;
use shared_types::NodeId;
use std::collections::BTreeMap;

/// Whether withholding `nodes` leaves `qset` unable to form any slice.
///
/// A zero-threshold quorum set has no v-blocking set.
pub fn is_v_blocking<S>(qset: &QuorumSet, nodes: &S) -> bool
where
    S: NodeSet + ?Sized,
{
    metrics::record_evaluation("v_blocking");
    is_v_blocking_internal(qset, nodes)
}

/// V-blocking check over the senders whose statements pass `filter`.
pub fn is_v_blocking_with<St, F>(
    qset: &QuorumSet,
    statements: &BTreeMap<NodeId, St>,
    filter: F,
) -> bool
where
    F: Fn(&St) -> bool,
{
    let senders = filtered_senders(statements, filter);
    is_v_blocking(qset, senders.as_slice())
}

/// Number of direct children that must be blocked before `qset` is blocked.
///
/// Signed so that a malformed threshold (above the child count) yields a
/// non-positive count instead of wrapping.
pub(crate) fn left_till_block(qset: &QuorumSet) -> i64 {
    1 + qset.validators.len() as i64 + qset.inner_sets.len() as i64 - i64::from(qset.threshold)
}

fn is_v_blocking_internal<S>(qset: &QuorumSet, nodes: &S) -> bool
where
    S: NodeSet + ?Sized,
{
    if qset.threshold == 0 {
        return false;
    }

    let mut left = left_till_block(qset);

    for validator in &qset.validators {
        if nodes.contains_node(validator) {
            left -= 1;
            if left <= 0 {
                return true;
            }
        }
    }

    for inner in &qset.inner_sets {
        if is_v_blocking_internal(inner, nodes) {
            left -= 1;
            if left <= 0 {
                return true;
            }
        }
    }

    false
}
