//! Closest v-blocking set
//!
//! Answers "which peers from this pool, if they failed together, would block
//! the quorum set". The construction is greedy and bottom-up: validators
//! missing from the pool already count as blocked, then the cheapest children
//! are picked until enough are blocked. The result is small but not
//! guaranteed to be globally minimal.
//!
//! An empty result covers two cases that are not told apart: the quorum set
//! is already blocked without any pool member, or it cannot be blocked using
//! only the pool.

use super::node_set::filtered_senders;
use super::quorum_set::QuorumSet;
use crate::metrics;
use shared_types::NodeId;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Smallest-effort v-blocking set for `qset` drawn from `pool`.
///
/// `excluded` (typically the local node) is never picked and never counted
/// as blocked.
pub fn find_closest_v_blocking(
    qset: &QuorumSet,
    pool: &BTreeSet<NodeId>,
    excluded: Option<&NodeId>,
) -> Vec<NodeId> {
    metrics::record_evaluation("closest");
    let result = find_closest_v_blocking_internal(qset, pool, excluded);
    debug!(
        "[qc-scp] Closest v-blocking set has {} nodes (pool of {})",
        result.len(),
        pool.len()
    );
    metrics::set_closest_blocking_size(result.len());
    result
}

/// Closest v-blocking set drawn from the senders whose statements pass
/// `filter`.
pub fn find_closest_v_blocking_with<St, F>(
    qset: &QuorumSet,
    statements: &BTreeMap<NodeId, St>,
    filter: F,
    excluded: Option<&NodeId>,
) -> Vec<NodeId>
where
    F: Fn(&St) -> bool,
{
    let pool: BTreeSet<NodeId> = filtered_senders(statements, filter).into_iter().collect();
    find_closest_v_blocking(qset, &pool, excluded)
}

fn find_closest_v_blocking_internal(
    qset: &QuorumSet,
    pool: &BTreeSet<NodeId>,
    excluded: Option<&NodeId>,
) -> Vec<NodeId> {
    let children = 1 + qset.validators.len() + qset.inner_sets.len();
    let mut left_till_block = match children.checked_sub(qset.threshold as usize) {
        Some(left) if left > 0 => left,
        // Threshold above the child count: nothing can ever satisfy it
        _ => return Vec::new(),
    };

    let mut res: Vec<NodeId> = Vec::new();

    for validator in &qset.validators {
        if excluded == Some(validator) {
            continue;
        }
        if pool.contains(validator) {
            res.push(*validator);
        } else {
            left_till_block -= 1;
            if left_till_block == 0 {
                return Vec::new();
            }
        }
    }

    let mut inner_candidates: Vec<Vec<NodeId>> = Vec::new();
    for inner in &qset.inner_sets {
        let candidate = find_closest_v_blocking_internal(inner, pool, excluded);
        if candidate.is_empty() {
            left_till_block -= 1;
            if left_till_block == 0 {
                return Vec::new();
            }
        } else {
            inner_candidates.push(candidate);
        }
    }
    // Stable: equal sizes keep insertion order
    inner_candidates.sort_by_key(Vec::len);

    res.truncate(left_till_block);
    left_till_block -= res.len();

    for candidate in inner_candidates {
        if left_till_block == 0 {
            break;
        }
        res.extend(candidate);
        left_till_block -= 1;
    }

    res
}
