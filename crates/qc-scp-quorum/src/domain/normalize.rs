//! Quorum set normalization
//!
//! Structurally equal quorum sets must encode, and therefore hash, the same
//! way. Normalization runs two passes:
//!
//! 1. **Simplify**: optionally drop one node (lowering thresholds to match),
//!    lift `{1 of X}` inner sets into their parent's validators, and
//!    collapse a `{1 of {inner}}` wrapper into the inner set.
//! 2. **Reorder**: sort validators, then sort inner sets by
//!    (validators, inner sets, threshold).
//!
//! Both passes keep every child's vote, so slice and v-blocking results are
//! unchanged even for trees that repeat a validator. Repeats are never merged
//! here; [`LocalNode`](crate::LocalNode) refuses such trees instead.

use super::quorum_set::QuorumSet;
use shared_types::NodeId;
use std::cmp::Ordering;

/// Normalize `qset` in place.
pub fn normalize_quorum_set(qset: &mut QuorumSet) {
    normalize_quorum_set_removing(qset, None);
}

/// Normalize `qset` in place after removing `id_to_remove` from every level.
///
/// Each removed occurrence lowers that level's threshold by one (saturating).
pub fn normalize_quorum_set_removing(qset: &mut QuorumSet, id_to_remove: Option<&NodeId>) {
    simplify(qset, id_to_remove);
    reorder(qset);
}

/// Normalized copy of `qset`.
pub fn normalized(qset: &QuorumSet) -> QuorumSet {
    let mut copy = qset.clone();
    normalize_quorum_set(&mut copy);
    copy
}

fn simplify(qset: &mut QuorumSet, id_to_remove: Option<&NodeId>) {
    if let Some(id) = id_to_remove {
        let before = qset.validators.len();
        qset.validators.retain(|v| v != id);
        let removed = (before - qset.validators.len()) as u32;
        qset.threshold = qset.threshold.saturating_sub(removed);
    }

    let inner_sets = std::mem::take(&mut qset.inner_sets);
    for mut inner in inner_sets {
        simplify(&mut inner, id_to_remove);
        if inner.threshold == 1 && inner.validators.len() == 1 && inner.inner_sets.is_empty() {
            qset.validators.push(inner.validators[0]);
        } else {
            qset.inner_sets.push(inner);
        }
    }

    if qset.threshold == 1 && qset.validators.is_empty() && qset.inner_sets.len() == 1 {
        if let Some(only) = qset.inner_sets.pop() {
            *qset = only;
        }
    }
}

fn reorder(qset: &mut QuorumSet) {
    qset.validators.sort();
    for inner in &mut qset.inner_sets {
        reorder(inner);
    }
    qset.inner_sets.sort_by(compare_quorum_sets);
}

/// Total order used to sort normalized inner sets.
pub fn compare_quorum_sets(left: &QuorumSet, right: &QuorumSet) -> Ordering {
    left.validators
        .cmp(&right.validators)
        .then_with(|| {
            left.inner_sets
                .iter()
                .zip(&right.inner_sets)
                .map(|(l, r)| compare_quorum_sets(l, r))
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| left.inner_sets.len().cmp(&right.inner_sets.len()))
        })
        .then_with(|| left.threshold.cmp(&right.threshold))
}
