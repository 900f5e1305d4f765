//! Federated quorum computation
//!
//! A quorum is a set of nodes in which every member's own quorum set is
//! satisfied by the set itself. Starting from the nodes whose statements
//! pass the filter, members whose advertised quorum set is not a slice of
//! the current candidates are dropped until a pass removes nobody; the asker
//! then checks its own quorum set against that fixed point.

use super::node_set::filtered_senders;
use super::quorum_set::QuorumSet;
use super::slice::is_quorum_slice_internal;
use crate::metrics;
use shared_types::NodeId;
use std::collections::BTreeMap;
use tracing::trace;

/// Whether the senders passing `filter` contain a quorum satisfying `qset`.
///
/// `quorum_set_of` extracts the quorum set a statement advertises; a sender
/// whose quorum set is unknown never belongs to the quorum.
pub fn is_quorum<St, Q, F>(
    qset: &QuorumSet,
    statements: &BTreeMap<NodeId, St>,
    quorum_set_of: Q,
    filter: F,
) -> bool
where
    Q: Fn(&St) -> Option<QuorumSet>,
    F: Fn(&St) -> bool,
{
    metrics::record_evaluation("quorum");
    let members = quorum_closure(statements, quorum_set_of, filter);
    is_quorum_slice_internal(qset, members.as_slice())
}

/// Largest subset of the senders passing `filter` in which every member's
/// advertised quorum set is a slice of the subset.
///
/// Each pass evaluates members against the candidates as they stood at the
/// start of the pass, so the closure shrinks monotonically. Every pass but
/// the last removes someone, so at most `|candidates| + 1` passes run.
pub fn quorum_closure<St, Q, F>(
    statements: &BTreeMap<NodeId, St>,
    quorum_set_of: Q,
    filter: F,
) -> Vec<NodeId>
where
    Q: Fn(&St) -> Option<QuorumSet>,
    F: Fn(&St) -> bool,
{
    let (members, passes) = closure_with_passes(statements, quorum_set_of, filter);

    trace!(
        "[qc-scp] Quorum closure settled on {} nodes after {} passes",
        members.len(),
        passes
    );
    metrics::record_closure_passes(passes);
    members
}

/// Fixed point of the closure and the number of passes it took, the last
/// one removing nobody.
pub(crate) fn closure_with_passes<St, Q, F>(
    statements: &BTreeMap<NodeId, St>,
    quorum_set_of: Q,
    filter: F,
) -> (Vec<NodeId>, u64)
where
    Q: Fn(&St) -> Option<QuorumSet>,
    F: Fn(&St) -> bool,
{
    let mut candidates = filtered_senders(statements, filter);
    let mut passes: u64 = 0;

    loop {
        passes += 1;
        let count = candidates.len();
        let survivors: Vec<NodeId> = candidates
            .iter()
            .filter(|node_id| {
                statements
                    .get(*node_id)
                    .and_then(&quorum_set_of)
                    .is_some_and(|member_qset| {
                        is_quorum_slice_internal(&member_qset, candidates.as_slice())
                    })
            })
            .copied()
            .collect();
        candidates = survivors;

        if candidates.len() == count {
            break;
        }
    }

    (candidates, passes)
}
