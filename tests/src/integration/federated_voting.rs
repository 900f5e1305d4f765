//! # Federated Voting Flows
//!
//! A tiered network of four organizations (three validators each, 2 of 3
//! inside an organization, 3 of 4 organizations at the top) votes on a
//! ballot. Each scenario builds the statement view one node would hold and
//! asks that node's evaluators the questions the ballot protocol asks:
//!
//! 1. **Accept by quorum**: did a quorum vote for or accept the ballot?
//! 2. **Accept by v-blocking**: did a blocking set accept it?
//! 3. **Recovery**: which live peers would block us if they went silent?

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use qc_scp_quorum::{is_v_blocking, LocalNode, QuorumSet, Sha256Driver};
    use shared_types::NodeId;

    use crate::fixtures::{
        broadcast, node, organizations, tiered_quorum_set, BallotClassifier, QuorumSetStore,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Network {
        orgs: Vec<Vec<NodeId>>,
        qset: QuorumSet,
        store: QuorumSetStore,
    }

    impl Network {
        fn new() -> Self {
            let orgs = organizations(4, 3);
            let qset = tiered_quorum_set(&orgs);
            let store = QuorumSetStore::new();
            store.insert(qset.clone());
            Self { orgs, qset, store }
        }

        fn local(&self, id: NodeId) -> LocalNode {
            LocalNode::new(id, true, self.qset.clone(), Arc::new(Sha256Driver::new())).unwrap()
        }

        fn hash(&self) -> [u8; 32] {
            self.store.insert(self.qset.clone())
        }

        fn members(&self, orgs: &[usize]) -> Vec<NodeId> {
            orgs.iter()
                .flat_map(|org| self.orgs[*org].iter().copied())
                .collect()
        }

        fn accepted(&self) -> BallotClassifier<'_> {
            BallotClassifier {
                store: &self.store,
                min_counter: 1,
                require_accepted: true,
            }
        }
    }

    // =============================================================================
    // ACCEPT BY QUORUM
    // =============================================================================

    #[test]
    fn test_local_node_hash_matches_network_hash() {
        let net = Network::new();
        let local = net.local(node(0));
        assert_eq!(local.quorum_set(), net.qset);
        assert_eq!(local.quorum_set_hash(), net.hash());
    }

    #[test]
    fn test_whole_network_is_a_quorum() {
        let net = Network::new();
        let view = broadcast(&net.members(&[0, 1, 2, 3]), 1, true, net.hash());

        for id in net.members(&[0, 1, 2, 3]) {
            assert!(net.local(id).is_quorum_classified(&view, &net.accepted()));
        }
    }

    #[test]
    fn test_quorum_survives_one_silent_organization() {
        let net = Network::new();
        let local = net.local(node(0));

        let view = broadcast(&net.members(&[0, 1, 2]), 1, true, net.hash());
        assert!(local.is_quorum_classified(&view, &net.accepted()));

        // One more node lost in org 2 leaves it at its 2 of 3 threshold
        let mut view = view;
        view.remove(&node(8));
        assert!(local.is_quorum_classified(&view, &net.accepted()));

        // A second loss breaks org 2 and with it the top threshold
        view.remove(&node(7));
        assert!(!local.is_quorum_classified(&view, &net.accepted()));
    }

    #[test]
    fn test_only_envelopes_past_the_counter_count() {
        let net = Network::new();
        let local = net.local(node(0));

        let mut view = broadcast(&net.members(&[0, 1, 2]), 2, true, net.hash());
        view.extend(broadcast(&net.members(&[3]), 1, true, net.hash()));

        let at_two = BallotClassifier {
            store: &net.store,
            min_counter: 2,
            require_accepted: true,
        };
        assert!(local.is_quorum_classified(&view, &at_two));

        let at_three = BallotClassifier {
            min_counter: 3,
            ..at_two
        };
        assert!(!local.is_quorum_classified(&view, &at_three));
    }

    #[test]
    fn test_unknown_quorum_sets_do_not_count() {
        let net = Network::new();
        let local = net.local(node(0));

        let mut view = broadcast(&net.members(&[0, 3]), 1, true, net.hash());
        view.extend(broadcast(&net.members(&[1, 2]), 1, true, [0xee; 32]));

        // Orgs 1 and 2 cannot be resolved, so orgs 0 and 3 cannot reach 3 of 4
        assert!(!local.is_quorum_classified(&view, &net.accepted()));
    }

    #[test]
    fn test_misconfigured_member_is_dropped_from_quorum() {
        let net = Network::new();
        let local = net.local(node(0));
        let lonely = net.store.insert(QuorumSet::singleton(node(999)));

        let mut view = broadcast(&net.members(&[0, 1, 2, 3]), 1, true, net.hash());
        view.extend(broadcast(&[node(5)], 1, true, lonely));

        let closure = qc_scp_quorum::quorum_closure(
            &view,
            |envelope| net.store.get(&envelope.quorum_set_hash),
            |envelope| envelope.accepted,
        );
        assert_eq!(closure.len(), 11);
        assert!(!closure.contains(&node(5)));
        assert!(local.is_quorum_classified(&view, &net.accepted()));
    }

    // =============================================================================
    // ACCEPT BY V-BLOCKING
    // =============================================================================

    #[test]
    fn test_two_blocked_organizations_are_v_blocking() {
        let net = Network::new();
        let local = net.local(node(0));

        let mut view = broadcast(&net.members(&[0, 1, 2, 3]), 1, false, net.hash());
        for id in [node(3), node(4), node(6), node(7)] {
            if let Some(envelope) = view.get_mut(&id) {
                envelope.accepted = true;
            }
        }
        assert!(local.is_v_blocking_classified(&view, &net.accepted()));

        // Org 2 back to a single acceptor: only org 1 is blocked
        if let Some(envelope) = view.get_mut(&node(7)) {
            envelope.accepted = false;
        }
        assert!(!local.is_v_blocking_classified(&view, &net.accepted()));
    }

    #[test]
    fn test_v_blocking_set_needs_no_local_vote() {
        let net = Network::new();
        let local = net.local(node(0));

        let blocking: BTreeSet<_> = net.members(&[2, 3]).into_iter().collect();
        assert!(local.is_v_blocking(&blocking));
        assert!(!blocking.contains(local.node_id()));
    }

    // =============================================================================
    // RECOVERY: CLOSEST BLOCKING SET
    // =============================================================================

    #[test]
    fn test_closest_blocking_after_organization_fails() {
        let net = Network::new();
        let local = net.local(node(0));

        // Org 3 is gone and already counts as blocked; one more organization
        // finishes the job, and org 0's remaining peers come first
        let pool: BTreeSet<_> = net.members(&[0, 1, 2]).into_iter().collect();
        let closest = local.find_closest_v_blocking(&pool);
        assert_eq!(closest, vec![node(1), node(2)]);

        let mut blocked: BTreeSet<_> = closest.into_iter().collect();
        blocked.extend(net.members(&[3]));
        assert!(is_v_blocking(&net.qset, &blocked));
    }

    #[test]
    fn test_closest_blocking_from_statements() {
        let net = Network::new();
        let local = net.local(node(0));

        let view = broadcast(&net.members(&[0, 1, 2, 3]), 1, true, net.hash());
        let closest = local.find_closest_v_blocking_classified(&view, &net.accepted());

        assert!(!closest.contains(local.node_id()));
        assert!(is_v_blocking(&net.qset, closest.as_slice()));
    }

    #[test]
    fn test_closest_blocking_when_already_blocked() {
        let net = Network::new();
        let local = net.local(node(0));

        // Only org 0 is alive: the rest already blocks us
        let pool: BTreeSet<_> = net.members(&[0]).into_iter().collect();
        assert!(local.find_closest_v_blocking(&pool).is_empty());
    }
}
