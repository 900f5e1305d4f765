//! Domain module for the SCP quorum core
//!
//! ## Core Modules
//! - quorum_set: recursive threshold tree
//! - normalize: canonical form (simplify, order)
//! - slice: quorum slice check
//! - blocking: v-blocking check
//! - quorum: federated quorum closure
//! - closest: closest v-blocking set from a peer pool
//!
//! ## Supporting Modules
//! - node_set: flat node collections accepted by the checkers
//! - weight: node weight for nomination leader selection
//!
//! Every evaluator is a pure function over caller-owned snapshots.

pub mod blocking;
pub mod closest;
pub mod node_set;
pub mod normalize;
pub mod quorum;
pub mod quorum_set;
pub mod slice;
pub mod weight;

pub use blocking::{is_v_blocking, is_v_blocking_with};
pub use closest::{find_closest_v_blocking, find_closest_v_blocking_with};
pub use node_set::NodeSet;
pub use normalize::{
    compare_quorum_sets, normalize_quorum_set, normalize_quorum_set_removing, normalized,
};
pub use quorum::{is_quorum, quorum_closure};
pub use quorum_set::QuorumSet;
pub use slice::is_quorum_slice;
pub use weight::node_weight;
