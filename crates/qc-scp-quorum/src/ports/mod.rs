//! Ports for the SCP quorum core
//!
//! - Outbound: hashing/naming driver and statement classification

pub mod outbound;

pub use outbound::{QuorumDriver, StatementClassifier};
