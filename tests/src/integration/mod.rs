//! # Integration Flows
//!
//! Many nodes, one evaluator each: envelopes are exchanged by quorum set
//! hash and every node resolves peers' quorum sets through a shared store.

pub mod federated_voting;
