//! # Shared Types Crate
//!
//! Node identities, hashes and key encoding errors used by the quorum core,
//! the `qc-quorum` tool and the test suite.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `NodeId` and `Hash` are defined once here.
//! - **Byte-exact identity**: node comparison never goes through strings.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
