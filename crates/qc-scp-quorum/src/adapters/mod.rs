//! # Adapters Layer (Hexagonal Architecture)
//!
//! Default implementations of the outbound ports.

mod driver;

pub use driver::Sha256Driver;
