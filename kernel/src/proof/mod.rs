//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Nothing in `proof` depends on `maze`; the dependency runs the other way.

pub mod canon;
pub mod hash;
