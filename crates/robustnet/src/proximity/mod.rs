//! Per-site neighbor orderings by squared distance.
//!
//! Purpose
//! - Build, once per input, a row of neighbors for every site, sorted
//!   ascending by `(squared distance, index)`. The engine walks a row and
//!   stops at the first out-of-range entry, so per-node work during a
//!   traversal is bounded by the in-radius degree rather than N.
//!
//! Variant choice
//! - Rows EXCLUDE the site itself. With coincident sites, a duplicate at
//!   distance 0 can sort before the self entry, so "skip position 0" is not
//!   a safe convention; excluding self at build time removes the case.

mod build;
mod types;

pub use build::build_table;
pub use types::{sq_dist, Neighbor, ProximityTable};

#[cfg(test)]
mod tests;
