//! Robust-network feasibility and the threshold search.
//!
//! "Robust" means the induced proximity graph is connected and has no
//! articulation point: the network survives the loss of any single site.
//! The canonical oracle is the low-link engine in `engine`; `exclusion`
//! keeps the simpler remove-one-site-and-recheck semantics as a reference
//! the tests cross-check against. `search` drives the oracle to the
//! minimal feasible threshold.

mod engine;
mod exclusion;
mod search;
mod types;

pub use engine::Solver;

use crate::{Error, Site};

/// Convenience entry point: build a solver for `sites` and run the search.
pub fn min_robust_cost(sites: &[Site]) -> Result<i64, Error> {
    let mut solver = Solver::new(sites)?;
    Ok(solver.solve())
}
