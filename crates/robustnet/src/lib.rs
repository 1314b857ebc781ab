//! Minimum robust broadcast radius for fixed 2-D sites.
//!
//! Given N transmitter sites on the integer grid, find the smallest squared
//! radius `sqr` such that the induced proximity graph (an edge wherever the
//! squared distance is `<= sqr`) is *robust*: connected, and still connected
//! after removing any single site.
//!
//! Pipeline
//! - `proximity`: per-site neighbor rows sorted by squared distance.
//! - `robust`: the feasibility oracle (connectivity + articulation points)
//!   and the two-phase exponential/binary search over thresholds.
//! - `scatter`: deterministic random site generators for tests and benches.

pub mod bitvec;
pub mod proximity;
pub mod robust;
pub mod scatter;

mod error;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;
pub use nalgebra::Vector2 as Vec2;
pub use robust::{min_robust_cost, Solver};

/// A fixed transmitter site on the integer grid.
pub type Site = Vec2<i32>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bitvec::BitVec;
    pub use crate::proximity::{build_table, sq_dist, Neighbor, ProximityTable};
    pub use crate::robust::{min_robust_cost, Solver};
    pub use crate::scatter::{scatter_clustered, scatter_uniform, ClusterCfg};
    pub use crate::{Error, Site, Vec2};
}
