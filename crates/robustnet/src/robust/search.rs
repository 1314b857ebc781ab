//! Two-phase search for the minimal robust threshold.
//!
//! Feasibility is monotone in the threshold (raising it only adds edges),
//! so the minimum is the boundary of a predicate: bracket it by doubling,
//! then bisect the bracket.

use tracing::debug;

use super::Solver;

/// Overflow-safe floor midpoint of two non-negative thresholds.
///
/// `(low + high) / 2` can wrap for large 64-bit squared distances; the
/// carry-free form cannot.
#[inline]
pub(crate) fn midpoint(low: i64, high: i64) -> i64 {
    (low & high) + ((low ^ high) >> 1)
}

impl Solver {
    /// Minimal squared radius at which the network is robust.
    ///
    /// Phase 1 doubles `high` until it is feasible; phase 2 bisects
    /// `[low, high]` keeping `high` feasible throughout, so the meeting
    /// point is the minimum.
    pub fn solve(&mut self) -> i64 {
        let mut low: i64 = 0;
        let mut high: i64 = 128;
        while !self.feasible(high) {
            debug!(sqr = high, feasible = false, "bracket probe");
            low = high;
            high *= 2;
        }
        debug!(sqr = high, feasible = true, "bracket found");
        while low < high {
            let m = midpoint(low, high);
            if self.feasible(m) {
                high = m;
            } else {
                low = m + 1;
            }
            debug!(low, high, "bisect");
        }
        debug!(answer = low, "solved");
        low
    }
}
