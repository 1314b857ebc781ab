//! Exclusion-DFS reference semantics for robustness.
//!
//! For every candidate removal (nobody, then each site in turn) re-run a
//! reachability pass and require full coverage of the survivors. O(N)
//! traversals per probe, so strictly slower than the low-link engine, but
//! the semantics are transparent; tests cross-check the engine against it.

use super::Solver;

impl Solver {
    /// Reference feasibility with remove-and-recheck semantics.
    ///
    /// Must return the same verdict as [`Solver::feasible`] for every input
    /// and threshold.
    pub fn feasible_exclusion(&mut self, sqr: i64) -> bool {
        let n = self.len();
        if n == 1 {
            return true;
        }
        if n == 2 {
            return self.table().row(0)[0].dist <= sqr;
        }
        if self.reach_count(sqr, None) != n {
            return false;
        }
        (0..n as u32).all(|e| self.reach_count(sqr, Some(e)) == n - 1)
    }
}
