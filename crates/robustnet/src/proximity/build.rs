//! Table construction: all pairwise squared distances, rows sorted.

use super::types::{sq_dist, Neighbor, ProximityTable};
use crate::Site;

/// Build the sorted proximity table for `sites`.
///
/// O(N²) distance computations plus an O(N log N) sort per row. The sort
/// key is the derived `(dist, index)` order, so equidistant neighbors tie
/// off by ascending site index.
pub fn build_table(sites: &[Site]) -> ProximityTable {
    let n = sites.len();
    let stride = n.saturating_sub(1);
    let mut entries = Vec::with_capacity(n * stride);
    for (i, &a) in sites.iter().enumerate() {
        let base = entries.len();
        for (j, &b) in sites.iter().enumerate() {
            if j == i {
                continue;
            }
            entries.push(Neighbor {
                dist: sq_dist(a, b),
                index: j as u32,
            });
        }
        entries[base..].sort_unstable();
    }
    ProximityTable::from_parts(n, entries)
}
