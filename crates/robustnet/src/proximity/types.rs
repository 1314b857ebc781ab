//! Neighbor entries and the flat row table.

use crate::Site;

/// Squared Euclidean distance in 64-bit integer arithmetic.
///
/// Differences are widened to i64 before squaring, so 32-bit coordinates
/// never overflow the multiply. No floating point anywhere in the core.
#[inline]
pub fn sq_dist(a: Site, b: Site) -> i64 {
    let dx = a.x as i64 - b.x as i64;
    let dy = a.y as i64 - b.y as i64;
    dx * dx + dy * dy
}

/// One entry of a neighbor row: squared distance and the neighbor's site
/// index. Plain fields; the derived `Ord` is lexicographic by
/// `(dist, index)`, which is exactly the row ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Neighbor {
    pub dist: i64,
    pub index: u32,
}

/// Per-site neighbor rows, each sorted ascending by `(dist, index)`.
///
/// Flat storage: row `i` occupies `[i * (n-1), (i+1) * (n-1))`. Rows exclude
/// the site itself. Immutable once built.
#[derive(Clone, Debug)]
pub struct ProximityTable {
    n: usize,
    stride: usize,
    entries: Vec<Neighbor>,
}

impl ProximityTable {
    pub(crate) fn from_parts(n: usize, entries: Vec<Neighbor>) -> Self {
        let stride = n.saturating_sub(1);
        debug_assert_eq!(entries.len(), n * stride);
        Self { n, stride, entries }
    }

    /// Number of sites.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Sorted neighbor row of site `i` (self excluded).
    #[inline]
    pub fn row(&self, i: usize) -> &[Neighbor] {
        &self.entries[i * self.stride..(i + 1) * self.stride]
    }

    /// Prefix of row `i` with `dist <= sqr`, located by binary search.
    #[inline]
    pub fn in_range(&self, i: usize, sqr: i64) -> &[Neighbor] {
        let row = self.row(i);
        &row[..row.partition_point(|nb| nb.dist <= sqr)]
    }
}
