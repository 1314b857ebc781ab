//! Feasibility engine: connectivity plus articulation-point detection.
//!
//! Two passes per probe, both over explicit stacks sized to the site count:
//! a plain reachability DFS to confirm the induced graph is connected, then
//! a low-link DFS that computes per-node depth and lowpoint. A non-root
//! node with a tree child whose lowpoint does not climb above the node's
//! depth is a cut vertex; the root is a cut vertex iff it has more than one
//! DFS child. Feasible means connected and no cut vertex.

use crate::bitvec::BitVec;
use crate::proximity::{build_table, ProximityTable};
use crate::{Error, Site};

use super::types::{Frame, NO_PARENT};

/// Robustness solver owning the proximity table and all DFS scratch.
///
/// Scratch buffers are allocated once at construction and reused across
/// feasibility calls; the visited set resets word-wise. `feasible` takes
/// `&mut self`, so one solver serves one probe at a time.
#[derive(Clone, Debug)]
pub struct Solver {
    table: ProximityTable,
    visited: BitVec,
    stack: Vec<u32>,
    frames: Vec<Frame>,
    depth: Vec<u32>,
    low: Vec<u32>,
}

impl Solver {
    /// Build a solver for `sites`. Fails on an empty network, where
    /// robustness is undefined.
    pub fn new(sites: &[Site]) -> Result<Self, Error> {
        if sites.is_empty() {
            return Err(Error::EmptyNetwork);
        }
        let n = sites.len();
        Ok(Self {
            table: build_table(sites),
            visited: BitVec::new(n),
            stack: Vec::with_capacity(n),
            frames: Vec::with_capacity(n),
            depth: vec![0; n],
            low: vec![0; n],
        })
    }

    /// Number of sites.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Borrow the underlying proximity table.
    #[inline]
    pub fn table(&self) -> &ProximityTable {
        &self.table
    }

    /// Is the induced graph at threshold `sqr` robust?
    ///
    /// A single site is trivially robust. Two sites have no meaningful
    /// single-removal test, so robustness degenerates to direct
    /// connectivity. The verdict depends only on `sqr`, never on prior
    /// calls.
    pub fn feasible(&mut self, sqr: i64) -> bool {
        let n = self.table.len();
        if n == 1 {
            return true;
        }
        if n == 2 {
            return self.table.row(0)[0].dist <= sqr;
        }
        self.reach_count(sqr, None) == n && self.no_cut_vertex(sqr)
    }

    /// Count sites reachable within `sqr`, skipping `excluded` entirely.
    ///
    /// Starts at site 0, or site 1 when 0 is the excluded site. Each row
    /// walk stops at the first out-of-range neighbor, so work per node is
    /// bounded by its in-radius degree.
    pub(crate) fn reach_count(&mut self, sqr: i64, excluded: Option<u32>) -> usize {
        self.visited.clear_all();
        self.stack.clear();
        let start: u32 = if excluded == Some(0) { 1 } else { 0 };
        self.visited.set(start as usize);
        self.stack.push(start);
        let mut reached = 1usize;
        while let Some(c) = self.stack.pop() {
            for &nb in self.table.row(c as usize) {
                if nb.dist > sqr {
                    break;
                }
                if excluded == Some(nb.index) || self.visited.test(nb.index as usize) {
                    continue;
                }
                self.visited.set(nb.index as usize);
                reached += 1;
                self.stack.push(nb.index);
            }
        }
        reached
    }

    /// Low-link DFS over explicit frames, rooted at site 0.
    ///
    /// Assumes the induced graph is connected and `n >= 3`. Returns false
    /// as soon as an articulation point is found.
    fn no_cut_vertex(&mut self, sqr: i64) -> bool {
        self.visited.clear_all();
        self.frames.clear();
        self.visited.set(0);
        self.depth[0] = 0;
        self.low[0] = 0;
        let mut root_children = 0u32;
        self.frames.push(Frame {
            node: 0,
            parent: NO_PARENT,
            pos: 0,
        });
        while !self.frames.is_empty() {
            let fi = self.frames.len() - 1;
            let Frame { node, parent, pos } = self.frames[fi];
            let row = self.table.row(node as usize);
            match row.get(pos as usize).copied() {
                Some(nb) if nb.dist <= sqr => {
                    self.frames[fi].pos += 1;
                    let j = nb.index;
                    if j == parent {
                        // The tree edge back to the parent; a simple graph
                        // holds it exactly once per row.
                        continue;
                    }
                    if self.visited.test(j as usize) {
                        // Back edge: the neighbor's depth bounds our lowpoint.
                        let nd = node as usize;
                        self.low[nd] = self.low[nd].min(self.depth[j as usize]);
                    } else {
                        if node == 0 {
                            root_children += 1;
                            if root_children > 1 {
                                // Root with a second DFS child cuts the graph.
                                return false;
                            }
                        }
                        let d = self.depth[node as usize] + 1;
                        self.visited.set(j as usize);
                        self.depth[j as usize] = d;
                        self.low[j as usize] = d;
                        self.frames.push(Frame {
                            node: j,
                            parent: node,
                            pos: 0,
                        });
                    }
                }
                _ => {
                    // Row exhausted, or every remaining neighbor is out of
                    // range: retreat, folding the lowpoint into the parent.
                    self.frames.pop();
                    if parent != NO_PARENT {
                        let lw = self.low[node as usize];
                        let p = parent as usize;
                        self.low[p] = self.low[p].min(lw);
                        if parent != 0 && lw >= self.depth[p] {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}
