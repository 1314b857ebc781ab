//! Scratch types carried by the solver's explicit DFS stack.

/// One frame of the low-link DFS: a node, its DFS-tree parent, and the
/// position of the next neighbor-row entry to examine. Resuming from `pos`
/// after a child returns is what replaces the recursive call stack.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    pub node: u32,
    pub parent: u32,
    pub pos: u32,
}

/// Sentinel parent for the DFS root.
pub(crate) const NO_PARENT: u32 = u32::MAX;
