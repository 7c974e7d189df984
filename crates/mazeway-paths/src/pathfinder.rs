use mazeway_core::Point;

// ---------------------------------------------------------------------------
// Internal node for the priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f32,
    pub(crate) f: f32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: usize::MAX,
            // Never matches a run generation (runs count up from 1), so an
            // untouched node is not mistaken for a reached one.
            generation: u32::MAX,
            open: false,
        }
    }
}

/// Reference into the node table, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f32,
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest f first.
        // Equal scores fall back to the lowest node index (row-major order),
        // making extraction order fully deterministic.
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// A* search engine for a fixed-size grid.
///
/// `PathFinder` owns the per-run search state (costs, parents, open flags)
/// in a flat node table. Every query bumps a generation counter and nodes
/// from earlier runs are ignored rather than cleared, so repeated searches
/// on the same finder are cheap and never observe stale state.
pub struct PathFinder {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathFinder {
    /// Create a finder for a `width` × `height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); w * h],
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The g-cost of `p` from the most recent search.
    ///
    /// Returns `None` if `p` is out of range or was not reached.
    pub fn cost_at(&self, p: Point) -> Option<f32> {
        let i = self.idx(p)?;
        let n = &self.nodes[i];
        if n.generation != self.generation {
            return None;
        }
        Some(n.g)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
