use tileboard_core::{Grid, Point};

use crate::config::SearchOrder;

/// Sentinel cost meaning "unreachable". Larger than any real path cost.
pub const UNREACHABLE: i32 = i32::MAX;

/// Parent sentinel meaning "never reached".
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal per-tile search state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) cost: i32,
    /// Grid index of the predecessor. The start tile points at itself.
    pub(crate) parent: usize,
    pub(crate) on_path: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            cost: UNREACHABLE,
            parent: NO_PARENT,
            on_path: false,
        }
    }
}

/// Reference into the node array for the cost-ordered search.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest cost first,
/// and among equal costs the entry pushed first.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Termination bookkeeping
// ---------------------------------------------------------------------------

/// Counters of one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of tiles taken off the queue (revisits included).
    pub expanded: usize,
    /// Distinct checkpoints taken off the queue.
    pub checkpoints_found: usize,
    /// Highest cost taken off the queue so far.
    pub max_cost: i32,
}

/// Tracks the stop conditions shared by both search orders.
pub(crate) struct Progress {
    budget: i32,
    targets: usize,
    pub(crate) stats: SearchStats,
}

impl Progress {
    fn new(budget: i32, targets: usize) -> Self {
        Self {
            budget,
            targets,
            stats: SearchStats::default(),
        }
    }

    /// The search stops once every checkpoint was found or the explored
    /// cost went past the budget. An empty queue is handled by the caller.
    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        self.stats.checkpoints_found >= self.targets || self.stats.max_cost > self.budget
    }

    #[inline]
    pub(crate) fn expand(&mut self, cost: i32, new_checkpoint: bool) {
        self.stats.expanded += 1;
        if new_checkpoint {
            self.stats.checkpoints_found += 1;
        }
        self.stats.max_cost = self.stats.max_cost.max(cost);
    }
}

// ---------------------------------------------------------------------------
// SearchMap
// ---------------------------------------------------------------------------

/// Per-query search state for one [`Grid`].
///
/// Holds, for every tile index of the grid, the cost from the start tile,
/// the predecessor on the cheapest known route and whether the tile lies on
/// an extracted checkpoint path. A map only makes sense together with the
/// grid it was created for; create a new one whenever the grid changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchMap {
    pub(crate) nodes: Vec<Node>,
    pub(crate) stats: SearchStats,
}

impl SearchMap {
    /// A map for `grid` in which every tile is unreachable.
    pub fn new(grid: &Grid) -> Self {
        Self {
            nodes: vec![Node::default(); grid.len()],
            stats: SearchStats::default(),
        }
    }

    /// Compute costs and predecessors from `start`.
    ///
    /// Every tile is reset first. The search then stops when the queue runs
    /// empty, when every tile in `checkpoints` has been taken off the queue,
    /// or when the highest explored cost exceeds `step_budget`, whichever
    /// comes first. Tiles never reached keep [`UNREACHABLE`].
    ///
    /// Does nothing besides the reset if `start` has no tile.
    pub fn search(
        &mut self,
        grid: &Grid,
        start: Point,
        checkpoints: &[Point],
        step_budget: i32,
        order: SearchOrder,
    ) -> SearchStats {
        self.nodes.clear();
        self.nodes.resize(grid.len(), Node::default());
        self.stats = SearchStats::default();

        let Some(si) = grid.index_of(start) else {
            return self.stats;
        };

        let mut targets = vec![false; grid.len()];
        let mut total = 0;
        for i in checkpoints.iter().filter_map(|&p| grid.index_of(p)) {
            if !targets[i] {
                targets[i] = true;
                total += 1;
            }
        }
        // Checkpoints without a tile can never be found.
        total += checkpoints
            .iter()
            .filter(|&&p| !grid.contains(p))
            .count();

        self.nodes[si].cost = 0;
        self.nodes[si].parent = si;

        let mut progress = Progress::new(step_budget, total);
        match order {
            SearchOrder::Fifo => self.relax_fifo(grid, si, &targets, &mut progress),
            SearchOrder::CostOrdered => self.relax_cost_ordered(grid, si, &targets, &mut progress),
        }
        self.stats = progress.stats;

        log::debug!(
            "search from {start} ({order:?}): expanded {} tiles, found {}/{} checkpoints, max cost {}",
            self.stats.expanded,
            self.stats.checkpoints_found,
            total,
            self.stats.max_cost,
        );
        self.stats
    }

    /// Counters of the last [`search`](Self::search).
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of tiles covered by the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    fn node(&self, grid: &Grid, p: Point) -> Option<&Node> {
        grid.index_of(p).and_then(|i| self.nodes.get(i))
    }

    /// Cost from the start tile to `p`.
    ///
    /// Returns [`UNREACHABLE`] if `p` has no tile or was not reached by the
    /// last search.
    pub fn cost_at(&self, grid: &Grid, p: Point) -> i32 {
        self.node(grid, p).map_or(UNREACHABLE, |n| n.cost)
    }

    /// The predecessor of `p` on its cheapest known route. The start tile is
    /// its own predecessor.
    pub fn predecessor(&self, grid: &Grid, p: Point) -> Option<Point> {
        let n = self.node(grid, p)?;
        (n.parent != NO_PARENT).then(|| grid.point(n.parent))
    }

    /// Whether the last search assigned `p` a predecessor.
    pub fn is_reached(&self, grid: &Grid, p: Point) -> bool {
        self.node(grid, p).is_some_and(|n| n.parent != NO_PARENT)
    }

    /// Whether `p` was marked by a path extraction.
    pub fn is_on_path(&self, grid: &Grid, p: Point) -> bool {
        self.node(grid, p).is_some_and(|n| n.on_path)
    }
}
