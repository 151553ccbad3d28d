use std::collections::BinaryHeap;

use tileboard_core::Grid;

use crate::search::{NodeRef, Progress, SearchMap};
use crate::traits::{Pather, WeightedPather};

impl SearchMap {
    /// Run Dijkstra from the already seeded start index `si`.
    ///
    /// Every tile is expanded at most once, in non-decreasing cost order.
    /// Equal costs are expanded in discovery order.
    pub(crate) fn relax_cost_ordered(
        &mut self,
        grid: &Grid,
        si: usize,
        targets: &[bool],
        progress: &mut Progress,
    ) {
        let mut settled = vec![false; self.nodes.len()];
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(NodeRef {
            idx: si,
            cost: 0,
            seq,
        });

        let mut nbuf = Vec::with_capacity(5);

        while !progress.is_done() {
            let Some(current) = open.pop() else {
                break;
            };
            let ci = current.idx;
            // Skip stale entries.
            if settled[ci] || current.cost != self.nodes[ci].cost {
                continue;
            }
            settled[ci] = true;
            progress.expand(current.cost, targets[ci]);

            let cp = grid.point(ci);
            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index_of(np) else {
                    continue;
                };
                let tentative = current.cost.saturating_add(grid.cost(cp, np));
                let n = &mut self.nodes[ni];
                if tentative >= n.cost {
                    continue;
                }
                n.cost = tentative;
                n.parent = ci;
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                    seq,
                });
            }
        }
    }
}
