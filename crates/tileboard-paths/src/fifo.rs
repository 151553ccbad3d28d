//! Label-correcting relaxation with a FIFO work queue.
//!
//! Tiles are expanded in discovery order rather than cost order, so a tile
//! can be expanded again when a cheaper route to it turns up later. On
//! non-negative weights this converges to the same costs as Dijkstra once
//! the queue runs empty.

use std::collections::VecDeque;

use tileboard_core::Grid;

use crate::search::{Progress, SearchMap};
use crate::traits::{Pather, WeightedPather};

impl SearchMap {
    /// Run the FIFO relaxation from the already seeded start index `si`.
    pub(crate) fn relax_fifo(
        &mut self,
        grid: &Grid,
        si: usize,
        targets: &[bool],
        progress: &mut Progress,
    ) {
        let len = self.nodes.len();
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(len);
        let mut queued = vec![false; len];
        let mut counted = vec![false; len];

        queue.push_back(si);
        queued[si] = true;

        let mut nbuf = Vec::with_capacity(5);

        while !progress.is_done() {
            let Some(ci) = queue.pop_front() else {
                break;
            };
            queued[ci] = false;

            let current_cost = self.nodes[ci].cost;
            let new_checkpoint = targets[ci] && !counted[ci];
            counted[ci] = true;
            progress.expand(current_cost, new_checkpoint);

            let cp = grid.point(ci);
            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index_of(np) else {
                    continue;
                };
                let tentative = current_cost.saturating_add(grid.cost(cp, np));
                let n = &mut self.nodes[ni];
                // Only strict improvements: never overwrite an equal or
                // cheaper route, and never touch the start.
                if tentative >= n.cost {
                    continue;
                }
                n.cost = tentative;
                n.parent = ci;
                if !queued[ni] {
                    queued[ni] = true;
                    queue.push_back(ni);
                }
            }
        }
    }
}
