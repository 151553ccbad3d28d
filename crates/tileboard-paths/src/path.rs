//! Path extraction along predecessor chains.

use tileboard_core::{Grid, Point};

use crate::search::{NO_PARENT, SearchMap};

impl SearchMap {
    /// Mark every tile on the chain from `checkpoint` back to `start`.
    ///
    /// The start tile itself is never marked. Returns `false`, marking
    /// nothing, if the checkpoint was not reached by the last search. The
    /// walk also stops at a blocked tile and after visiting every tile once,
    /// so a damaged chain cannot loop forever.
    pub fn extract_path(&mut self, grid: &Grid, start: Point, checkpoint: Point) -> bool {
        let (Some(si), Some(ci)) = (grid.index_of(start), grid.index_of(checkpoint)) else {
            return false;
        };
        if self.nodes[ci].parent == NO_PARENT {
            return false;
        }

        let mut cur = ci;
        for _ in 0..self.nodes.len() {
            if cur == si || grid.tile(cur).is_blocked() {
                break;
            }
            self.nodes[cur].on_path = true;
            cur = self.nodes[cur].parent;
            if cur == NO_PARENT {
                break;
            }
        }
        true
    }

    /// The cheapest known route from `start` to `checkpoint`, both included.
    ///
    /// Returns `None` if the checkpoint was not reached or its chain does
    /// not lead back to `start`.
    pub fn path(&self, grid: &Grid, start: Point, checkpoint: Point) -> Option<Vec<Point>> {
        let si = grid.index_of(start)?;
        let mut cur = grid.index_of(checkpoint)?;
        if self.nodes[cur].parent == NO_PARENT {
            return None;
        }

        let mut path = vec![grid.point(cur)];
        while cur != si {
            let next = self.nodes[cur].parent;
            if next == NO_PARENT || next == cur || path.len() > self.nodes.len() {
                return None;
            }
            cur = next;
            path.push(grid.point(cur));
        }
        path.reverse();
        Some(path)
    }
}
