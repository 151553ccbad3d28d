//! Edge resolution for tile grids.
//!
//! A tile's outgoing edges are its orthogonal neighbours plus, for a portal,
//! one directed edge to the portal target. Blocked tiles and coordinates
//! without a tile are never destinations.

use tileboard_core::{Grid, Point, Tile};

use crate::search::UNREACHABLE;
use crate::traits::{Pather, WeightedPather};

/// Whether a move may end on `p`.
#[inline]
fn enterable(grid: &Grid, p: Point) -> bool {
    grid.get(p).is_some_and(|t| !t.is_blocked())
}

impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(tile) = self.get(p) else {
            return;
        };
        for n in p.neighbors_4() {
            if enterable(self, n) {
                buf.push(n);
            }
        }
        // One-way: the target only links back if it is itself a portal.
        if let Some(target) = tile.portal() {
            if enterable(self, target) {
                buf.push(target);
            }
        }
    }
}

impl WeightedPather for Grid {
    /// The entry cost of `to`; the source tile's own cost never matters.
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.get(to).map_or(UNREACHABLE, Tile::entry_cost)
    }
}

/// Coordinates targeted by at least one portal, in enumeration order of the
/// portals. Only targets that resolve to a tile are listed.
pub fn portal_exits(grid: &Grid) -> Vec<Point> {
    let mut exits: Vec<Point> = Vec::new();
    for target in grid.iter().filter_map(Tile::portal) {
        if grid.contains(target) && !exits.contains(&target) {
            exits.push(target);
        }
    }
    exits
}

/// `(source, target)` pairs of portals whose target has no tile.
pub fn dangling_portals(grid: &Grid) -> Vec<(Point, Point)> {
    grid.iter()
        .filter_map(|t| t.portal().map(|target| (t.coordinate(), target)))
        .filter(|&(_, target)| !grid.contains(target))
        .collect()
}
