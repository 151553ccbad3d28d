//! The board orchestrator.
//!
//! A [`Board`] owns a [`Grid`] and the [`SearchMap`] of its latest
//! recomputation. Every change to the grid goes through the board (or is
//! followed by [`Board::recompute`]) so that readers always observe a map
//! computed from the current tiles.

use tileboard_core::{Grid, Point, Tile};

use crate::config::{BoardConfig, StartPolicy};
use crate::diagnostic::Diagnostic;
use crate::neighbors::{dangling_portals, portal_exits};
use crate::search::{SearchMap, SearchStats, UNREACHABLE};

/// Everything a render layer needs to know about one tile.
#[derive(Clone, Copy, Debug)]
pub struct TileView<'a> {
    pub tile: &'a Tile,
    /// Cost from the start tile, or [`UNREACHABLE`].
    pub cost: i32,
    pub on_path: bool,
    /// Cost is finite and within the step budget.
    pub reachable: bool,
    /// Some portal leads to this tile.
    pub portal_exit: bool,
}

/// A tile board with its computed reachability and checkpoint paths.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    config: BoardConfig,
    start: Option<Point>,
    checkpoints: Vec<Point>,
    exits: Vec<Point>,
    map: SearchMap,
    diagnostics: Vec<Diagnostic>,
}

impl Board {
    /// Create a board and compute it once.
    pub fn new(grid: Grid, config: BoardConfig) -> Self {
        let map = SearchMap::new(&grid);
        let mut board = Self {
            grid,
            config,
            start: None,
            checkpoints: Vec::new(),
            exits: Vec::new(),
            map,
            diagnostics: Vec::new(),
        };
        board.recompute();
        board
    }

    /// Rebuild checkpoints, start tile, costs and paths from the current
    /// tiles.
    ///
    /// All previous search state is discarded first, so calling this twice
    /// without a change in between yields the same result. Returns the
    /// diagnostics of this run.
    pub fn recompute(&mut self) -> &[Diagnostic] {
        self.diagnostics.clear();
        self.checkpoints.clear();
        self.map = SearchMap::new(&self.grid);

        let mut starts = Vec::new();
        for tile in self.grid.iter() {
            if tile.is_checkpoint() {
                self.checkpoints.push(tile.coordinate());
            }
            if tile.is_start_point() {
                starts.push(tile.coordinate());
            }
        }
        self.start = self.resolve_start(starts);

        self.exits = portal_exits(&self.grid);
        for (from, to) in dangling_portals(&self.grid) {
            log::debug!("portal at {from} leads to missing tile {to}");
            self.diagnostics.push(Diagnostic::DanglingPortal { from, to });
        }

        if self.checkpoints.is_empty() {
            self.diagnostics.push(Diagnostic::NoCheckpoints);
        }
        let Some(start) = self.start else {
            return &self.diagnostics;
        };
        if self.checkpoints.is_empty() {
            return &self.diagnostics;
        }

        self.map.search(
            &self.grid,
            start,
            &self.checkpoints,
            self.config.step_budget,
            self.config.order,
        );
        for &cp in &self.checkpoints {
            if !self.map.extract_path(&self.grid, start, cp) {
                log::warn!("checkpoint {cp} unreachable from {start}");
                self.diagnostics.push(Diagnostic::UnreachableCheckpoint(cp));
            }
        }
        &self.diagnostics
    }

    fn resolve_start(&mut self, mut starts: Vec<Point>) -> Option<Point> {
        match starts.len() {
            0 => {
                self.diagnostics.push(Diagnostic::NoStartPoint);
                None
            }
            1 => starts.pop(),
            n => match self.config.start_policy {
                StartPolicy::LastWins => {
                    let chosen = starts.pop()?;
                    log::warn!("{n} start points, using {chosen}");
                    self.diagnostics.push(Diagnostic::AmbiguousStart {
                        chosen,
                        others: starts,
                    });
                    Some(chosen)
                }
                StartPolicy::Reject => {
                    log::warn!("{n} start points, none used");
                    self.diagnostics
                        .push(Diagnostic::RejectedStart { candidates: starts });
                    None
                }
            },
        }
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Apply `f` to the tile at `p` and recompute. Returns `false` if there
    /// is no tile at `p`.
    pub fn edit(&mut self, p: Point, f: impl FnOnce(&mut Tile)) -> bool {
        let Some(tile) = self.grid.get_mut(p) else {
            return false;
        };
        f(tile);
        self.recompute();
        true
    }

    /// Direct access to a tile. Call [`recompute`](Self::recompute) after
    /// changing it; until then the computed state describes the old tiles.
    pub fn tile_mut(&mut self, p: Point) -> Option<&mut Tile> {
        self.grid.get_mut(p)
    }

    /// Add or replace a tile and recompute.
    pub fn insert_tile(&mut self, tile: Tile) -> Option<Tile> {
        let old = self.grid.insert(tile);
        self.recompute();
        old
    }

    /// Remove a tile and recompute.
    pub fn remove_tile(&mut self, p: Point) -> Option<Tile> {
        let old = self.grid.remove(p);
        if old.is_some() {
            self.recompute();
        }
        old
    }

    /// Resize the board, keeping modifiers of surviving coordinates, and
    /// recompute.
    pub fn regenerate(&mut self, width: i32, height: i32) {
        self.grid.regenerate(width, height);
        self.recompute();
    }

    /// Change the step budget and recompute.
    pub fn set_step_budget(&mut self, step_budget: i32) {
        self.config.step_budget = step_budget;
        self.recompute();
    }

    /// Replace the configuration and recompute.
    pub fn set_config(&mut self, config: BoardConfig) {
        self.config = config;
        self.recompute();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// The start tile used by the last recomputation.
    #[inline]
    pub fn start_tile(&self) -> Option<Point> {
        self.start
    }

    /// All checkpoints, in grid enumeration order.
    #[inline]
    pub fn checkpoints(&self) -> &[Point] {
        &self.checkpoints
    }

    /// Diagnostics of the last recomputation.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn search_map(&self) -> &SearchMap {
        &self.map
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.map.stats()
    }

    /// Cost from the start tile, or [`UNREACHABLE`].
    pub fn cost_at(&self, p: Point) -> i32 {
        self.map.cost_at(&self.grid, p)
    }

    pub fn predecessor(&self, p: Point) -> Option<Point> {
        self.map.predecessor(&self.grid, p)
    }

    pub fn is_on_path(&self, p: Point) -> bool {
        self.map.is_on_path(&self.grid, p)
    }

    /// Whether `p` is within the current movement allowance.
    pub fn is_reachable(&self, p: Point) -> bool {
        let cost = self.cost_at(p);
        cost != UNREACHABLE && cost <= self.config.step_budget
    }

    /// All reachable tiles, in grid enumeration order.
    pub fn reachable(&self) -> impl Iterator<Item = Point> + '_ {
        self.grid
            .iter()
            .map(Tile::coordinate)
            .filter(|&p| self.is_reachable(p))
    }

    /// The route from the start tile to `checkpoint`, both included.
    pub fn path_to(&self, checkpoint: Point) -> Option<Vec<Point>> {
        self.map.path(&self.grid, self.start?, checkpoint)
    }

    pub fn is_portal_exit(&self, p: Point) -> bool {
        self.exits.contains(&p)
    }

    pub fn view(&self, p: Point) -> Option<TileView<'_>> {
        let tile = self.grid.get(p)?;
        Some(TileView {
            tile,
            cost: self.cost_at(p),
            on_path: self.is_on_path(p),
            reachable: self.is_reachable(p),
            portal_exit: self.is_portal_exit(p),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchOrder;
    use crate::distance::manhattan;
    use crate::traits::Pather;
    use rand::{Rng, RngExt};

    fn row(len: i32) -> Grid {
        Grid::new(len, 1)
    }

    fn set(grid: &mut Grid, p: (i32, i32), f: impl FnOnce(&mut Tile)) {
        f(grid.get_mut(p.into()).unwrap());
    }

    fn on_path(board: &Board) -> Vec<Point> {
        board
            .grid()
            .iter()
            .map(Tile::coordinate)
            .filter(|&p| board.is_on_path(p))
            .collect()
    }

    fn random_grid(rng: &mut impl Rng, w: i32, h: i32) -> Grid {
        let mut g = Grid::new(w, h);
        for t in g.iter_mut() {
            match rng.random_range(0..10u32) {
                0 | 1 => t.set_blocked(true),
                2 => t.add_obstacle(rng.random_range(2..6)),
                3 => t.add_portal(Point::new(rng.random_range(0..w), rng.random_range(0..h))),
                _ => {}
            }
        }
        g
    }

    /// Walk the predecessor chain of `p` and check that every step is a real
    /// edge and that entry costs add up to the recorded cost.
    fn assert_chain_consistent(board: &Board, p: Point) {
        let grid = board.grid();
        let start = board.start_tile().unwrap();
        let mut cur = p;
        let mut sum = 0;
        let mut buf = Vec::new();
        for _ in 0..=grid.len() {
            if cur == start {
                assert_eq!(sum, board.cost_at(p), "chain cost of {p}");
                return;
            }
            let prev = board.predecessor(cur).unwrap();
            buf.clear();
            grid.neighbors(prev, &mut buf);
            assert!(buf.contains(&cur), "{prev} -> {cur} is not an edge");
            sum += grid.get(cur).unwrap().entry_cost();
            cur = prev;
        }
        panic!("predecessor chain of {p} does not end at the start");
    }

    // -----------------------------------------------------------------------
    // Scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn obstacle_row() {
        let mut g = row(3);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        set(&mut g, (1, 0), |t| t.add_obstacle(5));
        set(&mut g, (2, 0), |t| t.set_checkpoint(true));
        for order in [SearchOrder::Fifo, SearchOrder::CostOrdered] {
            let board = Board::new(
                g.clone(),
                BoardConfig {
                    step_budget: 10,
                    order,
                    ..BoardConfig::default()
                },
            );
            assert!(board.diagnostics().is_empty());
            assert_eq!(board.cost_at(Point::new(0, 0)), 0);
            assert_eq!(board.cost_at(Point::new(1, 0)), 5);
            assert_eq!(board.cost_at(Point::new(2, 0)), 6);
            assert_eq!(on_path(&board), vec![Point::new(1, 0), Point::new(2, 0)]);
            assert_eq!(
                board.path_to(Point::new(2, 0)),
                Some(vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)])
            );
        }
    }

    #[test]
    fn blocked_checkpoint_is_unreachable() {
        let mut g = row(2);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        set(&mut g, (1, 0), |t| {
            t.set_blocked(true);
            t.set_checkpoint(true);
        });
        let board = Board::new(g, BoardConfig::with_budget(10));
        assert_eq!(board.cost_at(Point::new(1, 0)), UNREACHABLE);
        assert!(on_path(&board).is_empty());
        assert_eq!(
            board.diagnostics(),
            &[Diagnostic::UnreachableCheckpoint(Point::new(1, 0))]
        );
        assert_eq!(board.path_to(Point::new(1, 0)), None);
    }

    #[test]
    fn portal_into_disconnected_region() {
        let mut g = Grid::new(4, 4);
        set(&mut g, (2, 3), |t| t.set_blocked(true));
        set(&mut g, (3, 2), |t| t.set_blocked(true));
        set(&mut g, (0, 0), |t| {
            t.set_start_point(true);
            t.add_portal(Point::new(3, 3));
        });
        set(&mut g, (3, 3), |t| t.set_checkpoint(true));
        for order in [SearchOrder::Fifo, SearchOrder::CostOrdered] {
            let board = Board::new(
                g.clone(),
                BoardConfig {
                    step_budget: 10,
                    order,
                    ..BoardConfig::default()
                },
            );
            assert_eq!(board.cost_at(Point::new(3, 3)), 1);
            assert_eq!(on_path(&board), vec![Point::new(3, 3)]);
            assert_eq!(
                board.path_to(Point::new(3, 3)),
                Some(vec![Point::new(0, 0), Point::new(3, 3)])
            );
            assert!(board.is_portal_exit(Point::new(3, 3)));
            assert!(!board.is_portal_exit(Point::new(0, 0)));
        }
    }

    #[test]
    fn portal_is_one_way() {
        let mut g = row(4);
        set(&mut g, (1, 0), |t| t.set_blocked(true));
        set(&mut g, (2, 0), |t| t.set_blocked(true));
        set(&mut g, (0, 0), |t| {
            t.add_portal(Point::new(3, 0));
            t.set_checkpoint(true);
        });
        set(&mut g, (3, 0), |t| t.set_start_point(true));
        let mut board = Board::new(g, BoardConfig::with_budget(10));
        assert_eq!(board.cost_at(Point::new(0, 0)), UNREACHABLE);
        assert_eq!(
            board.diagnostics(),
            &[Diagnostic::UnreachableCheckpoint(Point::new(0, 0))]
        );

        // Swap roles: now the portal can be used.
        board.edit(Point::new(3, 0), |t| {
            t.set_start_point(false);
            t.set_checkpoint(true);
        });
        board.edit(Point::new(0, 0), |t| {
            t.set_checkpoint(false);
            t.set_start_point(true);
        });
        assert!(board.diagnostics().is_empty());
        assert_eq!(board.cost_at(Point::new(3, 0)), 1);
    }

    // -----------------------------------------------------------------------
    // Degraded configurations
    // -----------------------------------------------------------------------

    #[test]
    fn no_start_point() {
        let mut g = row(3);
        set(&mut g, (2, 0), |t| t.set_checkpoint(true));
        let board = Board::new(g, BoardConfig::with_budget(10));
        assert_eq!(board.start_tile(), None);
        assert_eq!(board.diagnostics(), &[Diagnostic::NoStartPoint]);
        assert_eq!(board.reachable().count(), 0);
        assert_eq!(board.path_to(Point::new(2, 0)), None);
    }

    #[test]
    fn no_checkpoints() {
        let mut g = row(3);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        let board = Board::new(g, BoardConfig::with_budget(10));
        assert_eq!(board.start_tile(), Some(Point::new(0, 0)));
        assert_eq!(board.diagnostics(), &[Diagnostic::NoCheckpoints]);
        assert!(board.grid().iter().all(|t| board.cost_at(t.coordinate()) == UNREACHABLE));
        assert_eq!(board.stats(), SearchStats::default());
    }

    #[test]
    fn last_start_point_wins() {
        let mut g = row(3);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        set(&mut g, (2, 0), |t| t.set_start_point(true));
        set(&mut g, (1, 0), |t| t.set_checkpoint(true));
        let board = Board::new(g, BoardConfig::with_budget(10));
        assert_eq!(board.start_tile(), Some(Point::new(2, 0)));
        assert_eq!(
            board.diagnostics(),
            &[Diagnostic::AmbiguousStart {
                chosen: Point::new(2, 0),
                others: vec![Point::new(0, 0)],
            }]
        );
        assert_eq!(board.cost_at(Point::new(2, 0)), 0);
        assert_eq!(board.cost_at(Point::new(1, 0)), 1);
    }

    #[test]
    fn rejected_start_points() {
        let mut g = row(3);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        set(&mut g, (2, 0), |t| t.set_start_point(true));
        set(&mut g, (1, 0), |t| t.set_checkpoint(true));
        let config = BoardConfig {
            step_budget: 10,
            start_policy: StartPolicy::Reject,
            ..BoardConfig::default()
        };
        let board = Board::new(g, config);
        assert_eq!(board.start_tile(), None);
        assert_eq!(
            board.diagnostics(),
            &[Diagnostic::RejectedStart {
                candidates: vec![Point::new(0, 0), Point::new(2, 0)],
            }]
        );
        assert_eq!(board.cost_at(Point::new(1, 0)), UNREACHABLE);
    }

    #[test]
    fn dangling_portal_is_reported() {
        let mut g = row(2);
        set(&mut g, (0, 0), |t| {
            t.set_start_point(true);
            t.add_portal(Point::new(5, 5));
        });
        set(&mut g, (1, 0), |t| t.set_checkpoint(true));
        let board = Board::new(g, BoardConfig::with_budget(10));
        assert_eq!(
            board.diagnostics(),
            &[Diagnostic::DanglingPortal {
                from: Point::new(0, 0),
                to: Point::new(5, 5),
            }]
        );
        assert_eq!(board.cost_at(Point::new(1, 0)), 1);
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    #[test]
    fn edit_recomputes() {
        let mut g = row(3);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        set(&mut g, (2, 0), |t| t.set_checkpoint(true));
        let mut board = Board::new(g, BoardConfig::with_budget(10));
        assert_eq!(board.cost_at(Point::new(2, 0)), 2);

        assert!(board.edit(Point::new(1, 0), |t| t.set_blocked(true)));
        assert_eq!(board.cost_at(Point::new(2, 0)), UNREACHABLE);
        assert!(on_path(&board).is_empty());
        assert!(!board.edit(Point::new(9, 9), |t| t.set_blocked(true)));
    }

    #[test]
    fn tile_mut_waits_for_recompute() {
        let mut g = row(3);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        set(&mut g, (2, 0), |t| t.set_checkpoint(true));
        let mut board = Board::new(g, BoardConfig::with_budget(10));
        board.tile_mut(Point::new(1, 0)).unwrap().add_obstacle(4);
        assert_eq!(board.cost_at(Point::new(2, 0)), 2);
        board.recompute();
        assert_eq!(board.cost_at(Point::new(2, 0)), 5);
    }

    #[test]
    fn step_budget_controls_reachability() {
        let mut g = row(6);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        set(&mut g, (5, 0), |t| t.set_checkpoint(true));
        let mut board = Board::new(g, BoardConfig::with_budget(2));
        let reach: Vec<_> = board.reachable().collect();
        assert_eq!(reach, vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
        assert!(!board.is_reachable(Point::new(3, 0)));
        assert!(board.cost_at(Point::new(3, 0)) != UNREACHABLE);
        assert_eq!(
            board.diagnostics(),
            &[Diagnostic::UnreachableCheckpoint(Point::new(5, 0))]
        );

        board.set_step_budget(5);
        assert_eq!(board.reachable().count(), 6);
        assert!(board.diagnostics().is_empty());
        assert!(board.is_on_path(Point::new(5, 0)));
    }

    #[test]
    fn regenerate_keeps_modifiers() {
        let mut g = Grid::new(2, 2);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        set(&mut g, (1, 1), |t| t.set_checkpoint(true));
        let mut board = Board::new(g, BoardConfig::with_budget(10));
        assert_eq!(board.cost_at(Point::new(1, 1)), 2);

        board.regenerate(4, 4);
        assert_eq!(board.grid().len(), 16);
        assert_eq!(board.checkpoints(), &[Point::new(1, 1)]);
        assert_eq!(board.cost_at(Point::new(1, 1)), 2);
    }

    #[test]
    fn insert_and_remove_tiles() {
        let mut g = Grid::empty(3, 1);
        let mut start = Tile::new(Point::new(0, 0));
        start.set_start_point(true);
        g.insert(start);
        let mut board = Board::new(g, BoardConfig::with_budget(10));
        assert_eq!(board.diagnostics(), &[Diagnostic::NoCheckpoints]);

        let mut cp = Tile::new(Point::new(2, 0));
        cp.set_checkpoint(true);
        board.insert_tile(cp);
        assert_eq!(
            board.diagnostics(),
            &[Diagnostic::UnreachableCheckpoint(Point::new(2, 0))]
        );

        board.insert_tile(Tile::new(Point::new(1, 0)));
        assert!(board.diagnostics().is_empty());
        assert_eq!(board.cost_at(Point::new(2, 0)), 2);

        assert!(board.remove_tile(Point::new(1, 0)).is_some());
        assert_eq!(board.cost_at(Point::new(2, 0)), UNREACHABLE);
        assert!(board.remove_tile(Point::new(1, 0)).is_none());
    }

    #[test]
    fn view_combines_tile_and_state() {
        let mut g = row(3);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        set(&mut g, (2, 0), |t| t.set_checkpoint(true));
        let board = Board::new(g, BoardConfig::with_budget(1));
        let v = board.view(Point::new(1, 0)).unwrap();
        assert_eq!(v.cost, 1);
        assert!(v.on_path && v.reachable && !v.portal_exit);
        let v = board.view(Point::new(2, 0)).unwrap();
        assert!(v.tile.is_checkpoint());
        assert!(v.on_path && !v.reachable);
        assert!(board.view(Point::new(3, 0)).is_none());
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn open_grid_costs_are_manhattan() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let (w, h) = (rng.random_range(1..9), rng.random_range(1..9));
            let g = Grid::new(w, h);
            let start = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            for order in [SearchOrder::Fifo, SearchOrder::CostOrdered] {
                let mut m = SearchMap::new(&g);
                m.search(&g, start, &[Point::new(-1, -1)], i32::MAX, order);
                for t in &g {
                    let p = t.coordinate();
                    assert_eq!(m.cost_at(&g, p), manhattan(start, p), "{order:?} at {p}");
                }
            }
        }
    }

    #[test]
    fn predecessor_chains_add_up() {
        let mut rng = rand::rng();
        for _ in 0..30 {
            let mut g = random_grid(&mut rng, 7, 7);
            set(&mut g, (0, 0), |t| {
                t.set_blocked(false);
                t.set_start_point(true);
            });
            let cp = (rng.random_range(0..7), rng.random_range(0..7));
            set(&mut g, cp, |t| t.set_checkpoint(true));

            // Cost-ordered costs are exact even when the search stops early.
            let board = Board::new(g.clone(), BoardConfig::with_budget(rng.random_range(0..20)));
            for t in board.grid() {
                if board.cost_at(t.coordinate()) != UNREACHABLE {
                    assert_chain_consistent(&board, t.coordinate());
                }
            }

            // FIFO is exact once the queue drains: add an unreachable
            // checkpoint and an unbounded budget.
            set(&mut g, (6, 6), |t| {
                t.set_blocked(true);
                t.set_checkpoint(true);
            });
            let fifo = Board::new(
                g.clone(),
                BoardConfig {
                    step_budget: i32::MAX,
                    order: SearchOrder::Fifo,
                    ..BoardConfig::default()
                },
            );
            let ordered = Board::new(g, BoardConfig::with_budget(i32::MAX));
            for t in fifo.grid() {
                let p = t.coordinate();
                assert_eq!(fifo.cost_at(p), ordered.cost_at(p), "cost at {p}");
                if fifo.cost_at(p) != UNREACHABLE {
                    assert_chain_consistent(&fifo, p);
                }
            }
        }
    }

    #[test]
    fn early_fifo_stop_can_leave_stale_costs() {
        let mut g = Grid::new(4, 2);
        set(&mut g, (0, 0), |t| t.set_start_point(true));
        set(&mut g, (1, 0), |t| t.add_obstacle(10));
        set(&mut g, (2, 1), |t| t.set_checkpoint(true));
        let far = Point::new(3, 0);

        let fifo = Board::new(
            g.clone(),
            BoardConfig {
                step_budget: 100,
                order: SearchOrder::Fifo,
                ..BoardConfig::default()
            },
        );
        // (3, 0) was reached through the obstacle, then the search stopped on
        // the checkpoint right after improving (2, 0).
        assert_eq!(fifo.cost_at(Point::new(2, 1)), 3);
        assert_eq!(fifo.cost_at(far), 12);
        assert_eq!(fifo.predecessor(far), Some(Point::new(2, 0)));
        assert_eq!(fifo.cost_at(Point::new(2, 0)), 4);
        let route = fifo.path_to(far).unwrap();
        assert_eq!(route.len(), 6);
        let route_cost: i32 = route[1..]
            .iter()
            .map(|&p| fifo.grid().get(p).unwrap().entry_cost())
            .sum();
        assert_eq!(route_cost, 5);
        assert_ne!(route_cost, fifo.cost_at(far));

        let ordered = Board::new(g, BoardConfig::with_budget(100));
        for t in ordered.grid() {
            if ordered.cost_at(t.coordinate()) != UNREACHABLE {
                assert_chain_consistent(&ordered, t.coordinate());
            }
        }
    }

    #[test]
    fn blocked_tiles_stay_unreachable() {
        let mut rng = rand::rng();
        for _ in 0..30 {
            let mut g = random_grid(&mut rng, 6, 6);
            let start = (rng.random_range(0..6), rng.random_range(0..6));
            set(&mut g, start, |t| t.set_start_point(true));
            set(&mut g, (5, 5), |t| t.set_checkpoint(true));
            let board = Board::new(g, BoardConfig::with_budget(i32::MAX));
            for t in board.grid() {
                if t.is_blocked() && t.coordinate() != Point::from(start) {
                    assert_eq!(board.cost_at(t.coordinate()), UNREACHABLE);
                    assert!(!board.is_on_path(t.coordinate()));
                }
            }
        }
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let mut g = random_grid(&mut rng, 6, 5);
            set(&mut g, (0, 0), |t| t.set_start_point(true));
            set(&mut g, (5, 4), |t| t.set_checkpoint(true));
            set(&mut g, (3, 0), |t| t.set_checkpoint(true));
            for order in [SearchOrder::Fifo, SearchOrder::CostOrdered] {
                let mut board = Board::new(
                    g.clone(),
                    BoardConfig {
                        step_budget: 8,
                        order,
                        ..BoardConfig::default()
                    },
                );
                let map = board.search_map().clone();
                let diagnostics = board.diagnostics().to_vec();
                board.recompute();
                assert_eq!(board.search_map(), &map);
                assert_eq!(board.diagnostics(), diagnostics.as_slice());
            }
        }
    }

    #[test]
    fn larger_budget_never_shrinks_reachable_set() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let mut g = random_grid(&mut rng, 6, 6);
            set(&mut g, (2, 2), |t| t.set_start_point(true));
            set(&mut g, (5, 0), |t| t.set_checkpoint(true));
            set(&mut g, (0, 5), |t| t.set_checkpoint(true));
            for order in [SearchOrder::Fifo, SearchOrder::CostOrdered] {
                let mut board = Board::new(
                    g.clone(),
                    BoardConfig {
                        order,
                        ..BoardConfig::default()
                    },
                );
                let mut prev: Vec<Point> = board.reachable().collect();
                for budget in 1..25 {
                    board.set_step_budget(budget);
                    let cur: Vec<Point> = board.reachable().collect();
                    assert!(prev.iter().all(|p| cur.contains(p)), "{order:?} budget {budget}");
                    prev = cur;
                }
            }
        }
    }
}
