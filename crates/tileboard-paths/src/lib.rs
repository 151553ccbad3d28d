//! Reachability and checkpoint paths for grid-based tile boards.
//!
//! Given a [`Grid`](tileboard_core::Grid) whose tiles carry modifiers
//! (blocked, obstacle, checkpoint, start point, portal), this crate computes
//! the cost of reaching every tile from the start tile within a step budget
//! and marks the cheapest path from the start to each checkpoint.
//!
//! - [`Board`] is the orchestrator: it scans the grid, runs one search and
//!   extracts every checkpoint path whenever the board changes.
//! - [`SearchMap`] holds the per-query state. It is rebuilt for every
//!   recomputation and never stored on the tiles themselves.
//! - [`Pather`] / [`WeightedPather`] describe the board graph; [`Grid`]
//!   implements them with orthogonal moves plus one-way portal edges.
//!
//! [`Grid`]: tileboard_core::Grid
//!
//! # Search orders
//!
//! | [`SearchOrder`] | Queue | Notes |
//! |---|---|---|
//! | `Fifo` | `VecDeque` | label-correcting relaxation, may revisit tiles |
//! | `CostOrdered` | `BinaryHeap` | Dijkstra, every tile is settled once |

mod board;
mod config;
mod diagnostic;
mod dijkstra;
mod distance;
mod fifo;
mod neighbors;
mod path;
mod search;
mod traits;

pub use board::{Board, TileView};
pub use config::{BoardConfig, SearchOrder, StartPolicy};
pub use diagnostic::Diagnostic;
pub use distance::manhattan;
pub use neighbors::{dangling_portals, portal_exits};
pub use search::{SearchMap, SearchStats, UNREACHABLE};
pub use traits::{Pather, WeightedPather};
