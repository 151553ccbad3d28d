//! **tileboard-core** — data model for grid-based tile boards.
//!
//! This crate provides the types shared by the rest of the *tileboard*
//! workspace: geometry primitives, tile modifiers, the permanent per-tile
//! configuration and the [`Grid`] that owns every tile of a board.
//!
//! Nothing here performs a search. Per-query state (costs, predecessors,
//! path membership) lives in `tileboard-paths`.

pub mod geom;
pub mod grid;
pub mod tile;

pub use geom::{Point, Range};
pub use grid::Grid;
pub use tile::{Modifiers, Tile};
