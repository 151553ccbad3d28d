//! The owning tile arena of a board.
//!
//! [`Grid`] stores tiles in a flat `Vec` and indexes them by coordinate.
//! Tile indices are the handles searches use for back-references, so a
//! grid must not be modified while a search result computed from it is
//! still being read.

use std::collections::HashMap;

use crate::geom::{Point, Range};
use crate::tile::Tile;

/// Set of tiles keyed by integer coordinate.
///
/// No two tiles share a coordinate. The nominal size is informational: a
/// board may have holes, and tiles may sit outside of it.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    bounds: Range,
    tiles: Vec<Tile>,
    index: HashMap<Point, usize>,
}

impl Grid {
    /// Create a `width` × `height` grid with one unmodified tile per cell,
    /// enumerated in row-major order.
    pub fn new(width: i32, height: i32) -> Self {
        let mut grid = Self::empty(width, height);
        for p in grid.bounds.iter() {
            grid.insert(Tile::new(p));
        }
        grid
    }

    /// Create a grid of the given nominal size without any tile.
    pub fn empty(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            bounds,
            tiles: Vec::with_capacity(bounds.len()),
            index: HashMap::with_capacity(bounds.len()),
        }
    }

    /// The nominal board rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Nominal size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether a tile exists at `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p)
    }

    /// Index of the tile at `p`, if any.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.index.get(&p).copied()
    }

    /// Tile at index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[inline]
    pub fn tile(&self, idx: usize) -> &Tile {
        &self.tiles[idx]
    }

    /// Coordinate of the tile at index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.tiles[idx].coordinate()
    }

    /// Tile at `p`, if any.
    pub fn get(&self, p: Point) -> Option<&Tile> {
        self.index_of(p).map(|i| &self.tiles[i])
    }

    /// Mutable tile at `p`, if any.
    pub fn get_mut(&mut self, p: Point) -> Option<&mut Tile> {
        let i = self.index_of(p)?;
        Some(&mut self.tiles[i])
    }

    /// Add a tile, replacing and returning any tile with the same
    /// coordinate. A replacement keeps the old tile's index.
    pub fn insert(&mut self, tile: Tile) -> Option<Tile> {
        let p = tile.coordinate();
        match self.index.get(&p) {
            Some(&i) => Some(std::mem::replace(&mut self.tiles[i], tile)),
            None => {
                self.index.insert(p, self.tiles.len());
                self.tiles.push(tile);
                None
            }
        }
    }

    /// Remove and return the tile at `p`.
    ///
    /// The last tile of the enumeration takes the removed tile's index.
    pub fn remove(&mut self, p: Point) -> Option<Tile> {
        let i = self.index.remove(&p)?;
        let tile = self.tiles.swap_remove(i);
        if let Some(moved) = self.tiles.get(i) {
            self.index.insert(moved.coordinate(), i);
        }
        Some(tile)
    }

    /// Rebuild the grid for a new size.
    ///
    /// Every cell of the new rectangle gets a tile. Cells that already had a
    /// tile keep its modifiers; tiles outside the new rectangle are dropped.
    pub fn regenerate(&mut self, width: i32, height: i32) {
        let old = std::mem::replace(self, Self::empty(width, height));
        for p in self.bounds.iter() {
            let mut tile = Tile::new(p);
            if let Some(prev) = old.get(p) {
                tile.copy_modifiers_from(prev);
            }
            self.insert(tile);
        }
    }

    /// Iterator over all tiles in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Mutable iterator over all tiles in enumeration order.
    ///
    /// Coordinates cannot be changed through it, so the index stays valid.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Tile> {
        self.tiles.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
