//! Tile modifiers ([`Modifiers`]) and the permanent tile configuration
//! ([`Tile`]).

use std::ops::{BitAnd, BitOr};

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Bitmask of tile modifiers.
///
/// Any combination is representable. A blocked tile may still be flagged as
/// a checkpoint or start point; searches decide separately that it cannot be
/// entered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers(pub u32);

impl Modifiers {
    pub const NONE: Self = Self(0);
    pub const BLOCKED: Self = Self(1 << 0);
    pub const OBSTACLE: Self = Self(1 << 1);
    pub const CHECKPOINT: Self = Self(1 << 2);
    pub const PORTAL: Self = Self(1 << 3);
    pub const START_POINT: Self = Self(1 << 4);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set every bit of `other`.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear every bit of `other`.
    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Set or clear the bits of `other` depending on `on`.
    #[inline]
    pub fn set(&mut self, other: Self, on: bool) {
        if on {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }
}

impl BitOr for Modifiers {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// Entry cost of a tile without an obstacle.
pub const DEFAULT_ENTRY_COST: i32 = 1;

/// The long-lived configuration of one board tile.
///
/// A tile knows its coordinate and its modifiers. It carries no search
/// state: costs, predecessors and path membership are recomputed per query
/// and stored outside the tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    coordinate: Point,
    modifiers: Modifiers,
    penalty: i32,
    portal_target: Point,
}

impl Tile {
    /// Create an unmodified tile at `coordinate`.
    pub fn new(coordinate: Point) -> Self {
        Self {
            coordinate,
            modifiers: Modifiers::NONE,
            penalty: DEFAULT_ENTRY_COST,
            portal_target: Point::ZERO,
        }
    }

    /// The tile's coordinate. Fixed for the lifetime of the tile.
    #[inline]
    pub fn coordinate(&self) -> Point {
        self.coordinate
    }

    /// The raw modifier mask.
    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.modifiers.contains(Modifiers::BLOCKED)
    }

    #[inline]
    pub fn is_checkpoint(&self) -> bool {
        self.modifiers.contains(Modifiers::CHECKPOINT)
    }

    #[inline]
    pub fn is_start_point(&self) -> bool {
        self.modifiers.contains(Modifiers::START_POINT)
    }

    /// The movement penalty, if the tile is an obstacle.
    #[inline]
    pub fn obstacle(&self) -> Option<i32> {
        self.modifiers
            .contains(Modifiers::OBSTACLE)
            .then_some(self.penalty)
    }

    /// The portal target coordinate, if the tile is a portal.
    ///
    /// The target may not resolve to a tile on the board.
    #[inline]
    pub fn portal(&self) -> Option<Point> {
        self.modifiers
            .contains(Modifiers::PORTAL)
            .then_some(self.portal_target)
    }

    /// Weight charged for moving into this tile.
    ///
    /// 1 by default, or the obstacle penalty. Penalties below 1 are raised to
    /// 1 so that every edge weight stays positive. Blocked tiles are never
    /// entered, so their entry cost is meaningless.
    #[inline]
    pub fn entry_cost(&self) -> i32 {
        match self.obstacle() {
            Some(penalty) => penalty.max(DEFAULT_ENTRY_COST),
            None => DEFAULT_ENTRY_COST,
        }
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.modifiers.set(Modifiers::BLOCKED, blocked);
    }

    pub fn set_checkpoint(&mut self, checkpoint: bool) {
        self.modifiers.set(Modifiers::CHECKPOINT, checkpoint);
    }

    pub fn set_start_point(&mut self, start_point: bool) {
        self.modifiers.set(Modifiers::START_POINT, start_point);
    }

    /// Mark the tile as an obstacle with the given movement penalty.
    pub fn add_obstacle(&mut self, penalty: i32) {
        self.modifiers.insert(Modifiers::OBSTACLE);
        self.penalty = penalty;
    }

    pub fn remove_obstacle(&mut self) {
        self.modifiers.remove(Modifiers::OBSTACLE);
    }

    /// Turn the tile into a one-way portal towards `target`.
    pub fn add_portal(&mut self, target: Point) {
        self.modifiers.insert(Modifiers::PORTAL);
        self.portal_target = target;
    }

    pub fn remove_portal(&mut self) {
        self.modifiers.remove(Modifiers::PORTAL);
    }

    /// Copy modifiers, penalty and portal target from `other`, keeping this
    /// tile's coordinate.
    pub fn copy_modifiers_from(&mut self, other: &Tile) {
        self.modifiers = other.modifiers;
        self.penalty = other.penalty;
        self.portal_target = other.portal_target;
    }
}
