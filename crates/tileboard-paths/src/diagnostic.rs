use std::fmt;

use tileboard_core::Point;

/// A non-fatal finding of a board recomputation.
///
/// None of these abort a recomputation; they explain why fewer tiles are
/// reachable or marked than the board author might expect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// No tile is flagged as start point.
    NoStartPoint,
    /// No tile is flagged as checkpoint.
    NoCheckpoints,
    /// Several start points; `chosen` was used, `others` were ignored.
    AmbiguousStart { chosen: Point, others: Vec<Point> },
    /// Several start points and the board refuses to pick one.
    RejectedStart { candidates: Vec<Point> },
    /// The search never reached this checkpoint.
    UnreachableCheckpoint(Point),
    /// A portal whose target coordinate has no tile.
    DanglingPortal { from: Point, to: Point },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoStartPoint => write!(f, "no start point"),
            Diagnostic::NoCheckpoints => write!(f, "no checkpoints"),
            Diagnostic::AmbiguousStart { chosen, others } => {
                write!(f, "{} start points, using {chosen}", others.len() + 1)
            }
            Diagnostic::RejectedStart { candidates } => {
                write!(f, "{} start points, none used", candidates.len())
            }
            Diagnostic::UnreachableCheckpoint(p) => write!(f, "checkpoint {p} unreachable"),
            Diagnostic::DanglingPortal { from, to } => {
                write!(f, "portal at {from} leads to missing tile {to}")
            }
        }
    }
}
