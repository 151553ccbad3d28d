/// Order in which the search expands queued tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOrder {
    /// First in, first out. Tiles may be expanded several times, and a
    /// checkpoint found before the queue drains may still carry a cost that
    /// a later expansion would have lowered.
    ///
    /// When the search stops early, a tile may also keep a stale cost while
    /// its predecessor was improved afterwards. Its predecessor chain then
    /// describes a route cheaper than its recorded cost. Costs and chains
    /// agree once the queue has drained.
    Fifo,
    /// Cheapest first. Every expanded tile already has its final cost.
    #[default]
    CostOrdered,
}

/// What to do when more than one tile is flagged as start point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartPolicy {
    /// The last start point in grid enumeration order is used.
    #[default]
    LastWins,
    /// No search runs until the ambiguity is removed.
    Reject,
}

/// Settings of a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Movement allowance. A tile is reachable if its cost from the start
    /// is at most this value. Also bounds how far the search explores.
    pub step_budget: i32,
    pub order: SearchOrder,
    pub start_policy: StartPolicy,
}

impl BoardConfig {
    /// Default settings with the given step budget.
    pub fn with_budget(step_budget: i32) -> Self {
        Self {
            step_budget,
            ..Self::default()
        }
    }
}
