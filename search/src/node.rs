//! Step protocol types, strategy/mode tags, and the cost-frontier ordering key.

use std::str::FromStr;

use labyrinth_kernel::grid::Cell;

use crate::error::SearchError;

/// Traversal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchMode {
    /// Tracks a closed set; never re-expands a finalized cell. Terminates on
    /// finite grids.
    Graph,
    /// No closed set; cells may be expanded repeatedly. May not terminate on
    /// cyclic grids.
    Tree,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::Graph, SearchMode::Tree];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Tree => "tree",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graph" => Ok(Self::Graph),
            "tree" => Ok(Self::Tree),
            other => Err(SearchError::InvalidInput {
                detail: format!("unknown search mode {other:?} (expected graph or tree)"),
            }),
        }
    }
}

/// Search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// FIFO frontier.
    BreadthFirst,
    /// LIFO frontier.
    DepthFirst,
    /// Ascending cumulative cost.
    UniformCost,
    /// Ascending cumulative cost plus Manhattan distance to the goal.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
    ];

    /// Short label used in reports and fixture output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
        }
    }

    /// Whether the strategy tracks cumulative cost.
    #[must_use]
    pub const fn is_cost_aware(self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "ucs" | "uniform-cost" => Ok(Self::UniformCost),
            "astar" | "a*" => Ok(Self::AStar),
            other => Err(SearchError::InvalidInput {
                detail: format!("unknown strategy {other:?}"),
            }),
        }
    }
}

/// A node accepted for expansion, handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitV1 {
    pub cell: Cell,
    /// Free-form diagnostic line. Empty for strategies without cost tracking.
    pub text: String,
    /// Cumulative cost of the popped entry (cost-aware strategies only).
    pub path_cost: Option<u64>,
    /// Wall time spent popping, in nanoseconds. Advisory.
    pub duration_hint_ns: u64,
    /// Approximate bytes held by the run state. Advisory.
    pub memory_hint_bytes: u64,
}

/// Result of one `step()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// A node was popped and accepted.
    Visited(VisitV1),
    /// The frontier is empty. Terminal: every later call returns this again.
    Exhausted,
}

impl StepResult {
    /// The visited cell, if any.
    #[must_use]
    pub fn cell(&self) -> Option<Cell> {
        match self {
            Self::Visited(v) => Some(v.cell),
            Self::Exhausted => None,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Counters maintained by every engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStatsV1 {
    /// Accepted pops, i.e. `Visited` results returned so far.
    pub expansions: u64,
    /// Popped entries discarded because the cell was already closed.
    pub stale_discarded: u64,
    /// Frontier insertions.
    pub pushes: u64,
    /// Neighbours rejected before insertion (closed, parent, or no improvement).
    pub rejected: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// Ordering key for cost frontiers: `(priority, cost, creation_order)`.
///
/// `priority` is the cumulative cost for uniform-cost search and
/// `cost + heuristic` for A*. Lower is better; ties go to the lower cumulative
/// cost, then to the older entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: u64,
    pub cost: u64,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.cost.cmp(&other.cost))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
