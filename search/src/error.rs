//! Typed search errors.
//!
//! `SearchError` represents construction-time failures only. Running out of
//! frontier is an expected outcome expressed as
//! [`crate::node::StepResult::Exhausted`], never as an error.

use labyrinth_kernel::grid::Cell;

/// Typed failure for engine construction and configuration parsing.
///
/// No partial engine exists when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start, goal, strategy name, or mode name rejected.
    InvalidInput { detail: String },
}

impl SearchError {
    pub(crate) fn out_of_bounds(role: &str, cell: Cell, width: u32, height: u32) -> Self {
        Self::InvalidInput {
            detail: format!("{role} {cell} is outside the {width}x{height} environment"),
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { detail } => write!(f, "invalid search input: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Why a start-to-goal path could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The goal has no parent entry: the search never reached it.
    NotFound,
    /// Tree-mode linkage is not guaranteed acyclic, so the walk is refused.
    UnsafeLinkage,
    /// The parent chain revisited a cell before reaching the start.
    CycleDetected { at: Cell },
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "goal was never reached"),
            Self::UnsafeLinkage => {
                write!(f, "path reconstruction is refused for tree-mode parent links")
            }
            Self::CycleDetected { at } => write!(f, "parent chain loops at {at}"),
        }
    }
}

impl std::error::Error for PathError {}
