//! The step protocol shared by all strategies, and strategy dispatch.
//!
//! # Protocol
//!
//! Each `step()` call:
//! 1. Expands the node returned by the previous call, if any (neighbour
//!    evaluation, parent recording, frontier pushes).
//! 2. Pops until an acceptable node is found (stale entries are discarded
//!    inside the same call) and returns it as [`StepResult::Visited`].
//! 3. Returns [`StepResult::Exhausted`] once the frontier is empty, and on
//!    every call after that.
//!
//! Reaching the goal does not stop the engine. The driver compares the
//! yielded cell against the goal and decides whether to continue.

use labyrinth_kernel::grid::Cell;

use crate::astar::AStarEngine;
use crate::breadth_first::BreadthFirstEngine;
use crate::contract::Environment;
use crate::depth_first::DepthFirstEngine;
use crate::error::{PathError, SearchError};
use crate::node::{EngineStatsV1, SearchMode, StepResult, Strategy};
use crate::path::{reconstruct, ParentMap};
use crate::uniform_cost::UniformCostEngine;

/// A suspendable search over one environment, one start, one goal.
pub trait SearchEngine {
    fn strategy(&self) -> Strategy;

    fn mode(&self) -> SearchMode;

    fn start(&self) -> Cell;

    fn goal(&self) -> Cell;

    /// Advance by one accepted node. See the module docs for the protocol.
    fn step(&mut self) -> StepResult;

    /// Whether the goal has been returned by `step()` at least once.
    fn goal_reached(&self) -> bool;

    /// Parent links recorded so far.
    fn parents(&self) -> &ParentMap;

    fn stats(&self) -> EngineStatsV1;

    /// Start-to-goal path from the current parent links.
    ///
    /// Side-effect free and repeatable. Only answers once the goal has been
    /// yielded: a goal that is merely queued may still be relinked.
    ///
    /// # Errors
    ///
    /// - [`PathError::UnsafeLinkage`] in tree mode.
    /// - [`PathError::NotFound`] before the goal has been yielded.
    /// - Otherwise whatever [`reconstruct`] reports.
    fn reconstruct_path(&self) -> Result<Vec<Cell>, PathError> {
        if self.mode() == SearchMode::Tree {
            return Err(PathError::UnsafeLinkage);
        }
        if !self.goal_reached() {
            return Err(PathError::NotFound);
        }
        reconstruct(self.parents(), self.start(), self.goal())
    }
}

/// Reject endpoints the environment reports as out of bounds.
pub(crate) fn validate_endpoints<E: Environment + ?Sized>(
    env: &E,
    start: Cell,
    goal: Cell,
) -> Result<(), SearchError> {
    for (role, cell) in [("start", start), ("goal", goal)] {
        if !env.contains(cell) {
            return Err(SearchError::out_of_bounds(
                role,
                cell,
                env.width(),
                env.height(),
            ));
        }
    }
    Ok(())
}

/// Build an engine for `strategy` bound to `env`.
///
/// # Errors
///
/// [`SearchError::InvalidInput`] if `start` or `goal` lies outside `env`.
pub fn new_engine<'a, E: Environment + ?Sized>(
    strategy: Strategy,
    env: &'a E,
    start: Cell,
    goal: Cell,
    mode: SearchMode,
) -> Result<Box<dyn SearchEngine + 'a>, SearchError> {
    Ok(match strategy {
        Strategy::BreadthFirst => Box::new(BreadthFirstEngine::new(env, start, goal, mode)?),
        Strategy::DepthFirst => Box::new(DepthFirstEngine::new(env, start, goal, mode)?),
        Strategy::UniformCost => Box::new(UniformCostEngine::new(env, start, goal, mode)?),
        Strategy::AStar => Box::new(AStarEngine::new(env, start, goal, mode)?),
    })
}
