//! Depth-first search.
//!
//! Graph mode allows duplicate stack entries and checks the closed set on pop;
//! an entry whose cell was closed in the meantime is discarded and the pop
//! repeats within the same step. A re-push overwrites the cell's parent so the
//! link always matches the copy that will surface first.

use std::time::Instant;

use labyrinth_kernel::grid::Cell;

use crate::contract::Environment;
use crate::error::SearchError;
use crate::frontier::LifoFrontier;
use crate::node::{EngineStatsV1, SearchMode, StepResult, Strategy};
use crate::path::ParentMap;
use crate::search::{validate_endpoints, SearchEngine};
use crate::state::RunState;

/// LIFO-ordered engine. Complete in graph mode, no optimality.
pub struct DepthFirstEngine<'a, E: Environment + ?Sized> {
    env: &'a E,
    start: Cell,
    goal: Cell,
    mode: SearchMode,
    frontier: LifoFrontier,
    state: RunState,
}

impl<'a, E: Environment + ?Sized> DepthFirstEngine<'a, E> {
    /// # Errors
    ///
    /// [`SearchError::InvalidInput`] if `start` or `goal` is out of bounds.
    pub fn new(env: &'a E, start: Cell, goal: Cell, mode: SearchMode) -> Result<Self, SearchError> {
        validate_endpoints(env, start, goal)?;
        let mut frontier = LifoFrontier::new();
        frontier.push(start);
        Ok(Self {
            env,
            start,
            goal,
            mode,
            frontier,
            state: RunState::new(start, goal),
        })
    }

    fn expand(&mut self, current: Cell) {
        let came_from = self.state.parents.parent_of(current);
        for next in self.env.neighbors(current) {
            match self.mode {
                SearchMode::Graph => {
                    if self.state.visited.contains(&next) {
                        self.state.reject();
                        continue;
                    }
                    self.state.parents.record(next, current);
                }
                SearchMode::Tree => {
                    if came_from == Some(next) {
                        self.state.reject();
                        continue;
                    }
                    self.state.parents.record_first(next, current);
                }
            }
            self.frontier.push(next);
        }
    }
}

impl<E: Environment + ?Sized> SearchEngine for DepthFirstEngine<'_, E> {
    fn strategy(&self) -> Strategy {
        Strategy::DepthFirst
    }

    fn mode(&self) -> SearchMode {
        self.mode
    }

    fn start(&self) -> Cell {
        self.start
    }

    fn goal(&self) -> Cell {
        self.goal
    }

    fn step(&mut self) -> StepResult {
        if self.state.exhausted {
            return StepResult::Exhausted;
        }
        if let Some((current, _)) = self.state.pending.take() {
            self.expand(current);
        }

        let popped_at = Instant::now();
        loop {
            let Some(cell) = self.frontier.pop() else {
                return self.state.exhaust();
            };
            if self.mode == SearchMode::Graph && !self.state.visited.insert(cell) {
                self.state.discard_stale();
                continue;
            }
            let frontier_bytes = self.frontier.approx_bytes();
            return self
                .state
                .accept(cell, 0, String::new(), None, popped_at, frontier_bytes);
        }
    }

    fn goal_reached(&self) -> bool {
        self.state.goal_reached
    }

    fn parents(&self) -> &ParentMap {
        &self.state.parents
    }

    fn stats(&self) -> EngineStatsV1 {
        EngineStatsV1 {
            pushes: self.frontier.pushes(),
            frontier_high_water: self.frontier.high_water(),
            ..self.state.stats
        }
    }
}
