//! Breadth-first search.
//!
//! Graph mode marks cells visited when they are pushed, so every cell enters
//! the queue at most once and pops are never stale. Tree mode keeps no closed
//! set and only refuses to step straight back to the current cell's parent.

use std::time::Instant;

use labyrinth_kernel::grid::Cell;

use crate::contract::Environment;
use crate::error::SearchError;
use crate::frontier::FifoFrontier;
use crate::node::{EngineStatsV1, SearchMode, StepResult, Strategy};
use crate::path::ParentMap;
use crate::search::{validate_endpoints, SearchEngine};
use crate::state::RunState;

/// FIFO-ordered engine. Finds a path with the fewest moves in graph mode.
pub struct BreadthFirstEngine<'a, E: Environment + ?Sized> {
    env: &'a E,
    start: Cell,
    goal: Cell,
    mode: SearchMode,
    frontier: FifoFrontier,
    state: RunState,
}

impl<'a, E: Environment + ?Sized> BreadthFirstEngine<'a, E> {
    /// # Errors
    ///
    /// [`SearchError::InvalidInput`] if `start` or `goal` is out of bounds.
    pub fn new(env: &'a E, start: Cell, goal: Cell, mode: SearchMode) -> Result<Self, SearchError> {
        validate_endpoints(env, start, goal)?;
        let mut state = RunState::new(start, goal);
        let mut frontier = FifoFrontier::new();
        if mode == SearchMode::Graph {
            state.visited.insert(start);
        }
        frontier.push(start);
        Ok(Self {
            env,
            start,
            goal,
            mode,
            frontier,
            state,
        })
    }

    fn expand(&mut self, current: Cell) {
        let came_from = self.state.parents.parent_of(current);
        for next in self.env.neighbors(current) {
            match self.mode {
                SearchMode::Graph => {
                    if !self.state.visited.insert(next) {
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

impl<E: Environment + ?Sized> SearchEngine for BreadthFirstEngine<'_, E> {
    fn strategy(&self) -> Strategy {
        Strategy::BreadthFirst
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
        let Some(cell) = self.frontier.pop() else {
            return self.state.exhaust();
        };
        let frontier_bytes = self.frontier.approx_bytes();
        self.state
            .accept(cell, 0, String::new(), None, popped_at, frontier_bytes)
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
