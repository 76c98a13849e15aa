//! A* search with the Manhattan-distance heuristic.
//!
//! Every move costs at least [`crate::contract::BASE_MOVE_COST`], so Manhattan
//! distance never overestimates and never drops by more than one move's cost.
//! Graph mode therefore closes each cell at its optimal cost on first pop.
//!
//! Entries are keyed `(g + h, g, creation_order)`. A neighbour is pushed in
//! graph mode only when the new cost strictly improves its best known cost;
//! older copies are discarded lazily on pop.

use std::time::Instant;

use labyrinth_kernel::grid::Cell;

use crate::contract::Environment;
use crate::error::SearchError;
use crate::frontier::CostFrontier;
use crate::node::{EngineStatsV1, SearchMode, StepResult, Strategy};
use crate::path::ParentMap;
use crate::search::{validate_endpoints, SearchEngine};
use crate::state::RunState;

/// Heuristic-guided engine. Finds a minimum-cost path in graph mode.
pub struct AStarEngine<'a, E: Environment + ?Sized> {
    env: &'a E,
    start: Cell,
    goal: Cell,
    mode: SearchMode,
    frontier: CostFrontier,
    state: RunState,
}

impl<'a, E: Environment + ?Sized> AStarEngine<'a, E> {
    /// # Errors
    ///
    /// [`SearchError::InvalidInput`] if `start` or `goal` is out of bounds.
    pub fn new(env: &'a E, start: Cell, goal: Cell, mode: SearchMode) -> Result<Self, SearchError> {
        validate_endpoints(env, start, goal)?;
        let mut state = RunState::new(start, goal);
        let mut frontier = CostFrontier::new();
        state.improve_best(start, 0);
        frontier.push(start, start.manhattan_distance(goal), 0);
        Ok(Self {
            env,
            start,
            goal,
            mode,
            frontier,
            state,
        })
    }

    fn heuristic(&self, cell: Cell) -> u64 {
        cell.manhattan_distance(self.goal)
    }

    fn expand(&mut self, current: Cell, cost: u64) {
        let came_from = self.state.parents.parent_of(current);
        for next in self.env.neighbors(current) {
            if self.mode == SearchMode::Tree && came_from == Some(next) {
                self.state.reject();
                continue;
            }

            let tentative = cost.saturating_add(self.env.edge_cost(current, next));
            if self.mode == SearchMode::Graph && tentative >= self.state.best_cost(next) {
                self.state.reject();
                continue;
            }

            match self.mode {
                SearchMode::Graph => self.state.parents.record(next, current),
                SearchMode::Tree => self.state.parents.record_first(next, current),
            };
            self.state.improve_best(next, tentative);
            let priority = tentative.saturating_add(self.heuristic(next));
            self.frontier.push(next, priority, tentative);
        }
    }
}

impl<E: Environment + ?Sized> SearchEngine for AStarEngine<'_, E> {
    fn strategy(&self) -> Strategy {
        Strategy::AStar
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
        if let Some((current, cost)) = self.state.pending.take() {
            self.expand(current, cost);
        }

        let popped_at = Instant::now();
        loop {
            let Some(entry) = self.frontier.pop() else {
                return self.state.exhaust();
            };
            if self.mode == SearchMode::Graph && !self.state.visited.insert(entry.cell) {
                self.state.discard_stale();
                continue;
            }
            let text = format!(
                "current node: {}   g: {}   f: {}",
                entry.cell, entry.cost, entry.priority
            );
            let frontier_bytes = self.frontier.approx_bytes();
            return self.state.accept(
                entry.cell,
                entry.cost,
                text,
                Some(entry.cost),
                popped_at,
                frontier_bytes,
            );
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
