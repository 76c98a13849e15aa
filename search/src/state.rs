//! Per-run bookkeeping shared by every strategy.

use std::collections::{BTreeMap, BTreeSet};
use std::mem::size_of;
use std::time::Instant;

use labyrinth_kernel::grid::Cell;

use crate::node::{EngineStatsV1, StepResult, VisitV1};
use crate::path::ParentMap;

/// Closed set, best costs, parent links, counters, and the suspended node.
///
/// Owned by exactly one engine and created fresh for every run.
#[derive(Debug)]
pub(crate) struct RunState {
    goal: Cell,
    /// Set once the goal has been accepted; never cleared.
    pub goal_reached: bool,
    pub visited: BTreeSet<Cell>,
    pub best: BTreeMap<Cell, u64>,
    pub parents: ParentMap,
    pub stats: EngineStatsV1,
    /// Node yielded by the previous `step()`, expanded at the start of the next.
    pub pending: Option<(Cell, u64)>,
    pub exhausted: bool,
}

impl RunState {
    pub fn new(start: Cell, goal: Cell) -> Self {
        Self {
            goal,
            goal_reached: false,
            visited: BTreeSet::new(),
            best: BTreeMap::new(),
            parents: ParentMap::new(start),
            stats: EngineStatsV1::default(),
            pending: None,
            exhausted: false,
        }
    }

    /// Best known cumulative cost of `cell` (`u64::MAX` if unseen).
    pub fn best_cost(&self, cell: Cell) -> u64 {
        self.best.get(&cell).copied().unwrap_or(u64::MAX)
    }

    /// Lower the best known cost of `cell`. Never raises it.
    pub fn improve_best(&mut self, cell: Cell, cost: u64) {
        let entry = self.best.entry(cell).or_insert(cost);
        if cost < *entry {
            *entry = cost;
        }
    }

    pub fn reject(&mut self) {
        self.stats.rejected += 1;
    }

    pub fn discard_stale(&mut self) {
        self.stats.stale_discarded += 1;
    }

    /// Mark the frontier as drained. Every later `step()` returns this again.
    pub fn exhaust(&mut self) -> StepResult {
        self.exhausted = true;
        self.pending = None;
        StepResult::Exhausted
    }

    /// Record `cell` as accepted and build the visit handed to the caller.
    pub fn accept(
        &mut self,
        cell: Cell,
        cost: u64,
        text: String,
        path_cost: Option<u64>,
        popped_at: Instant,
        frontier_bytes: u64,
    ) -> StepResult {
        let duration_hint_ns = u64::try_from(popped_at.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.pending = Some((cell, cost));
        self.stats.expansions += 1;
        if cell == self.goal {
            self.goal_reached = true;
        }
        StepResult::Visited(VisitV1 {
            cell,
            text,
            path_cost,
            duration_hint_ns,
            memory_hint_bytes: self.approx_bytes() + frontier_bytes,
        })
    }

    /// Rough size of the run state's collections.
    pub fn approx_bytes(&self) -> u64 {
        let cell = size_of::<Cell>();
        let visited = self.visited.len() * cell;
        let best = self.best.len() * (cell + size_of::<u64>());
        let parents = self.parents.len() * (cell + size_of::<Option<Cell>>());
        (visited + best + parents) as u64
    }
}
