//! Independent reference answers for grid searches, and engine-driving helpers.
//!
//! The oracle deliberately shares nothing with the engines beyond the
//! [`Environment`] queries, so agreement between the two is meaningful.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, VecDeque};

use labyrinth_kernel::grid::Cell;
use labyrinth_search::contract::Environment;
use labyrinth_search::node::{StepResult, VisitV1};
use labyrinth_search::search::SearchEngine;

/// Fewest moves from `start` to `goal`, or `None` if unreachable.
pub fn fewest_moves<E: Environment + ?Sized>(env: &E, start: Cell, goal: Cell) -> Option<u64> {
    let mut dist: BTreeMap<Cell, u64> = BTreeMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        if cell == goal {
            return Some(d);
        }
        for next in env.neighbors(cell) {
            dist.entry(next).or_insert_with(|| {
                queue.push_back(next);
                d + 1
            });
        }
    }
    None
}

/// Minimum path cost from `start` to `goal` (Dijkstra), or `None` if unreachable.
pub fn cheapest_cost<E: Environment + ?Sized>(env: &E, start: Cell, goal: Cell) -> Option<u64> {
    let mut best: BTreeMap<Cell, u64> = BTreeMap::from([(start, 0)]);
    let mut heap = BinaryHeap::from([Reverse((0_u64, start))]);
    while let Some(Reverse((g, cell))) = heap.pop() {
        if g > best[&cell] {
            continue;
        }
        if cell == goal {
            return Some(g);
        }
        for next in env.neighbors(cell) {
            let t = g + env.edge_cost(cell, next);
            if !matches!(best.get(&next), Some(&b) if t >= b) {
                best.insert(next, t);
                heap.push(Reverse((t, next)));
            }
        }
    }
    None
}

/// Sum of edge costs along `path`.
pub fn path_cost<E: Environment + ?Sized>(env: &E, path: &[Cell]) -> u64 {
    path.windows(2).map(|p| env.edge_cost(p[0], p[1])).sum()
}

/// Whether every consecutive pair in `path` is a forward-traversable move.
pub fn path_is_traversable<E: Environment + ?Sized>(env: &E, path: &[Cell]) -> bool {
    path.windows(2).all(|p| env.traversable(p[0], p[1]))
}

/// Step until the goal is yielded. Returns the goal visit and the number of
/// steps taken, or `None` on exhaustion or after `cap` steps.
pub fn drive_to_goal(engine: &mut dyn SearchEngine, cap: usize) -> Option<(VisitV1, usize)> {
    let goal = engine.goal();
    for step in 1..=cap {
        match engine.step() {
            StepResult::Visited(v) if v.cell == goal => return Some((v, step)),
            StepResult::Visited(_) => {}
            StepResult::Exhausted => return None,
        }
    }
    None
}

/// Step until exhaustion, collecting every yielded cell.
///
/// # Panics
///
/// Panics if the engine is still yielding after `cap` steps.
pub fn drain(engine: &mut dyn SearchEngine, cap: usize) -> Vec<Cell> {
    let mut cells = Vec::new();
    for _ in 0..cap {
        match engine.step() {
            StepResult::Visited(v) => cells.push(v.cell),
            StepResult::Exhausted => return cells,
        }
    }
    panic!("engine still yielding after {cap} steps");
}
