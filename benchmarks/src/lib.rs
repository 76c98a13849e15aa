//! Shared helpers for labyrinth benchmark suites.

use labyrinth_kernel::grid::Cell;
use labyrinth_kernel::maze::MazeV1;
use labyrinth_search::node::{SearchMode, StepResult, Strategy};
use labyrinth_search::search::new_engine;

/// Square open field of `side` cells with uniform `cost`.
///
/// # Panics
///
/// Panics if the field cannot be built. Benchmark setup failures are fatal.
#[must_use]
pub fn open_field(side: usize, cost: u32) -> MazeV1 {
    MazeV1::open_field(side, side, cost).expect("open field")
}

/// Far corner of a square field of `side` cells.
#[must_use]
pub fn far_corner(side: usize) -> Cell {
    let edge = i32::try_from(side).unwrap_or(i32::MAX) - 1;
    Cell::new(edge, edge)
}

/// Step a graph-mode engine until the goal is yielded or the frontier
/// drains. Returns the number of steps taken.
///
/// # Panics
///
/// Panics if the endpoints are rejected.
#[must_use]
pub fn steps_to_goal(maze: &MazeV1, strategy: Strategy, start: Cell, goal: Cell) -> u64 {
    let mut engine =
        new_engine(strategy, maze, start, goal, SearchMode::Graph).expect("endpoints in bounds");
    let mut steps = 0;
    loop {
        match engine.step() {
            StepResult::Visited(v) => {
                steps += 1;
                if v.cell == goal {
                    return steps;
                }
            }
            StepResult::Exhausted => return steps,
        }
    }
}
