//! Small hand-built worlds, each isolating one behaviour.

use labyrinth_kernel::grid::{Cell, Direction};
use labyrinth_kernel::maze::{MazeError, MazeV1};

use super::WorldV1;

/// Two open cells side by side, zero cost: the goal is one move away.
///
/// # Errors
///
/// Propagates [`MazeError`] from layout construction.
pub fn corridor() -> Result<WorldV1, MazeError> {
    Ok(WorldV1 {
        name: "corridor",
        maze: MazeV1::open_field(2, 1, 0)?,
        start: Cell::new(0, 0),
        goal: Cell::new(1, 0),
    })
}

/// 3x3 field whose centre start has every exit closed.
///
/// # Errors
///
/// Propagates [`MazeError`] from layout construction.
pub fn isolated_start() -> Result<WorldV1, MazeError> {
    let start = Cell::new(1, 1);
    let mut maze = MazeV1::open_field(3, 3, 1)?;
    for d in Direction::ALL {
        maze.wall(start, d)?;
    }
    Ok(WorldV1 {
        name: "isolated_start",
        maze,
        start,
        goal: Cell::new(2, 2),
    })
}

/// 3x1 corridor whose first passage only opens eastward.
///
/// The goal is reachable from the start, but nothing leads back.
///
/// # Errors
///
/// Propagates [`MazeError`] from layout construction.
pub fn one_way_trap() -> Result<WorldV1, MazeError> {
    let mut maze = MazeV1::open_field(3, 1, 0)?;
    maze.carve_one_way(Cell::new(0, 0), Direction::Right)?;
    Ok(WorldV1 {
        name: "one_way_trap",
        maze,
        start: Cell::new(0, 0),
        goal: Cell::new(2, 0),
    })
}

/// 3x2 field where the direct route crosses a cell costing 50.
///
/// Fewest moves: 2, cost 52. Cheapest: 4 moves along the bottom, cost 4.
///
/// # Errors
///
/// Propagates [`MazeError`] from layout construction.
pub fn weighted_detour() -> Result<WorldV1, MazeError> {
    let mut maze = MazeV1::open_field(3, 2, 0)?;
    maze.set_cost(Cell::new(1, 0), 50)?;
    Ok(WorldV1 {
        name: "weighted_detour",
        maze,
        start: Cell::new(0, 0),
        goal: Cell::new(2, 0),
    })
}
