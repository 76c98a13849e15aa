//! Environment contract consumed by every strategy.

use labyrinth_kernel::grid::{Cell, Direction};
use labyrinth_kernel::maze::MazeV1;

/// Fixed cost of one move, added to the destination cell's entry cost.
pub const BASE_MOVE_COST: u64 = 1;

/// The queries a search engine makes against a grid.
///
/// # Contract
///
/// - Answers must not change while any engine holds a reference. The engine
///   borrows the environment immutably for its whole life, so the borrow
///   checker enforces this for safe implementations.
/// - `traversable` may be asymmetric (one-way passages) but must return
///   `false` for cells that are not 4-adjacent or lie outside the grid.
/// - `cost` is the cost of *entering* a cell. It is only queried for
///   in-bounds cells.
pub trait Environment {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Whether `cell` lies inside the grid.
    fn contains(&self, cell: Cell) -> bool;

    /// Whether a single move from `from` to `to` is allowed.
    fn traversable(&self, from: Cell, to: Cell) -> bool;

    /// Entry cost of `cell`.
    fn cost(&self, cell: Cell) -> u32;

    /// In-bounds, traversable neighbours of `cell` in up, down, left, right order.
    fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        Direction::ALL
            .into_iter()
            .map(|d| cell.step(d))
            .filter(|&n| self.contains(n) && self.traversable(cell, n))
            .collect()
    }

    /// Cost of moving from `from` to the adjacent `to`.
    ///
    /// Only meaningful for traversable pairs; engines never ask otherwise.
    fn edge_cost(&self, _from: Cell, to: Cell) -> u64 {
        BASE_MOVE_COST + u64::from(self.cost(to))
    }
}

impl Environment for MazeV1 {
    fn width(&self) -> u32 {
        MazeV1::width(self)
    }

    fn height(&self) -> u32 {
        MazeV1::height(self)
    }

    fn contains(&self, cell: Cell) -> bool {
        MazeV1::contains(self, cell)
    }

    fn traversable(&self, from: Cell, to: Cell) -> bool {
        MazeV1::traversable(self, from, to)
    }

    fn cost(&self, cell: Cell) -> u32 {
        MazeV1::cost(self, cell).unwrap_or(0)
    }
}
