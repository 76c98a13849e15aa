//! The 14x10 reference layout.
//!
//! Each entry is `(exits, cost)` with `exits` read left to right as up, down,
//! left, right. A passage is one-way where only one side lists the exit.

use labyrinth_kernel::grid::Cell;
use labyrinth_kernel::maze::{MazeCellV1, MazeError, MazeV1};

use super::WorldV1;

pub const START: Cell = Cell::new(0, 0);
pub const GOAL: Cell = Cell::new(12, 3);

const ROWS: [[(u8, u32); 14]; 10] = [
    [(0b0101, 1), (0b0001, 3), (0b0011, 1), (0b0011, 2), (0b0011, 0), (0b0110, 3), (0b0101, 2), (0b0011, 1), (0b0011, 1), (0b0110, 2), (0b0101, 3), (0b0111, 0), (0b0111, 2), (0b0110, 3)],
    [(0b1100, 1), (0b1011, 1), (0b0011, 2), (0b0110, 3), (0b0000, 2), (0b1001, 1), (0b1010, 0), (0b0100, 1), (0b0111, 2), (0b1010, 3), (0b1101, 2), (0b1111, 1), (0b1111, 0), (0b1110, 1)],
    [(0b1100, 1), (0b0101, 2), (0b0011, 3), (0b1010, 2), (0b0101, 1), (0b0111, 0), (0b0111, 1), (0b0111, 2), (0b1110, 3), (0b0100, 2), (0b1101, 1), (0b1111, 0), (0b1011, 1), (0b1110, 2)],
    [(0b1100, 0), (0b1100, 1), (0b0101, 3), (0b0111, 3), (0b1111, 2), (0b1111, 2), (0b1111, 1), (0b0111, 0), (0b1110, 1), (0b1100, 2), (0b1101, 2), (0b1110, 3), (0b0001, 3), (0b1110, 3)],
    [(0b1100, 1), (0b1100, 2), (0b1101, 2), (0b1111, 3), (0b1111, 3), (0b1110, 3), (0b1110, 2), (0b0111, 2), (0b1110, 1), (0b1100, 2), (0b1101, 2), (0b1111, 3), (0b0111, 3), (0b1110, 3)],
    [(0b1100, 2), (0b1100, 2), (0b1100, 1), (0b1100, 2), (0b1100, 2), (0b0100, 3), (0b1100, 3), (0b1100, 3), (0b1100, 2), (0b1100, 2), (0b1101, 1), (0b1111, 2), (0b1111, 2), (0b1110, 3)],
    [(0b1100, 3), (0b1100, 2), (0b1001, 2), (0b1111, 1), (0b1011, 2), (0b1011, 2), (0b1011, 3), (0b1011, 3), (0b1011, 3), (0b1010, 2), (0b1101, 2), (0b1111, 1), (0b1111, 2), (0b1110, 2)],
    [(0b1100, 3), (0b1101, 3), (0b0110, 3), (0b1001, 2), (0b0011, 2), (0b0011, 1), (0b0011, 2), (0b0011, 2), (0b0011, 3), (0b0110, 3), (0b1101, 3), (0b1111, 2), (0b1111, 2), (0b1110, 1)],
    [(0b1100, 2), (0b1001, 2), (0b1110, 3), (0b0101, 3), (0b0011, 3), (0b0011, 2), (0b0011, 2), (0b0110, 1), (0b0100, 2), (0b1100, 2), (0b1101, 3), (0b1111, 3), (0b1111, 3), (0b1110, 2)],
    [(0b1001, 2), (0b0011, 1), (0b1010, 2), (0b1001, 2), (0b0010, 3), (0b0001, 3), (0b0011, 3), (0b1011, 2), (0b1011, 2), (0b1011, 1), (0b1011, 2), (0b1011, 2), (0b1011, 3), (0b1010, 3)],
];

const fn exits(mask: u8) -> [bool; 4] {
    [mask & 0b1000 != 0, mask & 0b0100 != 0, mask & 0b0010 != 0, mask & 0b0001 != 0]
}

/// The reference maze layout.
///
/// # Errors
///
/// Never fails for the built-in table; the `Result` mirrors [`MazeV1::from_rows`].
pub fn reference_maze() -> Result<MazeV1, MazeError> {
    let rows = ROWS
        .iter()
        .map(|row| {
            row.iter()
                .map(|&(mask, cost)| MazeCellV1::new(exits(mask), cost))
                .collect()
        })
        .collect();
    MazeV1::from_rows(rows)
}

/// The reference maze with its usual endpoints.
///
/// # Errors
///
/// See [`reference_maze`].
pub fn reference_world() -> Result<WorldV1, MazeError> {
    Ok(WorldV1 {
        name: "reference",
        maze: reference_maze()?,
        start: START,
        goal: GOAL,
    })
}
