//! `MazeV1`: rectangular grid with per-cell exits and entry costs.
//!
//! Each cell records which of its four sides are open, in
//! [`Direction::ALL`] order (up, down, left, right), and the cost of
//! entering it. Movement from `a` to an adjacent `b` is allowed iff `b` is
//! inside the grid and `a` is open on the side facing `b`. Nothing requires
//! `b` to be open back toward `a`, which is how one-way passages arise.

use crate::grid::{Cell, Direction};
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// One maze cell: open sides and entry cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MazeCellV1 {
    /// Open sides in `[up, down, left, right]` order.
    pub open: [bool; 4],
    /// Cost of entering this cell.
    pub cost: u32,
}

impl MazeCellV1 {
    /// A cell closed on all four sides.
    pub const WALLED: MazeCellV1 = MazeCellV1 {
        open: [false; 4],
        cost: 0,
    };

    #[must_use]
    pub const fn new(open: [bool; 4], cost: u32) -> Self {
        Self { open, cost }
    }

    #[must_use]
    pub const fn is_open(&self, direction: Direction) -> bool {
        self.open[direction.index()]
    }
}

/// Typed failure for maze construction and editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No rows, or a first row with no cells.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Width or height does not fit the coordinate type.
    TooLarge { width: usize, height: usize },
    /// A cell lies outside the grid.
    OutOfBounds { cell: Cell, width: u32, height: u32 },
}

impl std::fmt::Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "maze has no cells"),
            Self::RaggedRow { row, expected, got } => {
                write!(f, "row {row} has {got} cells, expected {expected}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "maze dimensions {width}x{height} exceed coordinate range")
            }
            Self::OutOfBounds {
                cell,
                width,
                height,
            } => write!(f, "cell {cell} is outside the {width}x{height} maze"),
        }
    }
}

impl std::error::Error for MazeError {}

/// A rectangular maze stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeV1 {
    width: u32,
    height: u32,
    cells: Vec<MazeCellV1>,
}

impl MazeV1 {
    /// Build a maze from rows (`rows[y][x]`).
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Empty`] for no cells, [`MazeError::RaggedRow`] when
    /// rows differ in length, and [`MazeError::TooLarge`] when a dimension
    /// exceeds `i32::MAX`.
    pub fn from_rows(rows: Vec<Vec<MazeCellV1>>) -> Result<Self, MazeError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(MazeError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(MazeError::RaggedRow {
                    row,
                    expected,
                    got: cells.len(),
                });
            }
        }

        let (width, height) = Self::checked_dimensions(expected, rows.len())?;
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// A maze with every interior passage open both ways and a uniform cost.
    ///
    /// Sides on the outer boundary stay closed.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Empty`] for a zero dimension and
    /// [`MazeError::TooLarge`] when a dimension exceeds `i32::MAX`.
    pub fn open_field(width: usize, height: usize, cost: u32) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }
        let (w, h) = Self::checked_dimensions(width, height)?;
        let mut maze = Self {
            width: w,
            height: h,
            cells: vec![MazeCellV1 { open: [false; 4], cost }; width * height],
        };
        for index in 0..maze.cells.len() {
            let cell = maze.cell_at(index);
            for direction in Direction::ALL {
                if maze.contains(cell.step(direction)) {
                    maze.cells[index].open[direction.index()] = true;
                }
            }
        }
        Ok(maze)
    }

    fn checked_dimensions(width: usize, height: usize) -> Result<(u32, u32), MazeError> {
        let too_large = MazeError::TooLarge { width, height };
        let w = i32::try_from(width).map_err(|_| too_large.clone())?;
        let h = i32::try_from(height).map_err(|_| too_large)?;
        // Both fit in i32, so the u32 conversion is lossless.
        Ok((w.unsigned_abs(), h.unsigned_abs()))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `cell` lies inside the grid.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&MazeCellV1> {
        self.index_of(cell).map(|i| &self.cells[i])
    }

    /// Entry cost of `cell`, or `None` outside the grid.
    #[must_use]
    pub fn cost(&self, cell: Cell) -> Option<u32> {
        self.get(cell).map(|c| c.cost)
    }

    /// Whether a single move from `from` to `to` is allowed.
    ///
    /// Requires both cells in bounds, 4-adjacency, and `from` open toward `to`.
    #[must_use]
    pub fn traversable(&self, from: Cell, to: Cell) -> bool {
        let Some(direction) = from.direction_to(to) else {
            return false;
        };
        if !self.contains(to) {
            return false;
        }
        self.get(from).is_some_and(|c| c.is_open(direction))
    }

    /// Set the entry cost of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `cell` is outside the grid.
    pub fn set_cost(&mut self, cell: Cell, cost: u32) -> Result<(), MazeError> {
        let index = self.checked_index(cell)?;
        self.cells[index].cost = cost;
        Ok(())
    }

    /// Open the passage between `cell` and its neighbour in `direction`, both ways.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if either end is outside the grid.
    pub fn carve(&mut self, cell: Cell, direction: Direction) -> Result<(), MazeError> {
        self.set_passage(cell, direction, true, true)
    }

    /// Open `cell` toward its neighbour in `direction` and close the way back.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if either end is outside the grid.
    pub fn carve_one_way(&mut self, cell: Cell, direction: Direction) -> Result<(), MazeError> {
        self.set_passage(cell, direction, true, false)
    }

    /// Close the passage between `cell` and its neighbour in `direction`, both ways.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if either end is outside the grid.
    pub fn wall(&mut self, cell: Cell, direction: Direction) -> Result<(), MazeError> {
        self.set_passage(cell, direction, false, false)
    }

    fn set_passage(
        &mut self,
        cell: Cell,
        direction: Direction,
        forward: bool,
        backward: bool,
    ) -> Result<(), MazeError> {
        let here = self.checked_index(cell)?;
        let there = self.checked_index(cell.step(direction))?;
        self.cells[here].open[direction.index()] = forward;
        self.cells[there].open[direction.opposite().index()] = backward;
        Ok(())
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        let x = u32::try_from(cell.x).ok()?;
        let y = u32::try_from(cell.y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn checked_index(&self, cell: Cell) -> Result<usize, MazeError> {
        self.index_of(cell).ok_or(MazeError::OutOfBounds {
            cell,
            width: self.width,
            height: self.height,
        })
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn cell_at(&self, index: usize) -> Cell {
        // Dimensions were checked against i32::MAX at construction.
        let w = self.width as usize;
        Cell::new((index % w) as i32, (index / w) as i32)
    }

    /// Canonical JSON value of the layout.
    ///
    /// Each cell is `[up, down, left, right, cost]` with the flags as 0/1, so
    /// the encoding stays integer-only.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let rows: Vec<serde_json::Value> = self
            .cells
            .chunks(self.width as usize)
            .map(|row| {
                row.iter()
                    .map(|c| {
                        let mut entry: Vec<u64> = c.open.iter().map(|&o| u64::from(o)).collect();
                        entry.push(u64::from(c.cost));
                        serde_json::json!(entry)
                    })
                    .collect::<Vec<_>>()
                    .into()
            })
            .collect();

        serde_json::json!({
            "height": self.height,
            "rows": rows,
            "schema": "maze.v1",
            "width": self.width,
        })
    }

    /// Canonical JSON bytes of the layout.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content address of the layout.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::MazeLayout, &bytes))
    }
}
