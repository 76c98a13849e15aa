//! Cell coordinates.

use crate::grid::direction::Direction;

/// An immutable grid coordinate.
///
/// `x` grows to the right and `y` grows downward, so [`Direction::Up`]
/// decrements `y`. Two cells are equal iff both coordinates match.
///
/// Ordering is `(x, y)` lexicographic. It exists so cells can key
/// `BTreeMap`/`BTreeSet` collections with deterministic iteration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `direction`.
    ///
    /// The result may lie outside any particular grid; bounds are the
    /// environment's concern.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Manhattan (taxicab) distance.
    #[must_use]
    pub fn manhattan_distance(self, other: Cell) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// The direction leading from `self` to `other` when they are 4-adjacent.
    #[must_use]
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| self.step(d) == other)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
