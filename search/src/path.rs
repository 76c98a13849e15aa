//! Parent linkage and start-to-goal path reconstruction.

use std::collections::{BTreeMap, BTreeSet};

use labyrinth_kernel::grid::Cell;

use crate::error::PathError;

/// Child → parent linkage recorded while a search runs.
///
/// The root (start) maps to `None` and is never overwritten, so every chain
/// that ends does so at the start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentMap {
    root: Cell,
    links: BTreeMap<Cell, Option<Cell>>,
}

impl ParentMap {
    /// A map containing only the root sentinel.
    #[must_use]
    pub fn new(root: Cell) -> Self {
        let mut links = BTreeMap::new();
        links.insert(root, None);
        Self { root, links }
    }

    #[must_use]
    pub fn root(&self) -> Cell {
        self.root
    }

    /// Set (or replace) the parent of `child`.
    ///
    /// Returns `false` and leaves the map untouched when `child` is the root.
    pub fn record(&mut self, child: Cell, parent: Cell) -> bool {
        if child == self.root {
            return false;
        }
        self.links.insert(child, Some(parent));
        true
    }

    /// Set the parent of `child` only if it has none yet.
    ///
    /// Returns `true` if an entry was written.
    pub fn record_first(&mut self, child: Cell, parent: Cell) -> bool {
        if self.links.contains_key(&child) {
            return false;
        }
        self.links.insert(child, Some(parent));
        true
    }

    /// Parent of `cell`. `None` for the root and for unknown cells.
    #[must_use]
    pub fn parent_of(&self, cell: Cell) -> Option<Cell> {
        self.links.get(&cell).copied().flatten()
    }

    /// Whether `cell` has an entry (the root included).
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.links.contains_key(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always `false`: the root entry is present from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Entries in cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<Cell>)> + '_ {
        self.links.iter().map(|(&c, &p)| (c, p))
    }
}

/// Walk parent links from `goal` back to `start` and return the path in
/// start-to-goal order.
///
/// The walk takes at most `parents.len()` hops; revisiting a cell before the
/// start is reached yields [`PathError::CycleDetected`].
///
/// # Errors
///
/// - [`PathError::NotFound`] if `goal` has no entry, or the chain ends at a
///   sentinel other than `start`.
/// - [`PathError::CycleDetected`] if the chain loops.
pub fn reconstruct(parents: &ParentMap, start: Cell, goal: Cell) -> Result<Vec<Cell>, PathError> {
    if !parents.contains(goal) {
        return Err(PathError::NotFound);
    }

    let mut path = vec![goal];
    let mut seen = BTreeSet::from([goal]);
    let mut current = goal;

    while current != start {
        let Some(link) = parents.links.get(&current) else {
            return Err(PathError::NotFound);
        };
        let Some(parent) = *link else {
            // Chain terminated at a root that is not `start`.
            return Err(PathError::NotFound);
        };
        if !seen.insert(parent) || path.len() > parents.len() {
            return Err(PathError::CycleDetected { at: parent });
        }
        path.push(parent);
        current = parent;
    }

    path.reverse();
    Ok(path)
}
