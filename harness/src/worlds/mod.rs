//! Fixture worlds: a maze plus the endpoints it is normally searched between.
//!
//! Worlds carry data only. The runner owns stepping, caps, and reporting.

pub mod fixtures;
pub mod reference;

use labyrinth_kernel::grid::Cell;
use labyrinth_kernel::maze::{MazeError, MazeV1};

/// A named maze with its start and goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldV1 {
    pub name: &'static str,
    pub maze: MazeV1,
    pub start: Cell,
    pub goal: Cell,
}

/// Every built-in world, reference layout first.
///
/// # Errors
///
/// Propagates [`MazeError`] from layout construction.
pub fn all_worlds() -> Result<Vec<WorldV1>, MazeError> {
    Ok(vec![
        reference::reference_world()?,
        fixtures::corridor()?,
        fixtures::isolated_start()?,
        fixtures::one_way_trap()?,
        fixtures::weighted_detour()?,
    ])
}

/// Look up a built-in world by name.
///
/// # Errors
///
/// Propagates [`MazeError`] from layout construction.
pub fn world_by_name(name: &str) -> Result<Option<WorldV1>, MazeError> {
    Ok(all_worlds()?.into_iter().find(|w| w.name == name))
}
