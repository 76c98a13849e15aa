//! Run reports: what one driven search did, and a content address for it.
//!
//! Timing and memory figures are advisory and vary between runs, so they are
//! kept out of the canonical projection. Everything that goes into
//! [`RunReportV1::to_canonical_json_bytes`] is a pure function of the
//! environment, the endpoints, the strategy, the mode, and the step cap.

use labyrinth_kernel::grid::Cell;
use labyrinth_kernel::proof::canon::{canonical_json_bytes, CanonError};
use labyrinth_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use labyrinth_search::node::{EngineStatsV1, SearchMode, Strategy};

use crate::policy::RunPolicyV1;

/// How a driven run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStatus {
    /// The goal was yielded.
    Success,
    /// The frontier drained without yielding the goal.
    Exhausted,
    /// The step cap was reached first.
    StepLimit,
    /// The wall-clock cap was reached first.
    TimeLimit,
}

impl RunStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Exhausted => "exhausted",
            Self::StepLimit => "step_limit",
            Self::TimeLimit => "time_limit",
        }
    }

    /// Whether a cap, rather than the search itself, ended the run.
    #[must_use]
    pub const fn is_capped(self) -> bool {
        matches!(self, Self::StepLimit | Self::TimeLimit)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters collected by the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMetricsV1 {
    /// `Visited` results received.
    pub steps: u64,
    /// Distinct cells among them.
    pub unique_cells: u64,
    /// Visits to a cell that had already been yielded.
    pub repeats: u64,
    /// Sum of per-step duration hints.
    pub reported_time_ns: u64,
    /// Wall time from the first step call to the end of the run.
    pub wall_time_ns: u64,
    /// Mean of per-step memory hints (integer division).
    pub avg_memory_bytes: u64,
    /// Moves on the reconstructed path (graph-mode success only).
    pub path_len: Option<u64>,
    /// Cost of the path that reached the goal, when known.
    pub path_cost: Option<u64>,
    pub engine: EngineStatsV1,
}

/// Result of one driven run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReportV1 {
    pub strategy: Strategy,
    pub mode: SearchMode,
    pub start: Cell,
    pub goal: Cell,
    pub status: RunStatus,
    pub policy: RunPolicyV1,
    pub metrics: RunMetricsV1,
    /// Start-to-goal path (graph-mode success only).
    pub path: Option<Vec<Cell>>,
    /// Digest of the ordered yielded cells.
    pub visit_digest: ContentHash,
    /// Digest of `path`, when present.
    pub path_digest: Option<ContentHash>,
    /// Digest of the maze layout, when the run was bound to a `MazeV1`.
    pub maze_digest: Option<ContentHash>,
}

pub(crate) fn cell_json(cell: Cell) -> serde_json::Value {
    serde_json::json!([cell.x, cell.y])
}

/// Digest of an ordered cell sequence under `domain`.
///
/// # Errors
///
/// Returns [`CanonError`] if canonicalization fails.
pub fn cells_digest(domain: HashDomain, cells: &[Cell]) -> Result<ContentHash, CanonError> {
    let value = serde_json::Value::Array(cells.iter().copied().map(cell_json).collect());
    let bytes = canonical_json_bytes(&value)?;
    Ok(canonical_hash(domain, &bytes))
}

impl RunReportV1 {
    /// JSON projection of the deterministic fields.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let m = &self.metrics;
        let path = self
            .path
            .as_ref()
            .map(|cells| cells.iter().copied().map(cell_json).collect::<Vec<_>>());
        serde_json::json!({
            "schema": "run_report.v1",
            "strategy": self.strategy.as_str(),
            "mode": self.mode.as_str(),
            "start": cell_json(self.start),
            "goal": cell_json(self.goal),
            "status": self.status.as_str(),
            "max_steps": self.policy.max_steps,
            "steps": m.steps,
            "unique_cells": m.unique_cells,
            "repeats": m.repeats,
            "path_len": m.path_len,
            "path_cost": m.path_cost,
            "engine": {
                "expansions": m.engine.expansions,
                "frontier_high_water": m.engine.frontier_high_water,
                "pushes": m.engine.pushes,
                "rejected": m.engine.rejected,
                "stale_discarded": m.engine.stale_discarded,
            },
            "path": path,
            "visit_digest": self.visit_digest.as_str(),
            "path_digest": self.path_digest.as_ref().map(ContentHash::as_str),
            "maze_digest": self.maze_digest.as_ref().map(ContentHash::as_str),
        })
    }

    /// Canonical JSON bytes of [`Self::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content address of the deterministic projection.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::RunReport, &bytes))
    }
}
