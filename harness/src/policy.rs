//! Run policy: the caps under which a search run is driven.
//!
//! Tree-mode search has no termination guarantee on cyclic grids, so every
//! run the harness drives is bounded by a step cap and a wall-clock cap. The
//! runner resolves a [`PolicyConfig`] (optional overrides) into a
//! [`RunPolicyV1`] snapshot once, before the first step.

use std::time::Duration;

use labyrinth_search::node::SearchMode;

/// Step cap for graph-mode runs when no override is given.
pub const DEFAULT_MAX_STEPS_GRAPH: u64 = 50_000;
/// Step cap for tree-mode runs when no override is given.
pub const DEFAULT_MAX_STEPS_TREE: u64 = 200_000;
/// Wall-clock cap when no override is given.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(180);
/// Upper bound on any configured wall-clock cap.
pub const MAX_TIME_LIMIT: Duration = Duration::from_secs(24 * 60 * 60);

/// Optional overrides for run caps.
///
/// `None`, zero, negative, or non-finite values fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyConfig {
    /// Maximum accepted steps. `None` uses the per-mode default.
    pub max_steps: Option<u64>,
    /// Wall-clock limit in seconds. Values above 24 h are capped.
    pub time_limit_secs: Option<f64>,
}

/// Resolved caps for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPolicyV1 {
    pub max_steps: u64,
    pub time_limit: Duration,
}

impl RunPolicyV1 {
    /// Resolve `config` for a run in `mode`.
    #[must_use]
    pub fn resolve(config: &PolicyConfig, mode: SearchMode) -> Self {
        let default_steps = match mode {
            SearchMode::Graph => DEFAULT_MAX_STEPS_GRAPH,
            SearchMode::Tree => DEFAULT_MAX_STEPS_TREE,
        };
        let max_steps = config
            .max_steps
            .filter(|&n| n > 0)
            .unwrap_or(default_steps);
        Self {
            max_steps,
            time_limit: resolve_time_limit(config.time_limit_secs),
        }
    }

    /// Canonical-JSON-ready projection (milliseconds for the time cap).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let time_limit_ms = u64::try_from(self.time_limit.as_millis()).unwrap_or(u64::MAX);
        serde_json::json!({
            "max_steps": self.max_steps,
            "time_limit_ms": time_limit_ms,
        })
    }
}

impl Default for RunPolicyV1 {
    fn default() -> Self {
        Self::resolve(&PolicyConfig::default(), SearchMode::Graph)
    }
}

fn resolve_time_limit(secs: Option<f64>) -> Duration {
    match secs {
        Some(s) if s.is_finite() && s > 0.0 => {
            if s >= MAX_TIME_LIMIT.as_secs_f64() {
                MAX_TIME_LIMIT
            } else {
                Duration::from_secs_f64(s)
            }
        }
        _ => DEFAULT_TIME_LIMIT,
    }
}
