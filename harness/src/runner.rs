//! Reference driver: steps an engine to completion under a [`RunPolicyV1`].
//!
//! # Loop
//!
//! ```text
//! new_engine() → [check caps → step() → record visit] × N
//!   → Success | Exhausted | StepLimit | TimeLimit
//!   → reconstruct_path() (graph-mode success) → digests → RunReportV1
//! ```
//!
//! Caps are checked before every `step()`, so a run never takes more than
//! `max_steps` accepted steps.

use std::collections::BTreeSet;
use std::thread;
use std::time::Instant;

use labyrinth_kernel::grid::Cell;
use labyrinth_kernel::maze::MazeV1;
use labyrinth_kernel::proof::canon::CanonError;
use labyrinth_kernel::proof::hash::HashDomain;
use labyrinth_search::contract::Environment;
use labyrinth_search::error::{PathError, SearchError};
use labyrinth_search::node::{SearchMode, StepResult, Strategy};
use labyrinth_search::search::new_engine;
use tracing::{debug, info, warn};

use crate::policy::{PolicyConfig, RunPolicyV1};
use crate::report::{cells_digest, RunMetricsV1, RunReportV1, RunStatus};
use crate::worlds::WorldV1;

/// Error during a driven run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Engine construction rejected the inputs.
    Search(SearchError),
    /// The goal was reached in graph mode but its path could not be rebuilt.
    Path(PathError),
    /// Canonical JSON serialization failed while computing a digest.
    CanonFailed { detail: String },
    /// A comparison worker thread panicked.
    WorkerPanicked { strategy: Strategy, mode: SearchMode },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "{e}"),
            Self::Path(e) => write!(f, "path reconstruction failed: {e}"),
            Self::CanonFailed { detail } => write!(f, "canonicalization failed: {detail}"),
            Self::WorkerPanicked { strategy, mode } => {
                write!(f, "worker for {strategy}/{mode} panicked")
            }
        }
    }
}

impl std::error::Error for RunError {}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::CanonFailed {
            detail: e.to_string(),
        }
    }
}

fn saturating_ns(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

/// Cost of walking `path` edge by edge.
fn walk_cost<E: Environment + ?Sized>(env: &E, path: &[Cell]) -> u64 {
    path.windows(2)
        .map(|pair| env.edge_cost(pair[0], pair[1]))
        .fold(0, u64::saturating_add)
}

/// Drive one search from `start` to `goal` and report what happened.
///
/// # Errors
///
/// - [`RunError::Search`] if the engine rejects the endpoints.
/// - [`RunError::Path`] if a graph-mode success cannot be reconstructed.
/// - [`RunError::CanonFailed`] if a digest cannot be computed.
pub fn run_search<E: Environment + ?Sized>(
    env: &E,
    strategy: Strategy,
    mode: SearchMode,
    start: Cell,
    goal: Cell,
    policy: &RunPolicyV1,
) -> Result<RunReportV1, RunError> {
    let mut engine = new_engine(strategy, env, start, goal, mode)?;
    if mode == SearchMode::Tree {
        warn!(
            %strategy,
            max_steps = policy.max_steps,
            "tree-mode run may not terminate; relying on caps"
        );
    }

    let started = Instant::now();
    let mut visits: Vec<Cell> = Vec::new();
    let mut seen: BTreeSet<Cell> = BTreeSet::new();
    let mut metrics = RunMetricsV1::default();
    let mut memory_total: u128 = 0;
    let mut goal_cost: Option<u64> = None;

    let status = loop {
        if metrics.steps >= policy.max_steps {
            warn!(%strategy, %mode, steps = metrics.steps, "step limit reached");
            break RunStatus::StepLimit;
        }
        if started.elapsed() >= policy.time_limit {
            warn!(%strategy, %mode, steps = metrics.steps, "time limit reached");
            break RunStatus::TimeLimit;
        }

        match engine.step() {
            StepResult::Visited(visit) => {
                metrics.steps += 1;
                metrics.reported_time_ns = metrics
                    .reported_time_ns
                    .saturating_add(visit.duration_hint_ns);
                memory_total += u128::from(visit.memory_hint_bytes);
                if !seen.insert(visit.cell) {
                    metrics.repeats += 1;
                }
                visits.push(visit.cell);
                debug!(
                    step = metrics.steps,
                    cell = %visit.cell,
                    cost = visit.path_cost,
                    "expanded"
                );
                if visit.cell == goal {
                    if strategy.is_cost_aware() {
                        goal_cost = visit.path_cost;
                    }
                    break RunStatus::Success;
                }
            }
            StepResult::Exhausted => break RunStatus::Exhausted,
        }
    };

    metrics.wall_time_ns = saturating_ns(started);
    metrics.unique_cells = seen.len() as u64;
    metrics.avg_memory_bytes = if metrics.steps == 0 {
        0
    } else {
        u64::try_from(memory_total / u128::from(metrics.steps)).unwrap_or(u64::MAX)
    };
    metrics.engine = engine.stats();

    let path = if status == RunStatus::Success && mode == SearchMode::Graph {
        Some(engine.reconstruct_path().map_err(RunError::Path)?)
    } else {
        None
    };
    if let Some(cells) = &path {
        metrics.path_len = Some(cells.len().saturating_sub(1) as u64);
        metrics.path_cost = Some(walk_cost(env, cells));
    } else {
        metrics.path_cost = goal_cost;
    }

    let visit_digest = cells_digest(HashDomain::VisitSequence, &visits)?;
    let path_digest = match &path {
        Some(cells) => Some(cells_digest(HashDomain::SearchPath, cells)?),
        None => None,
    };

    info!(
        %strategy,
        %mode,
        %status,
        steps = metrics.steps,
        unique = metrics.unique_cells,
        path_len = metrics.path_len,
        "run finished"
    );

    Ok(RunReportV1 {
        strategy,
        mode,
        start,
        goal,
        status,
        policy: *policy,
        metrics,
        path,
        visit_digest,
        path_digest,
        maze_digest: None,
    })
}

/// [`run_search`] over a maze, with the layout digest attached to the report.
///
/// # Errors
///
/// Same as [`run_search`].
pub fn run_maze(
    maze: &MazeV1,
    strategy: Strategy,
    mode: SearchMode,
    start: Cell,
    goal: Cell,
    policy: &RunPolicyV1,
) -> Result<RunReportV1, RunError> {
    let mut report = run_search(maze, strategy, mode, start, goal, policy)?;
    report.maze_digest = Some(maze.digest()?);
    Ok(report)
}

/// [`run_maze`] on a fixture world's own endpoints, with `config` resolved for `mode`.
///
/// # Errors
///
/// Same as [`run_search`].
pub fn run_world(
    world: &WorldV1,
    strategy: Strategy,
    mode: SearchMode,
    config: &PolicyConfig,
) -> Result<RunReportV1, RunError> {
    let policy = RunPolicyV1::resolve(config, mode);
    run_maze(&world.maze, strategy, mode, world.start, world.goal, &policy)
}

/// Run several `(strategy, mode)` pairs side by side over one environment.
///
/// Each pair gets its own engine on its own scoped thread; the environment
/// is shared read-only. Results come back in the order of `runs`.
pub fn run_comparison<E: Environment + Sync + ?Sized>(
    env: &E,
    start: Cell,
    goal: Cell,
    runs: &[(Strategy, SearchMode)],
    config: &PolicyConfig,
) -> Vec<Result<RunReportV1, RunError>> {
    thread::scope(|scope| {
        let handles: Vec<_> = runs
            .iter()
            .map(|&(strategy, mode)| {
                let policy = RunPolicyV1::resolve(config, mode);
                let handle =
                    scope.spawn(move || run_search(env, strategy, mode, start, goal, &policy));
                (strategy, mode, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(strategy, mode, handle)| {
                handle
                    .join()
                    .unwrap_or(Err(RunError::WorkerPanicked { strategy, mode }))
            })
            .collect()
    })
}

/// Every strategy in both modes, in [`Strategy::ALL`] then [`SearchMode::ALL`] order.
#[must_use]
pub fn all_runs() -> Vec<(Strategy, SearchMode)> {
    Strategy::ALL
        .into_iter()
        .flat_map(|s| SearchMode::ALL.into_iter().map(move |m| (s, m)))
        .collect()
}
