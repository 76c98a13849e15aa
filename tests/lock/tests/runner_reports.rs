//! Reference-driver lock tests: statuses, metrics, report determinism, and
//! side-by-side comparison runs.

use labyrinth_harness::policy::{PolicyConfig, RunPolicyV1};
use labyrinth_harness::report::RunStatus;
use labyrinth_harness::runner::{all_runs, run_comparison, run_maze, run_world, RunError};
use labyrinth_harness::worlds::{all_worlds, fixtures, reference};
use labyrinth_kernel::grid::Cell;
use labyrinth_search::error::SearchError;
use labyrinth_search::node::{SearchMode, Strategy};
use lock_tests::oracle::{cheapest_cost, fewest_moves};

// ---------------------------------------------------------------------------
// ACCEPTANCE: RUN-REPORT-DETERMINISM-INPROC
// ---------------------------------------------------------------------------

#[test]
fn report_digest_is_stable_across_repeated_runs() {
    let w = reference::reference_world().unwrap();
    for strategy in Strategy::ALL {
        let first = run_world(&w, strategy, SearchMode::Graph, &PolicyConfig::default()).unwrap();
        let first_digest = first.digest().unwrap();
        for _ in 0..5 {
            let again =
                run_world(&w, strategy, SearchMode::Graph, &PolicyConfig::default()).unwrap();
            assert_eq!(again.digest().unwrap(), first_digest, "{strategy}");
            assert_eq!(again.visit_digest, first.visit_digest, "{strategy}");
        }
    }
}

#[test]
fn strategies_produce_distinct_visit_orders() {
    let w = reference::reference_world().unwrap();
    let digests: std::collections::BTreeSet<String> = Strategy::ALL
        .into_iter()
        .map(|s| {
            run_world(&w, s, SearchMode::Graph, &PolicyConfig::default())
                .unwrap()
                .visit_digest
                .to_string()
        })
        .collect();
    assert_eq!(digests.len(), 4);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: RUN-METRICS
// ---------------------------------------------------------------------------

#[test]
fn graph_success_reports_path_metrics() {
    let w = reference::reference_world().unwrap();
    let moves = fewest_moves(&w.maze, w.start, w.goal).unwrap();
    let cost = cheapest_cost(&w.maze, w.start, w.goal).unwrap();

    let bfs = run_world(&w, Strategy::BreadthFirst, SearchMode::Graph, &PolicyConfig::default())
        .unwrap();
    assert_eq!(bfs.status, RunStatus::Success);
    assert_eq!(bfs.metrics.path_len, Some(moves));

    for strategy in [Strategy::UniformCost, Strategy::AStar] {
        let r = run_world(&w, strategy, SearchMode::Graph, &PolicyConfig::default()).unwrap();
        assert_eq!(r.status, RunStatus::Success);
        assert_eq!(r.metrics.path_cost, Some(cost), "{strategy}");
        assert_eq!(r.metrics.repeats, 0, "{strategy}");
        assert_eq!(r.metrics.steps, r.metrics.unique_cells, "{strategy}");
        assert_eq!(r.metrics.steps, r.metrics.engine.expansions, "{strategy}");
        assert!(r.metrics.engine.frontier_high_water > 0);
        assert!(r.path_digest.is_some());
        assert_eq!(r.maze_digest, Some(w.maze.digest().unwrap()));
    }
}

#[test]
fn isolated_start_is_exhausted_after_one_step() {
    let w = fixtures::isolated_start().unwrap();
    for (strategy, mode) in all_runs() {
        let r = run_world(&w, strategy, mode, &PolicyConfig::default()).unwrap();
        assert_eq!(r.status, RunStatus::Exhausted, "{strategy}/{mode}");
        assert_eq!(r.metrics.steps, 1);
        assert_eq!(r.metrics.path_len, None);
    }
}

#[test]
fn step_cap_is_never_exceeded() {
    let w = reference::reference_world().unwrap();
    let config = PolicyConfig {
        max_steps: Some(7),
        time_limit_secs: None,
    };
    for (strategy, mode) in all_runs() {
        let r = run_world(&w, strategy, mode, &config).unwrap();
        assert_eq!(r.status, RunStatus::StepLimit, "{strategy}/{mode}");
        assert_eq!(r.metrics.steps, 7);
        assert!(r.path.is_none());
    }
}

#[test]
fn out_of_bounds_goal_is_an_error() {
    let w = fixtures::corridor().unwrap();
    let err = run_maze(
        &w.maze,
        Strategy::AStar,
        SearchMode::Graph,
        w.start,
        Cell::new(2, 0),
        &RunPolicyV1::default(),
    )
    .unwrap_err();
    assert!(matches!(err, RunError::Search(SearchError::InvalidInput { .. })));
    assert!(err.to_string().contains("goal"));
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: COMPARISON-RUNS
// ---------------------------------------------------------------------------

#[test]
fn comparison_matches_sequential_runs() {
    let config = PolicyConfig {
        max_steps: Some(5_000),
        time_limit_secs: None,
    };
    for w in all_worlds().unwrap() {
        let runs = all_runs();
        let parallel = run_comparison(&w.maze, w.start, w.goal, &runs, &config);
        for (result, &(strategy, mode)) in parallel.iter().zip(&runs) {
            let parallel_report = result.as_ref().unwrap();
            let policy = RunPolicyV1::resolve(&config, mode);
            let sequential = labyrinth_harness::runner::run_search(
                &w.maze, strategy, mode, w.start, w.goal, &policy,
            )
            .unwrap();
            assert_eq!(
                parallel_report.to_canonical_json_bytes().unwrap(),
                sequential.to_canonical_json_bytes().unwrap(),
                "{} {strategy}/{mode}",
                w.name
            );
        }
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: REPORT-PROJECTION-EXCLUDES-TIMING
// ---------------------------------------------------------------------------

#[test]
fn canonical_report_carries_no_timing_or_memory() {
    let w = reference::reference_world().unwrap();
    let r = run_world(&w, Strategy::AStar, SearchMode::Graph, &PolicyConfig::default()).unwrap();
    let bytes = r.to_canonical_json_bytes().unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let keys: Vec<&str> = parsed.as_object().unwrap().keys().map(String::as_str).collect();
    for forbidden in ["wall_time_ns", "reported_time_ns", "avg_memory_bytes", "time_limit_ms"] {
        assert!(!keys.contains(&forbidden), "{forbidden} leaked into {keys:?}");
    }
    assert_eq!(parsed["schema"], "run_report.v1");
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["path_cost"], 123);
}
