//! Tree-mode behaviour: revisits are allowed, only the immediate parent is
//! skipped (BFS, DFS, A*), parent links are first-write-wins, reconstruction
//! is refused, and the driver's caps are the only thing that stops a cycle.

use labyrinth_harness::policy::{PolicyConfig, RunPolicyV1};
use labyrinth_harness::report::RunStatus;
use labyrinth_harness::runner::run_world;
use labyrinth_harness::worlds::{fixtures, reference};
use labyrinth_kernel::grid::Cell;
use labyrinth_kernel::maze::MazeV1;
use labyrinth_search::error::PathError;
use labyrinth_search::node::{SearchMode, Strategy};
use labyrinth_search::search::new_engine;
use lock_tests::oracle::{drain, drive_to_goal};

// ---------------------------------------------------------------------------
// ACCEPTANCE: TREE-RECONSTRUCTION-REFUSED
// ---------------------------------------------------------------------------

#[test]
fn reconstruction_is_refused_even_after_success() {
    let w = fixtures::corridor().unwrap();
    for strategy in Strategy::ALL {
        let mut e = new_engine(strategy, &w.maze, w.start, w.goal, SearchMode::Tree).unwrap();
        drive_to_goal(e.as_mut(), 10).unwrap();
        assert_eq!(e.reconstruct_path(), Err(PathError::UnsafeLinkage), "{strategy}");
        assert!(e.parents().contains(w.goal), "{strategy}: goal linked");
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: TREE-REVISITS
// ---------------------------------------------------------------------------

#[test]
fn cycles_produce_repeated_cells() {
    let maze = MazeV1::open_field(3, 3, 0).unwrap();
    for strategy in Strategy::ALL {
        let mut e =
            new_engine(strategy, &maze, Cell::new(0, 0), Cell::new(2, 2), SearchMode::Tree).unwrap();
        let mut seen = std::collections::BTreeSet::new();
        let mut repeats = 0;
        for _ in 0..200 {
            let Some(cell) = e.step().cell() else {
                panic!("{strategy}: tree mode exhausted on a cyclic field");
            };
            if !seen.insert(cell) {
                repeats += 1;
            }
        }
        assert!(repeats > 0, "{strategy}: no revisits in 200 steps");
    }
}

#[test]
fn parent_skip_makes_corridors_finite() {
    // No cycles: the only way back is through the parent, which is skipped.
    let maze = MazeV1::open_field(5, 1, 1).unwrap();
    for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst, Strategy::AStar] {
        let mut e =
            new_engine(strategy, &maze, Cell::new(2, 0), Cell::new(4, 0), SearchMode::Tree).unwrap();
        let cells = drain(e.as_mut(), 100);
        assert_eq!(cells.len(), 5, "{strategy}: {cells:?}");
    }
}

#[test]
fn uniform_cost_tree_mode_has_no_parent_skip() {
    let maze = MazeV1::open_field(2, 1, 0).unwrap();
    let mut e = new_engine(
        Strategy::UniformCost,
        &maze,
        Cell::new(0, 0),
        Cell::new(1, 0),
        SearchMode::Tree,
    )
    .unwrap();
    let cells: Vec<Cell> = (0..4).filter_map(|_| e.step().cell()).collect();
    assert_eq!(
        cells,
        vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 0), Cell::new(1, 0)]
    );
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: TREE-FIRST-WRITE-WINS
// ---------------------------------------------------------------------------

#[test]
fn first_recorded_parent_is_kept() {
    let maze = MazeV1::open_field(3, 3, 0).unwrap();
    for strategy in Strategy::ALL {
        let mut e =
            new_engine(strategy, &maze, Cell::new(1, 1), Cell::new(0, 0), SearchMode::Tree).unwrap();
        let _ = e.step();
        let _ = e.step();
        let snapshot: Vec<(Cell, Option<Cell>)> = e.parents().iter().collect();
        for _ in 0..100 {
            let _ = e.step();
        }
        for (cell, parent) in snapshot {
            assert_eq!(e.parents().parent_of(cell), parent, "{strategy}: {cell} relinked");
        }
        assert_eq!(e.parents().parent_of(Cell::new(1, 1)), None, "root relinked");
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: TREE-CAPPED-BY-DRIVER
// ---------------------------------------------------------------------------

#[test]
fn driver_step_cap_bounds_tree_runs_on_the_reference_maze() {
    let w = reference::reference_world().unwrap();
    let config = PolicyConfig {
        max_steps: Some(2_000),
        time_limit_secs: None,
    };
    for strategy in Strategy::ALL {
        let report = run_world(&w, strategy, SearchMode::Tree, &config).unwrap();
        assert!(
            report.status != RunStatus::TimeLimit,
            "{strategy}: {}",
            report.status
        );
        assert!(report.metrics.steps <= 2_000);
        assert!(report.path.is_none(), "tree runs never carry a path");
        assert_eq!(report.policy, RunPolicyV1::resolve(&config, SearchMode::Tree));
    }
}

#[test]
fn tree_default_cap_is_larger_than_graph_default() {
    let tree = RunPolicyV1::resolve(&PolicyConfig::default(), SearchMode::Tree);
    let graph = RunPolicyV1::resolve(&PolicyConfig::default(), SearchMode::Graph);
    assert!(tree.max_steps > graph.max_steps);
}
