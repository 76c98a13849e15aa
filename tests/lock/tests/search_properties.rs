//! Graph-mode search properties across every strategy and every fixture world:
//! goal reachability, closed-set monotonicity, move/cost optimality, the
//! A*-versus-UCS expansion bound, and path reconstruction behaviour.

use std::collections::BTreeSet;

use labyrinth_harness::worlds::{all_worlds, fixtures, reference, WorldV1};
use labyrinth_kernel::grid::Cell;
use labyrinth_kernel::maze::MazeV1;
use labyrinth_search::error::PathError;
use labyrinth_search::node::{SearchMode, StepResult, Strategy};
use labyrinth_search::search::{new_engine, SearchEngine};
use lock_tests::oracle::{
    cheapest_cost, drain, drive_to_goal, fewest_moves, path_cost, path_is_traversable,
};

const CAP: usize = 100_000;

fn graph_engine<'a>(
    strategy: Strategy,
    maze: &'a MazeV1,
    start: Cell,
    goal: Cell,
) -> Box<dyn SearchEngine + 'a> {
    new_engine(strategy, maze, start, goal, SearchMode::Graph).expect("endpoints in bounds")
}

fn reachable_worlds() -> Vec<WorldV1> {
    all_worlds()
        .unwrap()
        .into_iter()
        .filter(|w| fewest_moves(&w.maze, w.start, w.goal).is_some())
        .collect()
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: GOAL-REACHABLE-GRAPH-MODE
// ---------------------------------------------------------------------------

#[test]
fn every_strategy_reaches_every_reachable_goal() {
    let worlds = reachable_worlds();
    assert!(worlds.len() >= 3, "fixture set shrank unexpectedly");
    for w in &worlds {
        for strategy in Strategy::ALL {
            let mut e = graph_engine(strategy, &w.maze, w.start, w.goal);
            let hit = drive_to_goal(e.as_mut(), CAP);
            assert!(hit.is_some(), "{strategy} never reached the goal of {}", w.name);
        }
    }
}

#[test]
fn unreachable_goal_ends_in_exhausted() {
    let w = fixtures::isolated_start().unwrap();
    for strategy in Strategy::ALL {
        let mut e = graph_engine(strategy, &w.maze, w.start, w.goal);
        let cells = drain(e.as_mut(), CAP);
        assert_eq!(cells, vec![w.start], "{strategy}");
        assert!(e.step().is_exhausted());
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: CLOSED-SET-MONOTONIC
// ---------------------------------------------------------------------------

#[test]
fn no_cell_is_yielded_twice_in_graph_mode() {
    for w in all_worlds().unwrap() {
        for strategy in Strategy::ALL {
            let mut e = graph_engine(strategy, &w.maze, w.start, w.goal);
            let cells = drain(e.as_mut(), CAP);
            let unique: BTreeSet<Cell> = cells.iter().copied().collect();
            assert_eq!(
                unique.len(),
                cells.len(),
                "{strategy} re-yielded a finalized cell in {}",
                w.name
            );
            assert_eq!(e.stats().expansions, cells.len() as u64);
        }
    }
}

#[test]
fn graph_mode_drains_exactly_the_reachable_set() {
    let w = reference::reference_world().unwrap();
    let reachable: BTreeSet<Cell> = (0..14)
        .flat_map(|x| (0..10).map(move |y| Cell::new(x, y)))
        .filter(|&c| fewest_moves(&w.maze, w.start, c).is_some())
        .collect();
    assert_eq!(reachable.len(), 139);
    for strategy in Strategy::ALL {
        let mut e = graph_engine(strategy, &w.maze, w.start, w.goal);
        let yielded: BTreeSet<Cell> = drain(e.as_mut(), CAP).into_iter().collect();
        assert_eq!(yielded, reachable, "{strategy}");
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: OPTIMALITY
// ---------------------------------------------------------------------------

#[test]
fn breadth_first_path_has_fewest_moves() {
    for w in reachable_worlds() {
        let mut e = graph_engine(Strategy::BreadthFirst, &w.maze, w.start, w.goal);
        drive_to_goal(e.as_mut(), CAP).unwrap();
        let path = e.reconstruct_path().unwrap();
        let expected = fewest_moves(&w.maze, w.start, w.goal).unwrap();
        assert_eq!(path.len() as u64 - 1, expected, "{}", w.name);
    }
}

#[test]
fn reference_maze_optima() {
    let w = reference::reference_world().unwrap();
    assert_eq!(fewest_moves(&w.maze, w.start, w.goal), Some(43));
    assert_eq!(cheapest_cost(&w.maze, w.start, w.goal), Some(123));
}

#[test]
fn cost_aware_strategies_find_cheapest_path() {
    for w in reachable_worlds() {
        let expected = cheapest_cost(&w.maze, w.start, w.goal).unwrap();
        for strategy in [Strategy::UniformCost, Strategy::AStar] {
            let mut e = graph_engine(strategy, &w.maze, w.start, w.goal);
            let (visit, _) = drive_to_goal(e.as_mut(), CAP).unwrap();
            assert_eq!(visit.path_cost, Some(expected), "{strategy} on {}", w.name);
            let path = e.reconstruct_path().unwrap();
            assert_eq!(path_cost(&w.maze, &path), expected, "{strategy} on {}", w.name);
        }
    }
}

#[test]
fn weighted_detour_separates_moves_from_cost() {
    let w = fixtures::weighted_detour().unwrap();

    let mut bfs = graph_engine(Strategy::BreadthFirst, &w.maze, w.start, w.goal);
    drive_to_goal(bfs.as_mut(), CAP).unwrap();
    let short = bfs.reconstruct_path().unwrap();
    assert_eq!(short.len(), 3);
    assert_eq!(path_cost(&w.maze, &short), 52);

    let mut ucs = graph_engine(Strategy::UniformCost, &w.maze, w.start, w.goal);
    drive_to_goal(ucs.as_mut(), CAP).unwrap();
    let cheap = ucs.reconstruct_path().unwrap();
    assert_eq!(cheap.len(), 5);
    assert_eq!(path_cost(&w.maze, &cheap), 4);
}

#[test]
fn astar_expands_no_more_than_uniform_cost() {
    for w in reachable_worlds() {
        let mut ucs = graph_engine(Strategy::UniformCost, &w.maze, w.start, w.goal);
        let mut astar = graph_engine(Strategy::AStar, &w.maze, w.start, w.goal);
        drive_to_goal(ucs.as_mut(), CAP).unwrap();
        drive_to_goal(astar.as_mut(), CAP).unwrap();
        let (u, a) = (ucs.stats().expansions, astar.stats().expansions);
        assert!(a <= u, "{}: A* expanded {a}, UCS expanded {u}", w.name);
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: RECONSTRUCTION
// ---------------------------------------------------------------------------

#[test]
fn reconstructed_path_round_trips() {
    for w in reachable_worlds() {
        for strategy in Strategy::ALL {
            let mut e = graph_engine(strategy, &w.maze, w.start, w.goal);
            drive_to_goal(e.as_mut(), CAP).unwrap();
            let path = e.reconstruct_path().unwrap();
            assert_eq!(path.first(), Some(&w.start), "{strategy} on {}", w.name);
            assert_eq!(path.last(), Some(&w.goal), "{strategy} on {}", w.name);
            assert!(
                path_is_traversable(&w.maze, &path),
                "{strategy} on {}: {path:?}",
                w.name
            );
        }
    }
}

#[test]
fn reconstruction_is_idempotent_and_survives_further_steps() {
    let w = reference::reference_world().unwrap();
    for strategy in Strategy::ALL {
        let mut e = graph_engine(strategy, &w.maze, w.start, w.goal);
        drive_to_goal(e.as_mut(), CAP).unwrap();
        let first = e.reconstruct_path().unwrap();
        let second = e.reconstruct_path().unwrap();
        assert_eq!(first, second, "{strategy}");

        // The goal's parent link is settled once it is closed.
        let _ = drain(e.as_mut(), CAP);
        assert_eq!(e.reconstruct_path().unwrap(), first, "{strategy}");
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: BOUNDARY-SCENARIOS
// ---------------------------------------------------------------------------

#[test]
fn start_equal_to_goal_yields_goal_first() {
    let maze = MazeV1::open_field(3, 3, 2).unwrap();
    let here = Cell::new(1, 1);
    for strategy in Strategy::ALL {
        let mut e = graph_engine(strategy, &maze, here, here);
        let StepResult::Visited(v) = e.step() else {
            panic!("{strategy}: expected a visit");
        };
        assert_eq!(v.cell, here);
        assert_eq!(e.reconstruct_path().unwrap(), vec![here]);
    }
}

#[test]
fn two_cell_corridor_visits_start_then_goal() {
    let w = fixtures::corridor().unwrap();
    for strategy in Strategy::ALL {
        let mut e = graph_engine(strategy, &w.maze, w.start, w.goal);
        assert_eq!(e.step().cell(), Some(Cell::new(0, 0)), "{strategy}");
        assert_eq!(e.step().cell(), Some(Cell::new(1, 0)), "{strategy}");
        assert_eq!(
            e.reconstruct_path().unwrap(),
            vec![Cell::new(0, 0), Cell::new(1, 0)],
            "{strategy}"
        );
    }
}

#[test]
fn isolated_start_yields_once_then_not_found() {
    let w = fixtures::isolated_start().unwrap();
    for strategy in Strategy::ALL {
        let mut e = graph_engine(strategy, &w.maze, w.start, w.goal);
        assert_eq!(e.step().cell(), Some(w.start), "{strategy}");
        assert!(e.step().is_exhausted(), "{strategy}");
        assert_eq!(e.reconstruct_path(), Err(PathError::NotFound), "{strategy}");
    }
}

#[test]
fn one_way_edge_is_never_taken_backwards() {
    let w = fixtures::one_way_trap().unwrap();
    let back_start = Cell::new(1, 0);
    for strategy in Strategy::ALL {
        let mut e = graph_engine(strategy, &w.maze, back_start, w.start);
        let cells = drain(e.as_mut(), CAP);
        assert!(!cells.contains(&w.start), "{strategy} crossed the one-way edge");
        assert_eq!(cells.len(), 2, "{strategy}: {cells:?}");
        assert_eq!(e.reconstruct_path(), Err(PathError::NotFound));
    }
}

#[test]
fn one_way_edge_is_usable_forwards() {
    let w = fixtures::one_way_trap().unwrap();
    for strategy in Strategy::ALL {
        let mut e = graph_engine(strategy, &w.maze, w.start, w.goal);
        drive_to_goal(e.as_mut(), CAP).unwrap();
        assert_eq!(e.reconstruct_path().unwrap().len(), 3, "{strategy}");
    }
}

#[test]
fn reference_goal_cannot_reach_start() {
    let w = reference::reference_world().unwrap();
    for strategy in Strategy::ALL {
        let mut e = graph_engine(strategy, &w.maze, w.goal, w.start);
        assert!(drive_to_goal(e.as_mut(), CAP).is_none(), "{strategy}");
        assert!(e.step().is_exhausted());
    }
}
