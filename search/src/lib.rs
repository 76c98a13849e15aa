//! Labyrinth Search: step-wise grid search with four interchangeable strategies.
//!
//! This crate provides the search core. It depends only on
//! `labyrinth_kernel`; it does NOT depend on `labyrinth_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! labyrinth_kernel  ←  labyrinth_search  ←  labyrinth_harness
//! (cells, mazes)       (engines, paths)     (driver, reports, worlds)
//! ```
//!
//! # Key types
//!
//! - [`contract::Environment`]: the traversal/cost queries every strategy consumes
//! - [`search::SearchEngine`]: construct once, call `step()` until the goal or
//!   [`node::StepResult::Exhausted`]
//! - [`node::Strategy`] and [`node::SearchMode`]: the two axes a driver selects
//! - [`path::ParentMap`] and [`path::reconstruct`]: start-to-goal path recovery
//!
//! # Execution model
//!
//! Engines are explicit state machines. Each `step()` finishes expanding the
//! node returned by the previous call, then pops and returns the next one.
//! Tree mode carries no termination guarantee on cyclic graphs; drivers must
//! cap steps or wall-clock time.

#![forbid(unsafe_code)]

pub mod astar;
pub mod breadth_first;
pub mod contract;
pub mod depth_first;
pub mod error;
pub mod frontier;
pub mod node;
pub mod path;
pub mod search;
mod state;
pub mod uniform_cost;
