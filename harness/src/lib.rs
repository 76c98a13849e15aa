//! Labyrinth Harness: the reference driver for the search engines.
//!
//! The harness owns everything around a search that the engines deliberately
//! leave to the caller: step and wall-clock caps, goal detection, metrics,
//! path reconstruction on success, and content-addressed run reports.
//!
//! The harness does NOT implement search logic; it steps engines built by
//! `labyrinth_search::search::new_engine`. Worlds provide maze data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod policy;
pub mod report;
pub mod runner;
pub mod worlds;
