//! Labyrinth Kernel: grid value types, the maze model, and content addressing.
//!
//! # API Surface
//!
//! - [`grid::Cell`] and [`grid::Direction`]: coordinates and the four cardinal moves
//! - [`maze::MazeV1`]: rectangular maze with per-cell exits and entry costs
//! - [`proof::canon::canonical_json_bytes`] and [`proof::hash::canonical_hash`]:
//!   the single serialization-for-hashing path
//!
//! # Module Dependency Direction
//!
//! `grid` ← `maze` ← `proof`
//!
//! `maze` uses `proof` only to compute its own digest. `grid` depends on
//! nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod maze;
pub mod proof;
