//! Grid value types shared by every layer above the kernel.

pub mod cell;
pub mod direction;

pub use cell::Cell;
pub use direction::Direction;
