//! Board representation.
//!
//! - `cell`: `Orientation`, `Cell`, `Position`
//! - `grid`: the square `Board` and its alternating starting layout

pub mod cell;
pub mod grid;

pub use cell::{Cell, Orientation, Position};
pub use grid::{create_board, Board};
