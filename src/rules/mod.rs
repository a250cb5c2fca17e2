//! Matching rules.
//!
//! - `neighbor`: nearest toothpick in each cardinal direction
//! - `matching`: whether a single toothpick is removable
//! - `chain`: pass-based removal to a fixed point
//!
//! Everything here is pure: functions take a `&Board` and never mutate it.

pub mod chain;
pub mod matching;
pub mod neighbor;

pub use chain::{removable_cells, resolve, Resolution};
pub use matching::is_removable;
pub use neighbor::{first_occupied_neighbor, Direction, Neighbor};
