//! Chain-reaction resolution.
//!
//! Removal runs in passes until a fixed point:
//!
//! 1. Scan every cell in row-major order and collect the removable ones,
//!    judged against the board as it stood at the start of the pass.
//! 2. If nothing was collected, stop.
//! 3. Otherwise clear every collected cell at once and go back to 1.
//!
//! Every pass removes at least one toothpick, so there are at most
//! `size * size` productive passes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::matching::is_removable;
use crate::board::{Board, Position};

/// Outcome of resolving a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Board after all passes.
    pub board: Board,

    /// Total toothpicks removed.
    pub removed_count: usize,

    /// Removed positions, grouped by pass, row-major within a pass.
    pub removed_cells: Vec<Position>,

    /// Removals per productive pass; sums to `removed_count`.
    pub pass_sizes: SmallVec<[usize; 4]>,
}

impl Resolution {
    /// Iterate over the removed cells one pass at a time.
    ///
    /// Stops early if `pass_sizes` runs past `removed_cells`.
    pub fn passes(&self) -> impl Iterator<Item = &[Position]> + '_ {
        let mut start: usize = 0;
        self.pass_sizes.iter().map_while(move |&len| {
            let end = start.checked_add(len)?;
            let pass = self.removed_cells.get(start..end)?;
            start = end;
            Some(pass)
        })
    }

    /// Did anything get removed?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed_count == 0
    }
}

/// Positions removable on `board` right now, row-major.
#[must_use]
pub fn removable_cells(board: &Board) -> Vec<Position> {
    board
        .occupied_positions()
        .filter(|&p| is_removable(board, p))
        .collect()
}

/// Run passes to a fixed point on a copy of `board`.
///
/// The input is left untouched.
///
/// ```
/// use toothpick::board::{Board, Position};
/// use toothpick::rules::resolve;
///
/// let board: Board = "H V H\nV V V\nH V H".parse().unwrap();
/// let result = resolve(&board);
///
/// assert_eq!(result.removed_count, 1);
/// assert_eq!(result.removed_cells, vec![Position::new(1, 1)]);
/// ```
#[must_use]
pub fn resolve(board: &Board) -> Resolution {
    let mut current = board.clone();
    let mut removed_cells = Vec::new();
    let mut pass_sizes: SmallVec<[usize; 4]> = SmallVec::new();

    loop {
        let batch = removable_cells(&current);
        if batch.is_empty() {
            break;
        }

        trace!(pass = pass_sizes.len() + 1, removed = batch.len(), "chain pass");
        for &pos in &batch {
            current.clear(pos);
        }
        pass_sizes.push(batch.len());
        removed_cells.extend(batch);
    }

    Resolution {
        board: current,
        removed_count: removed_cells.len(),
        removed_cells,
        pass_sizes,
    }
}
