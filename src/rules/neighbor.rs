//! Nearest-neighbor scan along the four cardinal directions.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Orientation, Position};

/// Cardinal direction on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Scan order used by the match rule.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step as `(dr, dc)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// What a scan found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neighbor {
    /// Walked off the board without meeting a toothpick.
    Edge,
    /// First toothpick met, empties skipped.
    Toothpick(Orientation),
}

impl Neighbor {
    /// Does this neighbor allow a toothpick of `orientation` to be removed?
    ///
    /// Edges never block; toothpicks block unless they match.
    #[must_use]
    pub fn agrees_with(self, orientation: Orientation) -> bool {
        match self {
            Neighbor::Edge => true,
            Neighbor::Toothpick(o) => o == orientation,
        }
    }
}

/// Walk from `pos` one step at a time in `dir`, skipping empty cells.
///
/// The starting cell itself is never inspected.
///
/// ```
/// use toothpick::board::{create_board, Orientation, Position};
/// use toothpick::rules::{first_occupied_neighbor, Direction, Neighbor};
///
/// let board = create_board(3);
/// let corner = Position::new(0, 0);
/// assert_eq!(first_occupied_neighbor(&board, corner, Direction::Up), Neighbor::Edge);
/// assert_eq!(
///     first_occupied_neighbor(&board, corner, Direction::Right),
///     Neighbor::Toothpick(Orientation::Vertical)
/// );
/// ```
#[must_use]
pub fn first_occupied_neighbor(board: &Board, pos: Position, dir: Direction) -> Neighbor {
    let (dr, dc) = dir.delta();
    let mut cursor = pos.offset(dr, dc);

    while let Some(p) = cursor.filter(|&p| board.contains(p)) {
        if let Some(o) = board.orientation(p) {
            return Neighbor::Toothpick(o);
        }
        cursor = p.offset(dr, dc);
    }

    Neighbor::Edge
}
