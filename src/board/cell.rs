//! Grid primitives: orientation, cell contents, coordinates.

use serde::{Deserialize, Serialize};

/// Rotation of a toothpick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Lying flat, drawn as `—`.
    Horizontal,
    /// Rotated 90°, drawn as `|`.
    Vertical,
}

impl Orientation {
    /// The orientation after a quarter turn.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Glyph used by the text renderer.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Orientation::Horizontal => '—',
            Orientation::Vertical => '|',
        }
    }
}

/// Contents of one grid square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Toothpick already removed.
    #[default]
    Empty,
    /// Toothpick still on the board.
    Toothpick(Orientation),
}

impl Cell {
    /// Orientation of the toothpick, if any.
    #[must_use]
    pub const fn orientation(self) -> Option<Orientation> {
        match self {
            Cell::Empty => None,
            Cell::Toothpick(o) => Some(o),
        }
    }

    /// True when a toothpick occupies this cell.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Cell::Toothpick(_))
    }

    /// Glyph used by the text renderer (`·` for empty).
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '·',
            Cell::Toothpick(o) => o.glyph(),
        }
    }
}

impl From<Orientation> for Cell {
    fn from(o: Orientation) -> Self {
        Cell::Toothpick(o)
    }
}

/// Grid coordinate, `(row, col)`, both 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset, `None` if either coordinate would go negative.
    ///
    /// Upper bounds are the board's business.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
