//! The square toothpick grid.
//!
//! Cells live in a persistent `im::Vector` in row-major order, so cloning a
//! board is O(1). The chain resolver relies on that: it always works on its
//! own copy and never touches the caller's board.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::cell::{Cell, Orientation, Position};
use crate::core::{BoardSize, GameError, MoveError};

/// `size × size` grid of cells.
///
/// Deserializing checks that the stored cells fit the declared size.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

/// Unchecked wire form of `Board`.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vector<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let board = Board {
            size: raw.size,
            cells: raw.cells,
        };
        board.check_invariants()?;
        Ok(board)
    }
}

/// Fresh board for a requested size, clamped to `3..=9`.
///
/// Cell `(r, c)` is `Horizontal` when `r + c` is even, `Vertical` otherwise.
#[must_use]
pub fn create_board(size: usize) -> Board {
    Board::alternating(BoardSize::clamped(size))
}

impl Board {
    /// Fully occupied board in the alternating H/V starting pattern.
    ///
    /// ```
    /// use toothpick::board::{Board, Cell, Orientation, Position};
    /// use toothpick::core::BoardSize;
    ///
    /// let board = Board::alternating(BoardSize::new(3).unwrap());
    /// assert_eq!(board.get(Position::new(0, 0)), Some(Cell::Toothpick(Orientation::Horizontal)));
    /// assert_eq!(board.get(Position::new(0, 1)), Some(Cell::Toothpick(Orientation::Vertical)));
    /// assert_eq!(board.occupied_count(), 9);
    /// ```
    #[must_use]
    pub fn alternating(size: BoardSize) -> Self {
        let n = size.get();
        let cells = (0..n * n)
            .map(|i| {
                let (r, c) = (i / n, i % n);
                if (r + c) % 2 == 0 {
                    Cell::Toothpick(Orientation::Horizontal)
                } else {
                    Cell::Toothpick(Orientation::Vertical)
                }
            })
            .collect();
        Self { size: n, cells }
    }

    /// Build a board from explicit rows.
    ///
    /// Rows must form a square whose side is a valid `BoardSize`.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, GameError> {
        let size = BoardSize::new(rows.len())?.get();
        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(GameError::MalformedBoard(format!(
                "row {} has {} cells, expected {}",
                r,
                row.len(),
                size
            )));
        }
        Ok(Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Is the position on the board?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Cell at a position, `None` if off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            self.cells.get(self.index(pos)).copied()
        } else {
            None
        }
    }

    /// Orientation at a position, `None` if empty or off the board.
    #[must_use]
    pub fn orientation(&self, pos: Position) -> Option<Orientation> {
        self.get(pos).and_then(Cell::orientation)
    }

    /// Rotate the toothpick at `pos` a quarter turn.
    ///
    /// Returns its new orientation.
    pub fn toggle(&mut self, pos: Position) -> Result<Orientation, MoveError> {
        let cell = self.get(pos).ok_or(MoveError::OutOfBounds(pos))?;
        let current = cell.orientation().ok_or(MoveError::EmptyCell(pos))?;
        let next = current.toggled();
        let idx = self.index(pos);
        self.cells.set(idx, Cell::Toothpick(next));
        Ok(next)
    }

    /// Remove the toothpick at `pos`. No-op for empty or off-board positions.
    pub fn clear(&mut self, pos: Position) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.cells.set(idx, Cell::Empty);
        }
    }

    /// Number of toothpicks still on the board.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// True once every toothpick is gone.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|c| !c.is_occupied())
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let n = self.size;
        (0..n * n).map(move |i| Position::new(i / n, i % n))
    }

    /// Occupied positions in row-major order.
    pub fn occupied_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&p| self.get(p).is_some_and(|c| c.is_occupied()))
    }

    /// Cells of one row, left to right.
    pub fn row(&self, r: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = (r * self.size).min(self.cells.len());
        let end = (start + self.size).min(self.cells.len());
        self.cells.iter().skip(start).take(end - start).copied()
    }

    /// Verify storage matches the declared size.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        if !(BoardSize::MIN..=BoardSize::MAX).contains(&self.size) {
            return Err(GameError::InvariantViolation(format!(
                "board size {} outside {}..={}",
                self.size,
                BoardSize::MIN,
                BoardSize::MAX
            )));
        }
        if self.cells.len() != self.size * self.size {
            return Err(GameError::InvariantViolation(format!(
                "{} cells stored for a {}x{} board",
                self.cells.len(),
                self.size,
                self.size
            )));
        }
        Ok(())
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.size {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in self.row(r) {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

/// One row per non-blank line. `H`/`—` horizontal, `V`/`|` vertical,
/// `.`/`·`/`_` empty. Whitespace inside a line is ignored.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| match ch {
                        'H' | 'h' | '—' | '-' => Ok(Cell::Toothpick(Orientation::Horizontal)),
                        'V' | 'v' | '|' => Ok(Cell::Toothpick(Orientation::Vertical)),
                        '.' | '·' | '_' => Ok(Cell::Empty),
                        other => Err(GameError::MalformedBoard(format!("unexpected character {other:?}"))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(&rows)
    }
}
