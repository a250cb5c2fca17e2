//! # toothpick
//!
//! Rules engine for the two-player Toothpick Game.
//!
//! An N×N grid (3 ≤ N ≤ 9) starts full of toothpicks in an alternating
//! horizontal/vertical pattern. Players take turns rotating one toothpick.
//! After each rotation, every toothpick whose nearest neighbors in all four
//! directions share its orientation is removed and credited to the mover.
//! The game ends when the board is empty; most toothpicks wins.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: matching and chain resolution take `&Board` and
//!    return new values. Boards clone in O(1) via `im`.
//!
//! 2. **One owner**: `GameSession` holds all mutable game state and changes
//!    only through `new_game`/`reset` and `apply_move`.
//!
//! 3. **Synchronous core**: `apply_move` returns the complete `MoveResult`.
//!    Animation is the front end's business (`MoveReveal` helps).
//!
//! ## Modules
//!
//! - `core`: players, scores, configuration, errors, RNG
//! - `board`: cells, positions, the grid and its starting layout
//! - `rules`: neighbor scan, match rule, chain resolver
//! - `session`: game session, outcome, staged reveal
//! - `playout`: seeded random playouts
//!
//! ## Example
//!
//! ```
//! use toothpick::{GameSession, Player, Position};
//!
//! let mut session = GameSession::new(3);
//! let result = session.apply_move(Position::new(1, 1)).unwrap();
//!
//! assert_eq!(result.removed_count, 1);
//! assert_eq!(session.score()[Player::P1], 1);
//! assert_eq!(session.current_player(), Player::P2);
//! ```

pub mod board;
pub mod core;
pub mod playout;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BoardSize, GameError, GameRng, MoveError, Player, Score, SessionConfig};

pub use crate::board::{create_board, Board, Cell, Orientation, Position};

pub use crate::rules::{first_occupied_neighbor, is_removable, resolve, Direction, Neighbor, Resolution};

pub use crate::session::{
    GameResult, GameSession, GameStatus, MoveResult, MoveReveal, RevealPhase, RevealTimings,
};

pub use crate::playout::{PlayoutConfig, PlayoutSummary, RandomPlayout};
