//! Game sessions: the surface a presentation layer talks to.
//!
//! - `game`: `GameSession`, the turn/score state machine
//! - `outcome`: winner or draw at the end
//! - `reveal`: time-driven staging of a `MoveResult` for animated UIs

pub mod game;
pub mod outcome;
pub mod reveal;

pub use game::{GameSession, GameStatus, MoveResult};
pub use outcome::GameResult;
pub use reveal::{MoveReveal, RevealPhase, RevealTimings};
