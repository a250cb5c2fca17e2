//! One game of Toothpick: board, scores, turn order, terminal flag.
//!
//! `GameSession` is the only type the presentation layer needs to hold.
//! It changes state through exactly two operations:
//!
//! - `new_game` / `reset`: fresh board, zero scores, first player to move
//! - `apply_move`: toggle one toothpick, resolve the chain, score, pass turn
//!
//! Everything else is a read-only observer. A rejected move leaves the
//! session exactly as it was, including whose turn it is.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use super::outcome::GameResult;
use crate::board::{Board, Orientation, Position};
use crate::core::{GameError, MoveError, Player, Score, SessionConfig};
use crate::rules::resolve;

/// Lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Terminal: the board is empty. Never left except by starting a new game.
    GameOver,
}

/// Everything the presentation layer needs to render one move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Who made the move (and was credited the removals).
    pub player: Player,

    /// The toggled toothpick.
    pub toggled: Position,

    /// Its orientation after the toggle.
    pub orientation: Orientation,

    /// Board after toggle and chain removal.
    pub board: Board,

    /// Toothpicks removed by this move.
    pub removed_count: usize,

    /// Removed positions, grouped by pass. For highlighting.
    pub removed_cells: Vec<Position>,

    /// Removals per productive pass.
    pub pass_sizes: SmallVec<[usize; 4]>,

    /// Did this move clear the board?
    pub game_over: bool,
}

/// A single game between `P1` and `P2`.
///
/// Snapshots that fail `check_invariants` are refused on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    score: Score,
    current_player: Player,
    status: GameStatus,
    /// Successful moves so far.
    moves_played: u32,
}

#[derive(Deserialize)]
struct RawSession {
    config: SessionConfig,
    board: Board,
    score: Score,
    current_player: Player,
    status: GameStatus,
    moves_played: u32,
}

impl TryFrom<RawSession> for GameSession {
    type Error = GameError;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        let session = GameSession {
            config: raw.config,
            board: raw.board,
            score: raw.score,
            current_player: raw.current_player,
            status: raw.status,
            moves_played: raw.moves_played,
        };
        session.check_invariants()?;
        Ok(session)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_config(SessionConfig::default())
    }
}

impl GameSession {
    /// Start a game on a `size × size` board (clamped to `3..=9`).
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_config(SessionConfig::new(size))
    }

    /// Start a game from an explicit configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            board: Board::alternating(config.board_size),
            score: Score::default(),
            current_player: config.first_player,
            status: GameStatus::Playing,
            moves_played: 0,
        }
    }

    /// Discard the current game and start over at a new size.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, size: usize) {
        let config = self.config.with_board_size(size);
        *self = Self::with_config(config);
        debug!(size = %config.board_size, "new game");
        self.debug_check();
    }

    /// Start over at the current size.
    pub fn reset(&mut self) {
        self.new_game(self.config.board_size.get());
    }

    /// Toggle the toothpick at `pos` for the current player.
    ///
    /// On success the removals are credited to the mover, the board is
    /// replaced with the resolved one, and the turn passes. The game ends
    /// the moment the board is empty.
    ///
    /// Fails without touching the session when the game is over, `pos` is
    /// off the board, or `pos` is already empty.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, pos: Position) -> Result<MoveResult, GameError> {
        if self.status == GameStatus::GameOver {
            debug!("move rejected: game over");
            return Err(MoveError::GameOver.into());
        }

        let mut toggled = self.board.clone();
        let orientation = toggled.toggle(pos).inspect_err(|e| debug!(%e, "move rejected"))?;

        let resolution = resolve(&toggled);
        let player = self.current_player;
        self.score.award(player, resolution.removed_count as u32);
        self.board = resolution.board;
        self.current_player = player.opponent();
        self.moves_played += 1;

        let game_over = self.board.is_cleared();
        if game_over {
            self.status = GameStatus::GameOver;
            info!(p1 = self.score[Player::P1], p2 = self.score[Player::P2], "game over");
        }
        debug!(removed = resolution.removed_count, "move applied");
        self.debug_check();

        Ok(MoveResult {
            player,
            toggled: pos,
            orientation,
            board: self.board.clone(),
            removed_count: resolution.removed_count,
            removed_cells: resolution.removed_cells,
            pass_sizes: resolution.pass_sizes,
            game_over,
        })
    }

    // === Observers ===

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Scores so far.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Lifecycle state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the board is empty. Never reverts.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Configuration this game was started with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of successful moves so far.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// 1-based number of the turn about to be played.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.moves_played + 1
    }

    /// Every position a move may target right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.occupied_positions().collect()
    }

    /// Winner or draw once the game is over, `None` while playing.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.is_game_over().then(|| GameResult::from_score(&self.score))
    }

    /// End-of-game text for the summary screen, `None` while playing.
    #[must_use]
    pub fn final_summary(&self) -> Option<String> {
        let outcome = self.outcome()?;
        Some(format!(
            "Game Over!\nFinal Score:\n{}: {}\n{}: {}\n{}",
            Player::P1,
            self.score[Player::P1],
            Player::P2,
            self.score[Player::P2],
            outcome
        ))
    }

    /// Verify the session's internal consistency.
    ///
    /// - board storage matches its size, which matches the config
    /// - every starting toothpick is either on the board or credited
    /// - the terminal flag agrees with the board
    pub fn check_invariants(&self) -> Result<(), GameError> {
        self.board.check_invariants()?;

        if self.board.size() != self.config.board_size.get() {
            return Err(GameError::InvariantViolation(format!(
                "board is {}x{} but config says {}",
                self.board.size(),
                self.board.size(),
                self.config.board_size
            )));
        }

        let accounted = self.board.occupied_count() + self.score.total() as usize;
        if accounted != self.config.board_size.cell_count() {
            return Err(GameError::InvariantViolation(format!(
                "{} toothpicks accounted for, expected {}",
                accounted,
                self.config.board_size.cell_count()
            )));
        }

        if self.is_game_over() != self.board.is_cleared() {
            return Err(GameError::InvariantViolation(format!(
                "status {:?} disagrees with board ({} occupied)",
                self.status,
                self.board.occupied_count()
            )));
        }

        Ok(())
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            if let Err(e) = self.check_invariants() {
                panic!("{}", e);
            }
        }
    }
}
