//! Random playouts.
//!
//! Plays uniformly random legal moves until the board is cleared or a move
//! cap is hit. Seeded through `GameRng`, so every playout can be replayed.
//! Used to exercise the rules end to end (property tests, benchmarks).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, Score, SessionConfig};
use crate::session::{GameResult, GameSession};

/// Configuration for random playouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutConfig {
    /// Game to start from.
    pub session: SessionConfig,

    /// Maximum moves per game (a game is not guaranteed to end).
    pub max_moves: u32,

    /// Seed for the playout RNG.
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            max_moves: 10_000,
            seed: 42,
        }
    }
}

impl PlayoutConfig {
    /// Set the board size (clamped).
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.session = self.session.with_board_size(size);
        self
    }

    /// Set maximum moves per game.
    #[must_use]
    pub fn with_max_moves(mut self, max: u32) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// What happened in one playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    /// Seed of the RNG the moves were drawn from. Pass to `replay`.
    pub seed: u64,

    /// Successful moves played.
    pub moves: u32,

    /// Moves that removed at least one toothpick.
    pub scoring_moves: u32,

    /// Final scores.
    pub score: Score,

    /// `Some` if the board was cleared before the cap.
    pub outcome: Option<GameResult>,
}

impl PlayoutSummary {
    /// Did the game reach its terminal state?
    #[must_use]
    pub fn finished(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Random playout driver.
#[derive(Clone, Debug, Default)]
pub struct RandomPlayout {
    config: PlayoutConfig,
}

impl RandomPlayout {
    #[must_use]
    pub fn new(config: PlayoutConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PlayoutConfig {
        &self.config
    }

    /// Play `session` forward with random moves from `rng`.
    pub fn play(&self, session: &mut GameSession, rng: &mut GameRng) -> PlayoutSummary {
        let seed = rng.seed();
        let mut moves = 0;
        let mut scoring_moves = 0;

        while moves < self.config.max_moves {
            let legal = session.legal_moves();
            let Some(&pos) = rng.choose(&legal) else {
                break;
            };
            match session.apply_move(pos) {
                Ok(result) => {
                    moves += 1;
                    if result.removed_count > 0 {
                        scoring_moves += 1;
                    }
                }
                // Legal moves are always accepted; stop rather than spin.
                Err(e) => {
                    debug!(%e, "playout move rejected");
                    break;
                }
            }
        }

        PlayoutSummary {
            seed,
            moves,
            scoring_moves,
            score: session.score(),
            outcome: session.outcome(),
        }
    }

    /// Play one fresh game from the configured seed.
    #[must_use]
    pub fn run(&self) -> PlayoutSummary {
        self.replay(self.config.seed)
    }

    /// Play a fresh game from `seed`, e.g. one taken from a batch summary.
    #[must_use]
    pub fn replay(&self, seed: u64) -> PlayoutSummary {
        self.fresh_game(GameRng::new(seed))
    }

    /// Play `games` fresh games, each on its own fork of the seed.
    #[must_use]
    pub fn run_batch(&self, games: usize) -> Vec<PlayoutSummary> {
        let mut root = GameRng::new(self.config.seed);
        (0..games).map(|_| self.fresh_game(root.fork())).collect()
    }

    fn fresh_game(&self, mut rng: GameRng) -> PlayoutSummary {
        let mut session = GameSession::with_config(self.config.session);
        self.play(&mut session, &mut rng)
    }
}
