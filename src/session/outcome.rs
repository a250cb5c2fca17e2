//! Final result of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Score};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly more toothpicks than the opponent.
    Winner(Player),
    /// Equal counts.
    Draw,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_score(score: &Score) -> Self {
        match score.leader() {
            Some(p) => GameResult::Winner(p),
            None => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} is the winner!", p),
            GameResult::Draw => write!(f, "It's a tie!"),
        }
    }
}
