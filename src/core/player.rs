//! Players and per-player scores.
//!
//! ## Player
//!
//! The two seats at the table, `P1` and `P2`. Exactly one is current.
//!
//! ## Score
//!
//! Toothpicks each player has caused to be removed, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Both players in seat order.
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Removed-toothpick count per player.
///
/// ## Example
///
/// ```
/// use toothpick::core::{Player, Score};
///
/// let mut score = Score::default();
/// score.award(Player::P2, 3);
///
/// assert_eq!(score[Player::P1], 0);
/// assert_eq!(score[Player::P2], 3);
/// assert_eq!(score.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    counts: [u32; 2],
}

impl Score {
    /// A player's count.
    #[must_use]
    pub fn get(&self, player: Player) -> u32 {
        self.counts[player.index()]
    }

    /// Add removed toothpicks to a player's count.
    pub fn award(&mut self, player: Player, removed: u32) {
        self.counts[player.index()] += removed;
    }

    /// Sum over both players.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Player with the strictly higher count, `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        use std::cmp::Ordering;

        match self.get(Player::P1).cmp(&self.get(Player::P2)) {
            Ordering::Greater => Some(Player::P1),
            Ordering::Less => Some(Player::P2),
            Ordering::Equal => None,
        }
    }

    /// Iterate over (Player, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}

impl Index<Player> for Score {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.counts[player.index()]
    }
}

impl IndexMut<Player> for Score {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.counts[player.index()]
    }
}
