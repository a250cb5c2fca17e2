//! Session configuration.
//!
//! - `BoardSize`: validated side length of the square grid
//! - `SessionConfig`: everything needed to start a game
//!
//! Out-of-range sizes are clamped when starting a game so that the game is
//! always playable. Callers that prefer rejection use `BoardSize::new`.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::Player;

/// Side length of the square board, always within `MIN..=MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest playable board.
    pub const MIN: usize = 3;
    /// Largest playable board.
    pub const MAX: usize = 9;
    /// Size used when nothing (or nothing sensible) is requested.
    pub const DEFAULT: BoardSize = BoardSize(5);

    /// Validate a size, rejecting anything outside `MIN..=MAX`.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(GameError::InvalidSize(size))
        }
    }

    /// Clamp a size to the nearest bound.
    #[must_use]
    pub fn clamped(size: usize) -> Self {
        Self(size.clamp(Self::MIN, Self::MAX))
    }

    /// Interpret free-form size input.
    ///
    /// Numbers are clamped (negatives to `MIN`); anything unparsable falls
    /// back to `DEFAULT`.
    #[must_use]
    pub fn parse_or_default(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(n) if n < Self::MIN as i64 => Self(Self::MIN),
            Ok(n) => Self::clamped(usize::try_from(n).unwrap_or(Self::MAX)),
            Err(_) => Self::DEFAULT,
        }
    }

    /// Raw side length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of cells on a board of this size.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = GameError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Configuration for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Side length of the board.
    pub board_size: BoardSize,

    /// Who moves first.
    pub first_player: Player,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::DEFAULT,
            first_player: Player::P1,
        }
    }
}

impl SessionConfig {
    /// Config with the given size (clamped) and default first player.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::default().with_board_size(size)
    }

    /// Set the board size, clamping to `BoardSize::MIN..=BoardSize::MAX`.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = BoardSize::clamped(size);
        self
    }

    /// Set who moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_validation() {
        assert_eq!(BoardSize::new(3).unwrap().get(), 3);
        assert_eq!(BoardSize::new(9).unwrap().get(), 9);
        assert_eq!(BoardSize::new(2), Err(GameError::InvalidSize(2)));
        assert_eq!(BoardSize::new(10), Err(GameError::InvalidSize(10)));
    }

    #[test]
    fn test_board_size_clamping() {
        assert_eq!(BoardSize::clamped(0).get(), 3);
        assert_eq!(BoardSize::clamped(7).get(), 7);
        assert_eq!(BoardSize::clamped(100).get(), 9);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(BoardSize::parse_or_default("4").get(), 4);
        assert_eq!(BoardSize::parse_or_default(" 12 ").get(), 9);
        assert_eq!(BoardSize::parse_or_default("-3").get(), 3);
        assert_eq!(BoardSize::parse_or_default("").get(), 5);
        assert_eq!(BoardSize::parse_or_default("abc").get(), 5);
    }

    #[test]
    fn test_cell_count_and_display() {
        let size = BoardSize::clamped(4);
        assert_eq!(size.cell_count(), 16);
        assert_eq!(format!("{}", size), "4x4");
    }

    #[test]
    fn test_config_builder() {
        let config = SessionConfig::default()
            .with_board_size(1)
            .with_first_player(Player::P2);

        assert_eq!(config.board_size.get(), 3);
        assert_eq!(config.first_player, Player::P2);
        assert_eq!(SessionConfig::new(6).board_size.get(), 6);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::new(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        // Out-of-range sizes do not deserialize.
        let bad = r#"{"board_size":12,"first_player":"P1"}"#;
        assert!(serde_json::from_str::<SessionConfig>(bad).is_err());
    }
}
