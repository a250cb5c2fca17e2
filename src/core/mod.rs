//! Core types: players, scores, configuration, errors, RNG.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{BoardSize, SessionConfig};
pub use error::{GameError, MoveError};
pub use player::{Player, Score};
pub use rng::GameRng;
