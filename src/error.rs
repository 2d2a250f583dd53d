//! Error types for the game adapter and engine configuration.
//!
//! Rule-level operations never fail: they report illegal input through
//! `bool` / `Option` results. These errors cover the session layer above them.

use thiserror::Error;

use crate::moves::Move;
use crate::types::{Outcome, Side};

/// Errors raised by [`crate::game::GameInstance`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already over (result code {})", .0.code())]
    GameOver(Outcome),

    #[error("it is not {0}'s turn")]
    WrongTurn(Side),

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("AI selected an illegal move: {0}")]
    IllegalAiMove(Move),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while validating an [`crate::config::EngineConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("search depth must be between {min} and {max}, got {found}")]
    SearchDepthOutOfRange { found: u8, min: u8, max: u8 },

    #[error("invalid options: {0}")]
    Options(String),
}
