use wasm_bindgen::prelude::*;

pub mod ai;
pub mod api;
pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod moves;
pub mod piece;
pub mod types;

pub use ai::search::{AlphaBetaSelector, Searcher, evaluate};
pub use board::Board;
pub use config::EngineConfig;
pub use controller::Controller;
pub use error::{ConfigError, GameError};
pub use game::{GameInstance, MoveSelector};
pub use moves::Move;
pub use piece::Piece;
pub use types::{GameResult, GameState, Outcome, Position, Side};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
