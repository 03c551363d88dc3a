use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod rules;
pub mod types;
pub mod wasm;

pub use board::BoardState;
pub use config::{EngineConfig, StartPosition};
pub use error::{EngineError, Result};
pub use rules::{MoveOutcome, apply_move, is_move_legal};
pub use types::{Cell, DIRECTIONS, Direction, Player, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
