use serde::{Deserialize, Serialize};

use crate::board::BoardState;

/// How the board is seeded at game start.
///
/// `Empty` is the default: no move is legal until discs of both colours
/// have been placed with [`BoardState::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPosition {
    #[default]
    Empty,
    /// Four centre discs: green on (3,3)/(4,4), red on (3,4)/(4,3).
    Standard,
}

/// Engine configuration supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    pub start_position: StartPosition,
}

impl EngineConfig {
    pub fn initial_board(&self) -> BoardState {
        BoardState::with_start(self.start_position)
    }
}
