use crate::types::{Player, Position};

/// Errors raised by the board and the rules engine.
///
/// An illegal move is not an error: [`crate::rules::is_move_legal`] reports
/// it as `false`. `InvalidMove` only covers applying such a move anyway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },

    #[error("illegal move for {player} at {position}")]
    InvalidMove { player: Player, position: Position },

    #[error("board data has wrong length: expected {expected} cells, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid cell code {code} at index {index}")]
    InvalidCellCode { index: usize, code: u8 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
