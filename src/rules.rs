use tracing::{debug, trace, warn};

use crate::board::{BoardState, bit};
use crate::error::{EngineError, Result};
use crate::types::{Cell, DIRECTIONS, Direction, Player, Position};

/// Result of applying a legal move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: BoardState,
    pub placed: Position,
    /// Captured discs, in direction-table order and then by distance from `placed`.
    pub flipped: Vec<Position>,
}

/// Returns whether `player` may place a disc at `(row, col)`.
///
/// An occupied target is `Ok(false)`. Only coordinates outside the grid fail.
pub fn is_move_legal(board: &BoardState, player: Player, row: u8, col: u8) -> Result<bool> {
    let origin = Position::new(row, col)?;
    if board.get_at(origin) != Cell::Empty {
        return Ok(false);
    }

    Ok(DIRECTIONS
        .iter()
        .any(|&direction| bracket(board, player, origin, direction) != 0))
}

/// Directions in which a disc at `(row, col)` would bracket opposing discs.
pub fn bracketed_directions(
    board: &BoardState,
    player: Player,
    row: u8,
    col: u8,
) -> Result<Vec<Direction>> {
    let origin = Position::new(row, col)?;
    if board.get_at(origin) != Cell::Empty {
        return Ok(Vec::new());
    }

    Ok(DIRECTIONS
        .iter()
        .copied()
        .filter(|&direction| bracket(board, player, origin, direction) != 0)
        .collect())
}

/// Discs that would flip if `player` moved at `(row, col)`, without moving.
pub fn flips(board: &BoardState, player: Player, row: u8, col: u8) -> Result<Vec<Position>> {
    let origin = Position::new(row, col)?;
    if board.get_at(origin) != Cell::Empty {
        return Ok(Vec::new());
    }
    Ok(captured_lines(board, player, origin))
}

/// Places a disc for `player` and flips every bracketed line.
///
/// `board` itself is left untouched; the updated grid is returned in the outcome.
pub fn apply_move(board: &BoardState, player: Player, row: u8, col: u8) -> Result<MoveOutcome> {
    let placed = Position::new(row, col)?;
    let flipped = if board.get_at(placed) == Cell::Empty {
        captured_lines(board, player, placed)
    } else {
        Vec::new()
    };

    if flipped.is_empty() {
        warn!(%player, %placed, "apply_move called with an illegal move");
        return Err(EngineError::InvalidMove {
            player,
            position: placed,
        });
    }

    let mut next = *board;
    next.set_at(placed, Cell::Owned(player));
    let flip_mask = flipped.iter().fold(0u64, |mask, pos| mask | bit(pos.index()));
    next.recolor(flip_mask, player);

    debug!(%player, %placed, flipped = flipped.len(), "move applied");

    Ok(MoveOutcome {
        board: next,
        placed,
        flipped,
    })
}

/// Every legal target for `player`, row-major.
pub fn legal_moves(board: &BoardState, player: Player) -> Vec<Position> {
    BoardState::positions()
        .filter(|&pos| board.get_at(pos) == Cell::Empty)
        .filter(|&pos| {
            DIRECTIONS
                .iter()
                .any(|&direction| bracket(board, player, pos, direction) != 0)
        })
        .collect()
}

fn captured_lines(board: &BoardState, player: Player, origin: Position) -> Vec<Position> {
    let mut flipped = Vec::new();
    for direction in DIRECTIONS {
        let line = bracket(board, player, origin, direction);
        if line == 0 {
            continue;
        }
        trace!(?direction, discs = line.count_ones(), "bracket found");

        let mut pos = origin;
        while let Some(next) = pos.step(direction) {
            if (line & bit(next.index())) == 0 {
                break;
            }
            flipped.push(next);
            pos = next;
        }
    }
    flipped
}

/// Scans outward from `origin` and returns the mask of opposing discs closed
/// off by a `player` disc, or 0 when an empty square, the edge, or an
/// adjacent own disc ends the scan first.
fn bracket(board: &BoardState, player: Player, origin: Position, direction: Direction) -> u64 {
    let me = board.mask(player);
    let opp = board.mask(player.opponent());

    let mut line = 0u64;
    let mut pos = origin;
    while let Some(next) = pos.step(direction) {
        let square = bit(next.index());
        if (opp & square) != 0 {
            line |= square;
        } else if (me & square) != 0 {
            return line;
        } else {
            return 0;
        }
        pos = next;
    }

    0
}
