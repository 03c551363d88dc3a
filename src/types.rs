use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two sides. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Red,
    Green,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Green,
            Player::Green => Player::Red,
        }
    }

    /// Numeric code shared with [`Cell::code`]: 1=red, 2=green.
    pub fn code(self) -> u8 {
        match self {
            Player::Red => 1,
            Player::Green => 2,
        }
    }

    /// Inverse of [`Player::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Player::Red),
            2 => Some(Player::Green),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => f.write_str("red"),
            Player::Green => f.write_str("green"),
        }
    }
}

/// Occupancy of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Owned(Player),
}

impl Cell {
    /// 0=empty, 1=red, 2=green.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Owned(player) => player.code(),
        }
    }

    /// Inverse of [`Cell::code`]; `None` for anything but 0, 1 or 2.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            _ => Player::from_code(code).map(Cell::Owned),
        }
    }

    /// The player holding this square, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }
}

/// A board coordinate, always inside the 8x8 grid.
///
/// Only [`Position::new`] builds one from raw coordinates, so every
/// `Position` names one of the 64 squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = EngineError;

    fn try_from(raw: RawPosition) -> Result<Self> {
        Position::new(raw.row, raw.col)
    }
}

impl Position {
    /// Checked constructor; fails with `OutOfRange` outside [0,7].
    pub fn new(row: u8, col: u8) -> Result<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(EngineError::OutOfRange { row, col })
        }
    }

    /// Row, 0..=7 from the top.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column, 0..=7 from the left.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major square index (0..=63).
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_SQUARES);
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    /// The neighbouring square in `direction`, or `None` past the edge.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Position::new(row, col).ok()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight scan directions from a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Scan order used by both legality checking and flip computation.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// `(d_row, d_col)`; rows grow downwards.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_coordinates_outside_grid() {
        assert!(Position::new(7, 7).is_ok());
        assert!(matches!(
            Position::new(8, 0),
            Err(EngineError::OutOfRange { row: 8, col: 0 })
        ));
        assert!(matches!(
            Position::new(0, 255),
            Err(EngineError::OutOfRange { row: 0, col: 255 })
        ));
    }

    #[test]
    fn step_stops_at_every_edge() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::West), None);
        assert_eq!(corner.step(Direction::NorthWest), None);
        assert_eq!(corner.step(Direction::SouthEast), Some(Position::new(1, 1).unwrap()));

        let far = Position::new(7, 7).unwrap();
        assert_eq!(far.step(Direction::South), None);
        assert_eq!(far.step(Direction::East), None);
    }

    #[test]
    fn direction_table_covers_all_unit_offsets_once() {
        let mut deltas: Vec<(i8, i8)> = DIRECTIONS.iter().map(|d| d.delta()).collect();
        deltas.sort();
        deltas.dedup();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
        assert!(deltas.iter().all(|&(r, c)| (-1..=1).contains(&r) && (-1..=1).contains(&c)));
    }

    #[test]
    fn cell_codes_match_player_codes() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::Owned(Player::Red).code(), 1);
        assert_eq!(Cell::Owned(Player::Green).code(), 2);
        assert_eq!(Cell::from_code(3), None);
        assert_eq!(Player::Red.opponent(), Player::Green);
        assert_eq!(Player::Green.opponent(), Player::Red);
    }

    #[test]
    fn step_from_every_square_stays_on_the_grid() {
        for index in 0..NUM_SQUARES {
            let origin = Position::from_index(index);
            for direction in DIRECTIONS {
                if let Some(next) = origin.step(direction) {
                    assert!(next.row() < 8 && next.col() < 8);
                    assert!(next.index() < NUM_SQUARES);
                }
            }
        }
        let edge = Position::new(7, 0).unwrap();
        assert_eq!(edge.step(Direction::South), None);
        assert_eq!(edge.step(Direction::SouthWest), None);
    }

    #[test]
    fn accessors_and_index_agree_at_the_last_row() {
        for col in 0..8 {
            let pos = Position::new(7, col).unwrap();
            assert_eq!((pos.row(), pos.col()), (7, col));
            assert_eq!(pos.index(), 56 + col as usize);
            assert_eq!(Position::from_index(pos.index()), pos);
        }
    }

    #[test]
    fn raw_coordinates_outside_grid_do_not_convert() {
        assert_eq!(
            Position::try_from(RawPosition { row: 0, col: 9 }),
            Err(EngineError::OutOfRange { row: 0, col: 9 })
        );
        assert_eq!(
            Position::try_from(RawPosition { row: 127, col: 0 }),
            Err(EngineError::OutOfRange { row: 127, col: 0 })
        );
        assert_eq!(
            Position::try_from(RawPosition { row: 1, col: 1 }),
            Position::new(1, 1)
        );
    }

    #[test]
    fn owner_reports_the_occupying_player() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Owned(Player::Green).owner(), Some(Player::Green));
    }
}
