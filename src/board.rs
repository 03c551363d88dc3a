use crate::config::StartPosition;
use crate::error::{EngineError, Result};
use crate::types::{Cell, NUM_SQUARES, Player, Position};

/// 8x8 grid state represented by one occupancy bitboard per player.
///
/// Bit `row * 8 + col` is set in at most one of the two masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardState {
    red: u64,
    green: u64,
}

impl BoardState {
    /// All 64 squares empty.
    pub fn empty() -> Self {
        Self { red: 0, green: 0 }
    }

    /// Traditional opening:
    /// (3,3)=green, (3,4)=red, (4,3)=red, (4,4)=green.
    pub fn standard() -> Self {
        Self {
            red: bit(3 * 8 + 4) | bit(4 * 8 + 3),
            green: bit(3 * 8 + 3) | bit(4 * 8 + 4),
        }
    }

    /// Board seeded according to `start`.
    pub fn with_start(start: StartPosition) -> Self {
        match start {
            StartPosition::Empty => Self::empty(),
            StartPosition::Standard => Self::standard(),
        }
    }

    /// Cell at `(row, col)`; fails with `OutOfRange` outside [0,7].
    pub fn get(&self, row: u8, col: u8) -> Result<Cell> {
        Ok(self.get_at(Position::new(row, col)?))
    }

    /// Overwrites the square unconditionally; legality is not checked here.
    pub fn set(&mut self, row: u8, col: u8, cell: Cell) -> Result<()> {
        self.set_at(Position::new(row, col)?, cell);
        Ok(())
    }

    /// Whether `(row, col)` holds no disc.
    pub fn is_empty(&self, row: u8, col: u8) -> Result<bool> {
        Ok(self.get(row, col)? == Cell::Empty)
    }

    /// Cell at an already checked position.
    pub fn get_at(&self, pos: Position) -> Cell {
        let square = bit(pos.index());
        if (self.red & square) != 0 {
            Cell::Owned(Player::Red)
        } else if (self.green & square) != 0 {
            Cell::Owned(Player::Green)
        } else {
            Cell::Empty
        }
    }

    /// Overwrites the cell at an already checked position.
    pub fn set_at(&mut self, pos: Position, cell: Cell) {
        let square = bit(pos.index());
        self.red &= !square;
        self.green &= !square;
        match cell {
            Cell::Empty => {}
            Cell::Owned(Player::Red) => self.red |= square,
            Cell::Owned(Player::Green) => self.green |= square,
        }
    }

    /// Number of discs owned by `player`.
    pub fn count(&self, player: Player) -> u8 {
        self.mask(player).count_ones() as u8
    }

    /// All positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..NUM_SQUARES).map(Position::from_index)
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=red, 2=green.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut cells = [0u8; NUM_SQUARES];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = self.get_at(Position::from_index(index)).code();
        }
        cells
    }

    /// Inverse of [`BoardState::to_array`].
    pub fn from_array(cells: &[u8]) -> Result<Self> {
        if cells.len() != NUM_SQUARES {
            return Err(EngineError::InvalidLength {
                expected: NUM_SQUARES,
                actual: cells.len(),
            });
        }

        let mut board = Self::empty();
        for (index, &code) in cells.iter().enumerate() {
            let cell = Cell::from_code(code).ok_or(EngineError::InvalidCellCode { index, code })?;
            board.set_at(Position::from_index(index), cell);
        }
        Ok(board)
    }

    /// Occupancy mask for `player`.
    pub(crate) fn mask(&self, player: Player) -> u64 {
        match player {
            Player::Red => self.red,
            Player::Green => self.green,
        }
    }

    /// Recolours every square in `squares` to `player`.
    pub(crate) fn recolor(&mut self, squares: u64, player: Player) {
        match player {
            Player::Red => {
                self.red |= squares;
                self.green &= !squares;
            }
            Player::Green => {
                self.green |= squares;
                self.red &= !squares;
            }
        }
    }
}

pub(crate) fn bit(index: usize) -> u64 {
    if index < NUM_SQUARES { 1u64 << index } else { 0 }
}
