//! wasm-bindgen surface for the presentation layer.
//!
//! Players are passed as numeric codes (1=red, 2=green) on every call;
//! turn alternation is left to the caller.

use tracing::{debug, instrument};
use wasm_bindgen::prelude::*;

use crate::board::BoardState;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::rules;
use crate::types::Player;

/// Board handle owned by the JavaScript side.
#[wasm_bindgen]
pub struct WasmBoard {
    inner: BoardState,
}

impl Default for WasmBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmBoard {
    /// Creates an empty board.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmBoard {
        WasmBoard {
            inner: BoardState::empty(),
        }
    }

    /// Creates a board from `{ start_position: "empty" | "standard" }`.
    /// `undefined` or `null` selects the defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config: JsValue) -> Result<WasmBoard, JsError> {
        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?
        };
        Ok(board_from_config(config))
    }

    /// Creates a board from 64 row-major cell codes.
    #[wasm_bindgen(js_name = fromCells)]
    pub fn from_cells(cells: Vec<u8>) -> Result<WasmBoard, JsError> {
        board_from_cells(&cells).map_err(to_js_error)
    }

    /// Cell code at `(row, col)`: 0=empty, 1=red, 2=green.
    pub fn get(&self, row: u8, col: u8) -> Result<u8, JsError> {
        self.inner
            .get(row, col)
            .map(|cell| cell.code())
            .map_err(to_js_error)
    }

    /// All 64 cell codes, row-major.
    pub fn cells(&self) -> Vec<u8> {
        self.inner.to_array().to_vec()
    }

    #[wasm_bindgen(js_name = isMoveLegal)]
    pub fn is_move_legal(&self, player: u8, row: u8, col: u8) -> Result<bool, JsError> {
        let player = parse_player(player)?;
        rules::is_move_legal(&self.inner, player, row, col).map_err(to_js_error)
    }

    /// Applies the move and returns the flipped squares as row-major indices.
    /// The board is unchanged when an error is returned.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, player: u8, row: u8, col: u8) -> Result<Vec<u8>, JsError> {
        let player = parse_player(player)?;
        let outcome = rules::apply_move(&self.inner, player, row, col).map_err(to_js_error)?;
        self.inner = outcome.board;
        Ok(outcome
            .flipped
            .iter()
            .map(|pos| pos.index() as u8)
            .collect())
    }

    /// Legal targets as an array of `{ row, col }`.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, player: u8) -> Result<JsValue, JsError> {
        let player = parse_player(player)?;
        let moves = rules::legal_moves(&self.inner, player);
        serde_wasm_bindgen::to_value(&moves).map_err(|e| JsError::new(&e.to_string()))
    }
}

#[instrument]
fn board_from_config(config: EngineConfig) -> WasmBoard {
    debug!(?config, "board created from config");
    WasmBoard {
        inner: config.initial_board(),
    }
}

#[instrument(skip(cells), fields(len = cells.len()))]
fn board_from_cells(cells: &[u8]) -> Result<WasmBoard, EngineError> {
    let inner = BoardState::from_array(cells)?;
    let discs = inner.count(Player::Red) + inner.count(Player::Green);
    debug!(discs, "board created from cells");
    Ok(WasmBoard { inner })
}

fn parse_player(code: u8) -> Result<Player, JsError> {
    Player::from_code(code).ok_or_else(|| JsError::new(&format!("invalid player code: {code}")))
}

fn to_js_error(err: EngineError) -> JsError {
    JsError::new(&err.to_string())
}
