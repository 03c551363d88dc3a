#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use othello_engine::wasm::WasmBoard;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const RED: u8 = 1;
const GREEN: u8 = 2;

fn standard_config() -> JsValue {
    let config = Object::new();
    Reflect::set(
        &config,
        &JsValue::from_str("start_position"),
        &JsValue::from_str("standard"),
    )
    .unwrap();
    config.into()
}

#[wasm_bindgen_test]
fn ready_probe() {
    assert!(othello_engine::wasm_ready());
}

#[wasm_bindgen_test]
fn default_board_is_empty() {
    let board = WasmBoard::from_config(JsValue::UNDEFINED).unwrap();

    assert_eq!(board.cells(), vec![0u8; 64]);
    assert!(!board.is_move_legal(RED, 2, 3).unwrap());
}

#[wasm_bindgen_test]
fn standard_board_accepts_opening_move() {
    let mut board = WasmBoard::from_config(standard_config()).unwrap();

    let moves = Array::from(&board.legal_moves(RED).unwrap());
    assert_eq!(moves.length(), 4);

    assert!(board.is_move_legal(RED, 2, 3).unwrap());
    let flipped = board.apply_move(RED, 2, 3).unwrap();

    assert_eq!(flipped, vec![3 * 8 + 3]);
    assert_eq!(board.get(3, 3).unwrap(), RED);
    assert_eq!(board.get(2, 3).unwrap(), RED);
}

#[wasm_bindgen_test]
fn illegal_move_leaves_board_unchanged() {
    let mut board = WasmBoard::from_config(standard_config()).unwrap();
    let before = board.cells();

    assert!(board.apply_move(GREEN, 0, 0).is_err());
    assert_eq!(board.cells(), before);
}

#[wasm_bindgen_test]
fn bad_inputs_are_errors() {
    let board = WasmBoard::new();

    assert!(board.is_move_legal(3, 0, 0).is_err());
    assert!(board.is_move_legal(RED, 8, 0).is_err());
    assert!(board.get(0, 9).is_err());
    assert!(WasmBoard::from_cells(vec![0; 10]).is_err());
}

#[wasm_bindgen_test]
fn cells_round_trip_through_constructor() {
    let mut cells = vec![0u8; 64];
    cells[3 * 8 + 3] = RED;
    cells[3 * 8 + 4] = GREEN;
    cells[3 * 8 + 5] = GREEN;

    let mut board = WasmBoard::from_cells(cells).unwrap();
    let flipped = board.apply_move(RED, 3, 6).unwrap();

    assert_eq!(flipped, vec![3 * 8 + 5, 3 * 8 + 4]);
}
