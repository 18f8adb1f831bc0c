//! `wasm-bindgen` exports of each solver's entry points.

use wasm_bindgen::prelude::*;

use crate::keypad::{decode, Keypad};
use crate::{room, triangle, walk};

fn js_err(err: impl std::error::Error) -> JsError {
    JsError::new(&err.to_string())
}

/// Distance walked and distance of the first revisited intersection (`-1` if none).
#[wasm_bindgen(js_name = walkDistances)]
pub fn walk_distances(input: &str) -> Result<Vec<i64>, JsError> {
    let mut walker = walk::Walker::new();
    let distance = walker.follow(input).map_err(js_err)?;
    Ok(vec![distance as i64, walker.first_revisit().map_or(-1, |d| d as i64)])
}

/// Decode on the diamond keypad if `diamond` is set, otherwise on the square one.
#[wasm_bindgen(js_name = keypadCode)]
pub fn keypad_code(input: &str, diamond: bool) -> Result<String, JsError> {
    let keypad = if diamond { Keypad::diamond() } else { Keypad::square() };
    decode(keypad, input).map_err(js_err)
}

/// Possible triangles counted by rows and by columns.
#[wasm_bindgen(js_name = possibleTriangles)]
pub fn possible_triangles(input: &str) -> Result<Vec<u32>, JsError> {
    Ok(vec![
        u32::try_from(triangle::count_possible_by_rows(input).map_err(js_err)?).map_err(js_err)?,
        u32::try_from(triangle::count_possible_by_columns(input).map_err(js_err)?).map_err(js_err)?,
    ])
}

/// Sum of the sector IDs of every real room.
#[wasm_bindgen(js_name = realSectorSum)]
pub fn real_sector_sum(input: &str) -> Result<f64, JsError> {
    room::sum_real_sector_ids(input).map(|sum| sum as f64).map_err(js_err)
}

/// Sector ID of the first room whose decrypted name is `name`, if any.
#[wasm_bindgen(js_name = findSector)]
pub fn find_sector(input: &str, name: &str) -> Result<Option<u32>, JsError> {
    room::find_sector(input, name).map_err(js_err)
}
