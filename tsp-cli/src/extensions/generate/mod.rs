//! Generates random instances and reads or writes them as json arrays of points.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use std::io::{Read, Write};
use tsp_core::prelude::*;

/// Generates `count` points at random integer coordinates within `[0, width) x [0, height)`.
pub fn generate_points(width: i32, height: i32, count: usize, random: &dyn Random) -> Result<Vec<Point>, String> {
    let mut state = InstanceState::default();
    state.generate(width, height, count, random, &mut |_| {}).map_err(|err| err.to_string())?;

    Ok(state.cities().iter().map(|city| city.location).collect())
}

/// Reads points from json array.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<Point>, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize points: '{err}'"))
}

/// Writes points as json array.
pub fn write_points<W: Write>(writer: W, points: &[Point]) -> Result<(), String> {
    serde_json::to_writer(writer, points).map_err(|err| format!("cannot serialize points: '{err}'"))
}
