//! Collapsing a single row or column toward index 0.

use crate::config::BOARD_SIZE;

/// One row or column of the board, ordered in the direction of travel.
pub type Line = [u32; BOARD_SIZE];

/// Slide the non-empty tiles of `line` toward index 0, merging equal
/// neighbours. Each output slot accepts at most one merge, so `[2, 2, 2, 0]`
/// becomes `[4, 2, 0, 0]`. Returns the new line and the sum of merged values.
pub fn merge_line(line: Line) -> (Line, u64) {
    let mut out = [0u32; BOARD_SIZE];
    let mut cursor = 0;
    let mut score = 0u64;

    for tile in line.into_iter().filter(|&t| t != 0) {
        if out[cursor] == 0 {
            out[cursor] = tile;
        } else if out[cursor] == tile {
            out[cursor] *= 2;
            score += u64::from(out[cursor]);
            cursor += 1;
        } else {
            cursor += 1;
            out[cursor] = tile;
        }
    }
    (out, score)
}
