//! The 4x4 tile grid: sliding, merging and random tile spawning.

use crate::common::{Direction, GameError, MoveResult};
use crate::config::{BOARD_SIZE, MAX_TILE, NUM_CELLS};
use crate::line::{merge_line, Line};
use core::fmt;
use rand::Rng;

/// Grid of tile values in row-major order. Zero marks an empty cell.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit rows, rejecting values that are not 0 or a
    /// power of two in `2..=MAX_TILE`. The bound keeps every merge within `u32`.
    pub fn from_rows(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, GameError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 && (value < 2 || value > MAX_TILE || !value.is_power_of_two()) {
                    return Err(GameError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Immutable view of the rows.
    pub fn rows(&self) -> &[[u32; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Value at (row, col), or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Largest tile on the board (0 when empty).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Returns `true` if any cell holds at least `value`.
    pub fn contains_at_least(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|&v| v >= value)
    }

    /// Slide and merge every line toward `dir`, mutating the board.
    pub fn apply_move(&mut self, dir: Direction) -> MoveResult {
        let mut result = MoveResult::default();
        for i in 0..BOARD_SIZE {
            let before = self.read_line(dir, i);
            let (after, score) = merge_line(before);
            if after != before {
                self.write_line(dir, i, after);
                result.moved = true;
            }
            result.score_delta += score;
        }
        result
    }

    /// Apply `dir` to a copy, leaving `self` untouched.
    pub fn shifted(&self, dir: Direction) -> (Board, MoveResult) {
        let mut copy = *self;
        let result = copy.apply_move(dir);
        (copy, result)
    }

    /// Returns `true` if moving toward `dir` would change the board.
    pub fn can_move(&self, dir: Direction) -> bool {
        self.shifted(dir).1.moved
    }

    /// Returns `true` when no direction changes the board.
    pub fn is_game_over(&self) -> bool {
        !Direction::ALL.iter().any(|&dir| self.can_move(dir))
    }

    /// Put a 4 (with probability `four_probability`) or a 2 into a uniformly
    /// chosen empty cell. Returns the placed `(row, col, value)`, or `None`
    /// when the board is full. The probability is clamped to [0, 1]; NaN
    /// counts as 0.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        four_probability: f64,
    ) -> Option<(usize, usize, u32)> {
        let mut empty = [(0usize, 0usize); NUM_CELLS];
        let mut n = 0;
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    empty[n] = (r, c);
                    n += 1;
                }
            }
        }
        if n == 0 {
            return None;
        }
        let p = if four_probability.is_nan() {
            0.0
        } else {
            four_probability.clamp(0.0, 1.0)
        };
        let (r, c) = empty[rng.random_range(0..n)];
        let value = if rng.random_bool(p) { 4 } else { 2 };
        self.cells[r][c] = value;
        Some((r, c, value))
    }

    /// Read line `i` ordered so that index 0 is the edge tiles travel toward.
    fn read_line(&self, dir: Direction, i: usize) -> Line {
        let last = BOARD_SIZE - 1;
        core::array::from_fn(|k| match dir {
            Direction::Left => self.cells[i][k],
            Direction::Right => self.cells[i][last - k],
            Direction::Up => self.cells[k][i],
            Direction::Down => self.cells[last - k][i],
        })
    }

    /// Inverse of [`Board::read_line`].
    fn write_line(&mut self, dir: Direction, i: usize, line: Line) {
        let last = BOARD_SIZE - 1;
        for (k, &v) in line.iter().enumerate() {
            match dir {
                Direction::Left => self.cells[i][k] = v,
                Direction::Right => self.cells[i][last - k] = v,
                Direction::Up => self.cells[k][i] = v,
                Direction::Down => self.cells[last - k][i] = v,
            }
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {:?}", self.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for (c, &v) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if v == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
