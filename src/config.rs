use crate::common::GameError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 4;
/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
/// Largest tile a 4x4 board can hold (2^17). Tiles above it are rejected so
/// that doubling a tile never overflows `u32`.
pub const MAX_TILE: u32 = 1 << 17;
/// Tile value that wins the game by default.
pub const DEFAULT_TARGET: u32 = 2048;
/// Probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;
/// Tiles placed on a fresh board.
pub const INITIAL_TILES: usize = 2;

/// Tunable parameters of a game session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub target: u32,
    pub four_probability: f64,
    pub initial_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            initial_tiles: INITIAL_TILES,
        }
    }
}

impl GameConfig {
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    pub fn with_four_probability(mut self, p: f64) -> Self {
        self.four_probability = p;
        self
    }

    /// Check that the target is a reachable tile value and the probability is sane.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.target < 4 || self.target > MAX_TILE || !self.target.is_power_of_two() {
            return Err(GameError::InvalidTarget(self.target));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::InvalidProbability);
        }
        Ok(())
    }
}
