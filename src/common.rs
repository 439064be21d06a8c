//! Common types for 2048: directions, move results and engine errors.

use crate::config::MAX_TILE;
use core::fmt;
use core::str::FromStr;

/// A direction to slide and merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the engine tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Keyboard key bound to this direction.
    pub fn key(self) -> char {
        match self {
            Direction::Up => 'W',
            Direction::Left => 'A',
            Direction::Down => 'S',
            Direction::Right => 'D',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'W' => Ok(Direction::Up),
            'A' => Ok(Direction::Left),
            'S' => Ok(Direction::Down),
            'D' => Ok(Direction::Right),
            other => Err(GameError::InvalidDirection(other)),
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Accepts a single W/A/S/D key or one of `up`, `down`, `left`, `right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::try_from(c),
            (None, _) => Err(GameError::InvalidDirection(' ')),
            (Some(c), Some(_)) => {
                if s.eq_ignore_ascii_case("up") {
                    Ok(Direction::Up)
                } else if s.eq_ignore_ascii_case("down") {
                    Ok(Direction::Down)
                } else if s.eq_ignore_ascii_case("left") {
                    Ok(Direction::Left)
                } else if s.eq_ignore_ascii_case("right") {
                    Ok(Direction::Right)
                } else {
                    Err(GameError::InvalidDirection(c))
                }
            }
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Outcome of applying one direction to a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveResult {
    /// Whether any cell changed.
    pub moved: bool,
    /// Sum of the values of all tiles produced by merges.
    pub score_delta: u64,
}

/// Errors returned by the game engine and its input parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Input did not name one of the four directions.
    InvalidDirection(char),
    /// Win target must be a power of two between 4 and `MAX_TILE`.
    InvalidTarget(u32),
    /// Spawn probability must lie within [0, 1].
    InvalidProbability,
    /// A cell holds a value that is neither 0 nor a power of two in 2..=`MAX_TILE`.
    InvalidTile { row: usize, col: usize, value: u32 },
    /// The session is lost or waiting on a restart decision.
    SessionOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidDirection(c) => {
                write!(f, "Invalid direction '{}' - use W/A/S/D", c)
            }
            GameError::InvalidTarget(t) => {
                write!(
                    f,
                    "Invalid win target {} - must be a power of two in 4..={}",
                    t, MAX_TILE
                )
            }
            GameError::InvalidProbability => write!(f, "Spawn probability must be within [0, 1]"),
            GameError::InvalidTile { row, col, value } => {
                write!(f, "Invalid tile {} at row {}, col {}", value, row, col)
            }
            GameError::SessionOver => write!(f, "Session is over; restart or quit"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!("w".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("A".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" s \n".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(Direction::try_from('d'), Ok(Direction::Right));
    }

    #[test]
    fn parses_words() {
        assert_eq!("Left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("DOWN".parse::<Direction>(), Ok(Direction::Down));
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!("x".parse::<Direction>(), Err(GameError::InvalidDirection('X')));
        assert!("".parse::<Direction>().is_err());
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn key_roundtrips_through_try_from() {
        for dir in Direction::ALL {
            assert_eq!(Direction::try_from(dir.key()), Ok(dir));
        }
    }
}
