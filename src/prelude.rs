//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, Command, Direction, GameConfig, GameEngine, GameHistory, GameStatus,
    HistorySink, Player,
};

#[cfg(feature = "std")]
pub use crate::{
    ui::{NullRenderer, Renderer, TerminalRenderer},
    CliPlayer, GameRunner,
};
