//! Per-session results kept for the end-of-run summary.

use crate::game::GameStatus;
use alloc::vec::Vec;
use core::fmt;

/// Final numbers of one finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionRecord {
    pub score: u64,
    pub moves: u32,
    pub max_tile: u32,
    /// Status the session ended in.
    pub outcome: GameStatus,
}

/// Receives a record each time a session ends.
pub trait HistorySink {
    fn record(&mut self, record: SessionRecord);
}

/// In-memory history for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct GameHistory {
    records: Vec<SessionRecord>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn best_score(&self) -> Option<u64> {
        self.records.iter().map(|r| r.score).max()
    }
}

impl HistorySink for GameHistory {
    fn record(&mut self, record: SessionRecord) {
        log::debug!("recorded session {}: {:?}", self.records.len() + 1, record);
        self.records.push(record);
    }
}

impl fmt::Display for GameHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game History:")?;
        for (i, r) in self.records.iter().enumerate() {
            writeln!(f, "Game {}: Score = {}, Moves = {}", i + 1, r.score, r.moves)?;
        }
        Ok(())
    }
}
