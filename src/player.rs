use crate::{
    common::Direction,
    game::{GameEngine, TurnOutcome},
    history::SessionRecord,
};

/// A validated request from whoever is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next action for the current position.
    fn next_command(&mut self, engine: &GameEngine) -> Command;

    /// The session ended (won, lost or restart requested). Return `true` to
    /// start a fresh game.
    fn play_again(&mut self, record: &SessionRecord) -> bool;

    /// The target tile was reached and the player declined a restart. Return
    /// `true` to keep merging on the same board.
    fn keep_going(&mut self, _engine: &GameEngine) -> bool {
        false
    }

    /// Inform the player of the result of its last move.
    fn handle_turn(&mut self, _dir: Direction, _outcome: &TurnOutcome) {}
}
