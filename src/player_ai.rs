//! Greedy one-ply player used by `auto` mode and the simulator.
//!
//! Runs without `std`: float math goes through `libm` and nothing is heap
//! allocated.

use crate::{
    board::Board,
    common::Direction,
    config::BOARD_SIZE,
    game::GameEngine,
    history::SessionRecord,
};

use crate::player::{Command, Player};

const EMPTY_WEIGHT: f64 = 2.7;
const MONOTONIC_WEIGHT: f64 = 1.0;
const CORNER_WEIGHT: f64 = 1.5;

/// Score a position: more empty cells, rows/columns that rise or fall
/// steadily, and the largest tile sitting in a corner all count in favour.
pub fn evaluate_board(board: &Board) -> f64 {
    let rows = board.rows();
    let rank = |v: u32| if v == 0 { 0.0 } else { libm::log2(v as f64) };

    let mut mono = 0.0;
    for i in 0..BOARD_SIZE {
        let (mut inc_r, mut dec_r, mut inc_c, mut dec_c) = (0.0, 0.0, 0.0, 0.0);
        for k in 0..BOARD_SIZE - 1 {
            let (a, b) = (rank(rows[i][k]), rank(rows[i][k + 1]));
            if a > b {
                dec_r += a - b;
            } else {
                inc_r += b - a;
            }
            let (a, b) = (rank(rows[k][i]), rank(rows[k + 1][i]));
            if a > b {
                dec_c += a - b;
            } else {
                inc_c += b - a;
            }
        }
        mono -= libm::fmin(inc_r, dec_r) + libm::fmin(inc_c, dec_c);
    }

    let max = board.max_tile();
    let last = BOARD_SIZE - 1;
    let corner = [rows[0][0], rows[0][last], rows[last][0], rows[last][last]]
        .iter()
        .any(|&v| v == max && max != 0);

    let corner_bonus = if corner { rank(max) } else { 0.0 };
    EMPTY_WEIGHT * board.empty_count() as f64
        + MONOTONIC_WEIGHT * mono
        + CORNER_WEIGHT * corner_bonus
}

/// Pick the direction whose resulting board scores best, or `None` when no
/// direction changes the board.
pub fn best_direction(board: &Board) -> Option<Direction> {
    let mut best: Option<(Direction, f64)> = None;
    for dir in Direction::ALL {
        let (next, res) = board.shifted(dir);
        if !res.moved {
            continue;
        }
        let value = res.score_delta as f64 / 4.0 + evaluate_board(&next);
        if best.map_or(true, |(_, v)| value > v) {
            best = Some((dir, value));
        }
    }
    best.map(|(dir, _)| dir)
}

/// Computer player that plays a fixed number of games.
pub struct AiPlayer {
    games_left: usize,
    continue_after_win: bool,
}

impl AiPlayer {
    /// Play `games` sessions in total before quitting. The session already
    /// running always counts, so `0` behaves like `1`; the binaries reject 0
    /// before getting here.
    pub fn new(games: usize) -> Self {
        Self {
            games_left: games.saturating_sub(1),
            continue_after_win: false,
        }
    }

    /// Keep merging past the win target instead of ending the session.
    pub fn continue_after_win(mut self, yes: bool) -> Self {
        self.continue_after_win = yes;
        self
    }
}

impl Player for AiPlayer {
    fn next_command(&mut self, engine: &GameEngine) -> Command {
        match best_direction(engine.board()) {
            Some(dir) => Command::Move(dir),
            None => Command::Quit,
        }
    }

    fn play_again(&mut self, _record: &SessionRecord) -> bool {
        if self.games_left == 0 {
            return false;
        }
        self.games_left -= 1;
        true
    }

    fn keep_going(&mut self, _engine: &GameEngine) -> bool {
        self.continue_after_win
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    #[test]
    fn never_picks_a_no_op_move() {
        // only Right and Down change this board
        let b = Board::from_rows([[2, 4, 8, 0], [4, 8, 16, 0], [8, 16, 32, 0], [0; 4]]).unwrap();
        let dir = best_direction(&b).unwrap();
        assert!(b.can_move(dir));
        assert!(matches!(dir, Direction::Right | Direction::Down));
    }

    #[test]
    fn no_direction_on_stuck_board() {
        let b = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        assert_eq!(best_direction(&b), None);
    }

    #[test]
    fn prefers_more_empty_cells() {
        let merged = Board::from_rows([[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let split = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        assert!(evaluate_board(&merged) > evaluate_board(&split));
    }

    #[test]
    fn plays_requested_number_of_games() {
        let mut ai = AiPlayer::new(3);
        let rec = SessionRecord {
            score: 0,
            moves: 0,
            max_tile: 2,
            outcome: GameStatus::Lost,
        };
        assert!(ai.play_again(&rec));
        assert!(ai.play_again(&rec));
        assert!(!ai.play_again(&rec));
    }

    #[test]
    fn zero_games_still_finishes_the_running_one() {
        let rec = SessionRecord {
            score: 0,
            moves: 0,
            max_tile: 2,
            outcome: GameStatus::Lost,
        };
        assert!(!AiPlayer::new(0).play_again(&rec));
        assert!(!AiPlayer::new(1).play_again(&rec));
    }
}
