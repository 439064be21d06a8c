use crate::{
    board::Board,
    common::{Direction, GameError, MoveResult},
    config::GameConfig,
    history::SessionRecord,
};
use rand::Rng;

/// Current status of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Playing,
    /// A tile reached the target and the player has not yet decided what to do.
    Won,
    /// No direction changes the board.
    Lost,
    /// The player asked to restart mid-game.
    AwaitingRestart,
}

/// What happened during one accepted turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub result: MoveResult,
    /// Tile added after a real move as `(row, col, value)`.
    pub spawned: Option<(usize, usize, u32)>,
    pub status: GameStatus,
}

/// Returns `true` once any tile has reached `target`.
pub fn has_won(board: &Board, target: u32) -> bool {
    board.contains_at_least(target)
}

/// Returns `true` when none of the four directions would change `board`.
pub fn is_game_over(board: &Board) -> bool {
    board.is_game_over()
}

/// One game session: board, score, move counter and status.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    score: u64,
    moves: u32,
    status: GameStatus,
    win_acknowledged: bool,
}

impl GameEngine {
    /// Start a session with `config.initial_tiles` random tiles.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::fresh(config, rng))
    }

    /// Start a session on a prepared board, e.g. to resume or to test a position.
    pub fn from_board(config: GameConfig, board: Board) -> Result<Self, GameError> {
        config.validate()?;
        let mut engine = Self {
            config,
            board,
            score: 0,
            moves: 0,
            status: GameStatus::Playing,
            win_acknowledged: false,
        };
        engine.evaluate();
        Ok(engine)
    }

    fn fresh<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let mut board = Board::new();
        for _ in 0..config.initial_tiles {
            board.spawn(rng, config.four_probability);
        }
        let mut engine = Self {
            config,
            board,
            score: 0,
            moves: 0,
            status: GameStatus::Playing,
            win_acknowledged: false,
        };
        engine.evaluate();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves that changed the board.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }

    /// Re-derive the status from the current board. A pending restart request
    /// is left alone.
    pub fn evaluate(&mut self) -> GameStatus {
        if self.status == GameStatus::AwaitingRestart {
            return self.status;
        }
        let next = if !self.win_acknowledged && has_won(&self.board, self.config.target) {
            GameStatus::Won
        } else if is_game_over(&self.board) {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        if next != self.status {
            log::info!(
                "status {:?} -> {:?} (score {}, moves {})",
                self.status,
                next,
                self.score,
                self.moves
            );
        }
        self.status = next;
        next
    }

    /// Play one turn. A move that changes nothing leaves score, move count and
    /// board untouched and spawns no tile.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        dir: Direction,
        rng: &mut R,
    ) -> Result<TurnOutcome, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::SessionOver);
        }
        let result = self.board.apply_move(dir);
        let mut spawned = None;
        if result.moved {
            self.score += result.score_delta;
            self.moves += 1;
            spawned = self.board.spawn(rng, self.config.four_probability);
            log::debug!(
                "move {} {}: +{} points, spawned {:?}",
                self.moves,
                dir,
                result.score_delta,
                spawned
            );
        } else {
            log::trace!("move {} changed nothing", dir);
        }
        let status = self.evaluate();
        Ok(TurnOutcome {
            result,
            spawned,
            status,
        })
    }

    /// Keep playing after reaching the target. Returns the re-evaluated status,
    /// which is `Lost` if the winning board has no moves left.
    pub fn continue_playing(&mut self) -> GameStatus {
        if self.status == GameStatus::Won {
            self.win_acknowledged = true;
            self.evaluate()
        } else {
            self.status
        }
    }

    /// Player asked to restart; the session waits for a decision.
    pub fn request_restart(&mut self) {
        self.status = GameStatus::AwaitingRestart;
    }

    /// Replace this session with a fresh one using the same configuration.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        log::info!("restarting (final score {}, moves {})", self.score, self.moves);
        *self = Self::fresh(self.config, rng);
    }

    /// Snapshot of the final numbers for the history collaborator.
    pub fn finish(&self) -> SessionRecord {
        SessionRecord {
            score: self.score,
            moves: self.moves,
            max_tile: self.board.max_tile(),
            outcome: self.status,
        }
    }
}
