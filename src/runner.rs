#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::{
    game::{GameEngine, GameStatus},
    history::HistorySink,
    player::{Command, Player},
    ui::Renderer,
};

/// Drives sessions turn by turn: render, ask the player, move, check status.
/// Returns once the player quits or declines to play again.
pub struct GameRunner {
    player: Box<dyn Player>,
    renderer: Box<dyn Renderer>,
    engine: GameEngine,
    rng: SmallRng,
}

impl GameRunner {
    pub fn new(
        player: Box<dyn Player>,
        renderer: Box<dyn Renderer>,
        engine: GameEngine,
        rng: SmallRng,
    ) -> Self {
        Self {
            player,
            renderer,
            engine,
            rng,
        }
    }

    /// Current session, mainly for inspection after `run` returns.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn run(&mut self, history: &mut dyn HistorySink) -> anyhow::Result<()> {
        loop {
            let status = self.engine.evaluate();
            self.renderer.render(&self.engine);

            if matches!(status, GameStatus::Won | GameStatus::Lost) {
                if status == GameStatus::Won {
                    self.renderer.message("Congratulations! You Win!");
                } else {
                    self.renderer.message("Game Over! You Lose!");
                }
                let record = self.engine.finish();
                if self.player.play_again(&record) {
                    history.record(record);
                    self.engine.restart(&mut self.rng);
                    continue;
                }
                if status == GameStatus::Won
                    && !self.engine.board().is_game_over()
                    && self.player.keep_going(&self.engine)
                {
                    self.engine.continue_playing();
                    continue;
                }
                history.record(record);
                return Ok(());
            }

            match self.player.next_command(&self.engine) {
                Command::Move(dir) => {
                    let outcome = self
                        .engine
                        .step(dir, &mut self.rng)
                        .map_err(|e| anyhow::anyhow!(e))?;
                    self.player.handle_turn(dir, &outcome);
                }
                Command::Restart => {
                    self.engine.request_restart();
                    let record = self.engine.finish();
                    history.record(record);
                    if !self.player.play_again(&record) {
                        return Ok(());
                    }
                    self.engine.restart(&mut self.rng);
                }
                Command::Quit => {
                    log::info!("player quit");
                    history.record(self.engine.finish());
                    return Ok(());
                }
            }
        }
    }
}
