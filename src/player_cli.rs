#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    common::Direction,
    game::{GameEngine, GameStatus},
    history::SessionRecord,
};

use crate::player::{Command, Player};

/// Interactive player reading W/A/S/D/R/Q lines from `input`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line. `None` on EOF or I/O error.
    fn prompt(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{}", prompt);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                log::warn!("failed to read input: {}", e);
                None
            }
        }
    }

    /// Ask a yes/no question until the answer is Y or N. EOF counts as no.
    fn confirm(&mut self, question: &str) -> bool {
        loop {
            match self.prompt(question) {
                None => return false,
                Some(answer) => match answer.to_ascii_uppercase().as_str() {
                    "Y" => return true,
                    "N" => return false,
                    _ => {}
                },
            }
        }
    }
}

/// Map one input line to a command.
pub fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_ascii_uppercase().as_str() {
        "R" => Some(Command::Restart),
        "Q" => Some(Command::Quit),
        other => other.parse::<Direction>().ok().map(Command::Move),
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn next_command(&mut self, _engine: &GameEngine) -> Command {
        loop {
            let Some(line) = self.prompt("Enter direction (W/A/S/D, R to restart, Q to quit): ")
            else {
                return Command::Quit;
            };
            if let Some(cmd) = parse_command(&line) {
                return cmd;
            }
            let _ = writeln!(
                self.output,
                "Invalid input. Use W/A/S/D to move, R to restart or Q to quit."
            );
        }
    }

    fn play_again(&mut self, record: &SessionRecord) -> bool {
        if record.outcome == GameStatus::AwaitingRestart {
            let _ = writeln!(
                self.output,
                "Restarting. Final score {} after {} moves.",
                record.score, record.moves
            );
        }
        self.confirm("Do you want to play again? (Y/N): ")
    }

    fn keep_going(&mut self, engine: &GameEngine) -> bool {
        let question = format!("Keep playing past {}? (Y/N): ", engine.config().target);
        self.confirm(&question)
    }
}
