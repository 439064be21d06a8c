#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::io::{self, Write};
use std::string::String;

use crate::{board::Board, config::BOARD_SIZE, game::GameEngine};

const CELL_WIDTH: usize = 6;
const RESET: &str = "\x1b[0m";
const FRAME: &str = "\x1b[1;37m";
const TITLE: &str = "\x1b[1;36m";

/// Trait that lets the session runner show the game without depending on a
/// particular output device.
pub trait Renderer {
    /// Show the board, score and move count after a turn.
    fn render(&mut self, engine: &GameEngine);

    /// Show a one-line status message.
    fn message(&mut self, _text: &str) {}
}

/// Colour for a tile, chosen by how many digits it has.
fn tile_color(value: u32) -> &'static str {
    match value {
        0 => RESET,
        1..=9 => "\x1b[1;37m",
        10..=99 => "\x1b[1;34m",
        100..=999 => "\x1b[1;32m",
        1000..=9999 => "\x1b[1;31m",
        _ => "\x1b[1;35m",
    }
}

fn separator(out: &mut String) {
    let segments = vec!["-".repeat(CELL_WIDTH); BOARD_SIZE];
    let _ = writeln!(out, "{FRAME}+{}+{RESET}", segments.join("+"));
}

/// Draw `board` as a framed, coloured grid followed by score and move count.
pub fn render_board(board: &Board, score: u64, moves: u32) -> String {
    let mut out = String::new();
    let inner = BOARD_SIZE * (CELL_WIDTH + 1) - 1;
    let title = "2048 Game";
    let left = (inner - title.len()) / 2;
    let right = inner - title.len() - left;

    separator(&mut out);
    let _ = writeln!(
        out,
        "{FRAME}|{}{TITLE}{title}{RESET}{FRAME}{}|{RESET}",
        " ".repeat(left),
        " ".repeat(right)
    );
    for row in board.rows() {
        separator(&mut out);
        for &value in row {
            let text = if value == 0 { String::new() } else { value.to_string() };
            let _ = write!(
                out,
                "{FRAME}|{RESET}{}{:^width$}{RESET}",
                tile_color(value),
                text,
                width = CELL_WIDTH
            );
        }
        let _ = writeln!(out, "{FRAME}|{RESET}");
    }
    separator(&mut out);
    let _ = writeln!(out, "Score: {}", score);
    let _ = writeln!(out, "Moves: {}", moves);
    out
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}

/// [`Renderer`] that redraws the whole screen on stdout every turn.
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&mut self, engine: &GameEngine) {
        clear_screen();
        print!(
            "{}",
            render_board(engine.board(), engine.score(), engine.moves())
        );
        let _ = io::stdout().flush();
    }

    fn message(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// [`Renderer`] that shows nothing, for headless games.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _engine: &GameEngine) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn renders_tiles_score_and_moves() {
        let board = Board::from_rows([[2, 0, 0, 2048], [0; 4], [0; 4], [0, 0, 16, 0]]).unwrap();
        let text = strip_ansi(&render_board(&board, 1234, 56));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "+------+------+------+------+");
        assert!(lines[1].contains("2048 Game"));
        assert_eq!(lines[3], "|  2   |      |      | 2048 |");
        assert_eq!(lines[9], "|      |      |  16  |      |");
        assert!(text.contains("Score: 1234"));
        assert!(text.contains("Moves: 56"));
    }

    #[test]
    fn title_line_matches_frame_width() {
        let text = strip_ansi(&render_board(&Board::new(), 0, 0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1].chars().count(), lines[0].chars().count());
    }

    #[test]
    fn colors_by_digit_count() {
        assert_eq!(tile_color(0), RESET);
        assert_ne!(tile_color(8), tile_color(16));
        assert_ne!(tile_color(128), tile_color(2048));
    }
}
