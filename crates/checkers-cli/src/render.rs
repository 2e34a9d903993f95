//! Board drawing.

use std::io::{self, Write};

use checkers_core::Game;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Something that can show a game to the players.
pub trait Render {
    /// Redraw the board, an optional notice line, and the status line.
    fn draw(&mut self, game: &Game, notice: Option<&str>) -> io::Result<()>;

    /// Ask for input. No newline is written after `text`.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Print a free-standing line.
    fn message(&mut self, text: &str) -> io::Result<()>;
}

/// Renders to any [`Write`], normally stdout.
pub struct TerminalRenderer<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn draw(&mut self, game: &Game, notice: Option<&str>) -> io::Result<()> {
        if self.clear_screen {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        writeln!(self.out, "{}", game.board().pretty())?;
        writeln!(self.out)?;
        if let Some(notice) = notice {
            writeln!(self.out, "{notice}")?;
        }
        writeln!(self.out, "{}", game.state())?;
        self.out.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text} ")?;
        self.out.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{Board, Color};

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn draw_starting_position() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        renderer.draw(&Game::new(), None).unwrap();
        let text = output(renderer);

        assert!(text.starts_with("    A  B  C  D  E  F  G  H\n"));
        assert!(text.contains("1 |    B     B     B     B |"));
        assert!(text.contains("6 | W     W     W     W    |"));
        assert!(text.ends_with("White to move\n"));
        assert!(!text.contains(CLEAR_SCREEN));
    }

    #[test]
    fn draw_clears_screen_first() {
        let mut renderer = TerminalRenderer::new(Vec::new(), true);
        renderer.draw(&Game::new(), None).unwrap();
        assert!(output(renderer).starts_with(CLEAR_SCREEN));
    }

    #[test]
    fn draw_notice_before_status() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        renderer.draw(&Game::new(), Some("hello")).unwrap();
        assert!(output(renderer).ends_with("hello\nWhite to move\n"));
    }

    #[test]
    fn draw_winner() {
        let board: Board = "8/8/8/8/8/8/8/w7".parse().unwrap();
        let game = Game::from_position(board, Color::Black);
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        renderer.draw(&game, None).unwrap();
        assert!(output(renderer).ends_with("White wins.\n"));
    }

    #[test]
    fn prompt_has_no_newline() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        renderer.prompt("Move:").unwrap();
        assert_eq!(renderer.get_ref().as_slice(), b"Move: ");
    }
}
