//! The interactive game loop: draw, prompt, read, play, repeat.

use std::io::BufRead;

use tracing::{debug, info, warn};

use checkers_core::{Color, Game, Move, MoveOutcome};

use crate::command::{Command, parse_command};
use crate::error::SessionError;
use crate::render::Render;

const HELP: &str = "Enter a move as <column> <row> <column> <row>, e.g. `C 6 D 5`.\n\
Other commands: `moves` lists legal moves, `help` shows this text, `quit` leaves the game.";

/// Options for a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Clear the terminal before each redraw.
    pub clear_screen: bool,
    /// List the legal moves after a rejected move.
    pub show_hints: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            show_hints: false,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// One side lost all its pieces.
    Finished { winner: Color },
    /// A player typed `quit`.
    Quit,
    /// Input ended before the game did.
    InputClosed,
}

/// Two players sharing one input stream and one renderer.
pub struct Session<R, D> {
    input: R,
    renderer: D,
    game: Game,
    config: SessionConfig,
}

impl<R: BufRead, D: Render> Session<R, D> {
    /// A session over a fresh game.
    pub fn new(input: R, renderer: D, config: SessionConfig) -> Self {
        Self::with_game(input, renderer, Game::new(), config)
    }

    /// A session continuing an existing game.
    pub fn with_game(input: R, renderer: D, game: Game, config: SessionConfig) -> Self {
        Self {
            input,
            renderer,
            game,
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_renderer(self) -> D {
        self.renderer
    }

    /// Run until the game is decided, a player quits, or input ends.
    ///
    /// Bad input and illegal moves are reported and the same player is
    /// asked again. Only I/O failures are returned as errors.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        info!(state = %self.game.state(), "session started");
        let mut notice: Option<String> = None;

        loop {
            self.renderer.draw(&self.game, notice.take().as_deref())?;

            let mover = match self.game.state().turn() {
                Ok(mover) => mover,
                Err(winner) => {
                    info!(%winner, ply = self.game.ply(), "session finished");
                    return Ok(SessionOutcome::Finished { winner });
                }
            };

            self.renderer
                .prompt(&format!("{mover}, enter a move (e.g. C 6 D 5):"))?;

            // Invalid UTF-8 is reported as bad input, not an I/O error.
            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                self.renderer.message("")?;
                info!(ply = self.game.ply(), "input closed");
                return Ok(SessionOutcome::InputClosed);
            }
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim();
            debug!(%mover, input = %line, "received input");

            notice = match parse_command(line) {
                Ok(Command::Empty) => None,
                Ok(Command::Quit) => {
                    info!(%mover, ply = self.game.ply(), "player quit");
                    return Ok(SessionOutcome::Quit);
                }
                Ok(Command::Help) => Some(HELP.to_string()),
                Ok(Command::Moves) => Some(self.legal_moves_line()),
                Ok(Command::Move { from, to }) => match self.game.play(Move::new(from, to)) {
                    Ok(outcome) => Some(describe(mover, &outcome)),
                    Err(e) => {
                        warn!(%mover, %from, %to, error = %e, "move rejected");
                        let mut text = capitalize(&e.to_string());
                        if self.config.show_hints {
                            text.push('\n');
                            text.push_str(&self.legal_moves_line());
                        }
                        Some(text)
                    }
                },
                Err(e) => {
                    warn!(%mover, input = %line, error = %e, "unparseable input");
                    Some(format!("Invalid input: {e}"))
                }
            };
        }
    }

    fn legal_moves_line(&self) -> String {
        let moves: Vec<String> = self
            .game
            .legal_moves()
            .as_slice()
            .iter()
            .map(|(mv, _)| mv.notation())
            .collect();
        if moves.is_empty() {
            "No legal moves.".to_string()
        } else {
            format!("Legal moves: {}", moves.join(", "))
        }
    }
}

/// One-line summary of an accepted move.
fn describe(mover: Color, outcome: &MoveOutcome) -> String {
    let mut text = format!("{mover} played {}", outcome.mv);
    if let Some((square, piece)) = outcome.captured {
        text.push_str(&format!(", capturing {piece} on {square}"));
    }
    if outcome.promoted {
        text.push_str(", crowned");
    }
    text.push('.');
    text
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
