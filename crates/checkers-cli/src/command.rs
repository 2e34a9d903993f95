//! Player command parsing.
//!
//! A move is four whitespace-separated tokens, `<column> <row> <column> <row>`,
//! with columns A-H (either case) and rows 1-8, e.g. `C 6 D 5`.

use checkers_core::Square;

use crate::error::InputError;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the piece on `from` to `to`.
    Move { from: Square, to: Square },
    /// `moves` -- list the legal moves for the side to move.
    Moves,
    /// `help` -- show the input format.
    Help,
    /// `quit` -- leave the game.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Empty);
    }

    if tokens.len() == 1 {
        match tokens[0].to_ascii_lowercase().as_str() {
            "moves" => return Ok(Command::Moves),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }
    }

    if tokens.len() != 4 {
        return Err(InputError::WrongTokenCount { found: tokens.len() });
    }

    let from = parse_square(tokens[0], tokens[1])?;
    let to = parse_square(tokens[2], tokens[3])?;
    Ok(Command::Move { from, to })
}

/// Parse a column letter and a row number into a square.
fn parse_square(column: &str, row: &str) -> Result<Square, InputError> {
    let mut chars = column.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => {
            return Err(InputError::InvalidColumn {
                token: column.to_string(),
            });
        }
    };

    let row_number: i64 = row.parse().map_err(|_| InputError::InvalidRow {
        token: row.to_string(),
    })?;
    if !(1..=8).contains(&row_number) {
        return Err(InputError::RowOutOfRange { row: row_number });
    }

    Square::from_notation(letter, row_number as u8).ok_or_else(|| InputError::InvalidColumn {
        token: column.to_string(),
    })
}
