//! Error types for board layouts, move validation, and game play.

use crate::color::Color;
use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A piece sits on a light square.
    #[error("piece on light square {square}")]
    PieceOnLightSquare {
        /// The offending square.
        square: Square,
    },
    /// A side has more pieces than it starts with.
    #[error("{color} has {count} pieces, at most 12 allowed")]
    TooManyPieces {
        /// Which side is over the limit.
        color: Color,
        /// Number of pieces found.
        count: u32,
    },
    /// The side bitboards overlap or do not add up to the occupancy.
    #[error("side bitboards overlap or disagree with occupancy")]
    InconsistentSides,
    /// A king flag is set on an empty square.
    #[error("king flag set on an empty square")]
    OrphanKing,
}

/// Errors that occur when parsing a board layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows in layout, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 cells.
    #[error("row {row} describes {length} cells, expected 8")]
    BadRowLength {
        /// One-based row number.
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid layout character: '{character}'")]
    InvalidChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}

/// Reasons a proposed move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({x}, {y}) is off the board")]
    OutOfBounds { x: i32, y: i32 },
    #[error("source and destination are the same square")]
    SameSquare,
    #[error("there is no piece on {square}")]
    NoPieceAtSource { square: Square },
    #[error("the piece on {square} belongs to {owner}")]
    NotYourPiece { square: Square, owner: Color },
    #[error("{square} is already occupied")]
    DestinationOccupied { square: Square },
    #[error("moves must be diagonal")]
    NotDiagonal,
    #[error("only kings may move backwards")]
    WrongDirection,
    #[error("no piece to capture on {square}")]
    NothingToCapture { square: Square },
    #[error("cannot capture your own piece on {square}")]
    CannotCaptureOwnPiece { square: Square },
    #[error("pieces move one square, or two when capturing")]
    TooFar,
}

/// Errors returned by [`Game::play`](crate::game::Game::play).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The game has already been decided.
    #[error("the game is over, {winner} won")]
    GameOver {
        /// The side that won.
        winner: Color,
    },
    /// The move failed validation.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),
}
