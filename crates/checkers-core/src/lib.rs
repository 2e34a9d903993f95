//! Core checkers types: board representation, move validation and execution,
//! and turn tracking.

mod bitboard;
mod board;
mod checkers_move;
mod color;
mod error;
mod game;
mod layout;
mod make_move;
mod movegen;
mod piece;
mod rules;
mod square;

pub use bitboard::Bitboard;
pub use board::{Board, PIECES_PER_SIDE, PrettyBoard};
pub use checkers_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, GameError, LayoutError, MoveError};
pub use game::{Game, GameState, MoveOutcome, winner};
pub use layout::STARTING_LAYOUT;
pub use movegen::{MoveList, generate_legal_moves, perft};
pub use piece::Piece;
pub use rules::{is_legal, validate, validate_coords};
pub use square::Square;
