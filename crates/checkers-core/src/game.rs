//! Turn and game-over tracking around a [`Board`].

use std::fmt;

use tracing::{debug, info};

use crate::board::Board;
use crate::checkers_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::GameError;
use crate::movegen::{MoveList, generate_legal_moves};
use crate::piece::Piece;
use crate::rules::validate;
use crate::square::Square;

/// Whose turn it is, or who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    WhiteToMove,
    BlackToMove,
    GameOver { winner: Color },
}

impl GameState {
    /// State in which `color` is to play.
    #[inline]
    pub const fn to_move(color: Color) -> GameState {
        match color {
            Color::White => GameState::WhiteToMove,
            Color::Black => GameState::BlackToMove,
        }
    }

    /// `Ok` with the side to play, or `Err` with the winner once the game is over.
    #[inline]
    pub const fn turn(self) -> Result<Color, Color> {
        match self {
            GameState::WhiteToMove => Ok(Color::White),
            GameState::BlackToMove => Ok(Color::Black),
            GameState::GameOver { winner } => Err(winner),
        }
    }

    /// The side to play, or `None` once the game is over.
    #[inline]
    pub const fn side_to_move(self) -> Option<Color> {
        match self.turn() {
            Ok(color) => Some(color),
            Err(_) => None,
        }
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self.turn() {
            Ok(_) => None,
            Err(winner) => Some(winner),
        }
    }

    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameState::GameOver { .. })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::WhiteToMove => write!(f, "White to move"),
            GameState::BlackToMove => write!(f, "Black to move"),
            GameState::GameOver { winner } => write!(f, "{winner} wins."),
        }
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub kind: MoveKind,
    /// The piece taken off the board and where it stood.
    pub captured: Option<(Square, Piece)>,
    /// `true` if the moving man was crowned on this move.
    pub promoted: bool,
    /// State after the move.
    pub state: GameState,
}

/// Return the winner if one side has no pieces left.
pub fn winner(board: &Board) -> Option<Color> {
    Color::ALL
        .into_iter()
        .find(|&color| board.count(color) == 0)
        .map(Color::flip)
}

/// A single game: the board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: GameState,
    /// Number of moves played so far.
    ply: u32,
}

impl Game {
    /// Start a game from the standard position, White to move.
    pub fn new() -> Self {
        Self::from_position(Board::starting_position(), Color::White)
    }

    /// Start a game from an arbitrary board with `to_move` to play.
    ///
    /// If a side already has no pieces the game starts decided.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        let state = match winner(&board) {
            Some(winner) => GameState::GameOver { winner },
            None => GameState::to_move(to_move),
        };
        Self { board, state, ply: 0 }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> MoveList {
        match self.state.side_to_move() {
            Some(mover) => generate_legal_moves(&self.board, mover),
            None => MoveList::new(),
        }
    }

    /// Validate and play `mv` for the side to move.
    ///
    /// On error nothing changes: the same side is still to move.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        let mover = self
            .state
            .turn()
            .map_err(|winner| GameError::GameOver { winner })?;

        let kind = validate(&self.board, mv, mover)?;
        let captured = kind
            .captured()
            .and_then(|sq| self.board.piece_on(sq).map(|piece| (sq, piece)));
        let was_king = self.board.piece_on(mv.source()).is_some_and(Piece::is_king);

        self.board = self.board.make_move(mv, kind);
        self.ply += 1;
        let promoted = !was_king && self.board.piece_on(mv.dest()).is_some_and(Piece::is_king);

        self.state = match winner(&self.board) {
            Some(winner) => {
                info!(%winner, ply = self.ply, "game over");
                GameState::GameOver { winner }
            }
            None => GameState::to_move(!mover),
        };

        debug!(%mover, mv = %mv, ?kind, promoted, "move applied");

        Ok(MoveOutcome {
            mv,
            kind,
            captured,
            promoted,
            state: self.state,
        })
    }

    /// Take a piece off the board outside normal play, returning it.
    ///
    /// Call [`Game::check_game_over`] afterwards to re-evaluate the result.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.board.remove_piece(sq)
    }

    /// Re-scan the board and end the game if a side has no pieces left.
    ///
    /// Returns the winner, if any. A finished game stays finished.
    pub fn check_game_over(&mut self) -> Option<Color> {
        if let Some(winner) = self.state.winner() {
            return Some(winner);
        }
        let winner = winner(&self.board)?;
        info!(%winner, "game over");
        self.state = GameState::GameOver { winner };
        Some(winner)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
