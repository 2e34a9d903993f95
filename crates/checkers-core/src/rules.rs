//! Move validation.
//!
//! A move is legal when, in order:
//! 1. both endpoints are on the board,
//! 2. source and destination differ,
//! 3. the source holds one of the mover's pieces and the destination is empty,
//! 4. the move is diagonal,
//! 5. a man moves toward the opponent's home row (kings go either way),
//! 6. it covers one cell, or
//! 7. it covers two cells over an opposing piece.
//!
//! There is no mandatory-capture rule.

use crate::board::Board;
use crate::checkers_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::MoveError;
use crate::square::Square;

/// Check a move between raw coordinates. Off-board endpoints are rejected
/// before anything else is looked at.
pub fn validate_coords(
    board: &Board,
    from_x: i32,
    from_y: i32,
    to_x: i32,
    to_y: i32,
    mover: Color,
) -> Result<(Move, MoveKind), MoveError> {
    let source = Square::from_coords(from_x, from_y).ok_or(MoveError::OutOfBounds {
        x: from_x,
        y: from_y,
    })?;
    let dest = Square::from_coords(to_x, to_y).ok_or(MoveError::OutOfBounds { x: to_x, y: to_y })?;
    let mv = Move::new(source, dest);
    let kind = validate(board, mv, mover)?;
    Ok((mv, kind))
}

/// Return `true` if `mover` may play `(from_x, from_y) -> (to_x, to_y)`.
pub fn is_legal(board: &Board, from_x: i32, from_y: i32, to_x: i32, to_y: i32, mover: Color) -> bool {
    validate_coords(board, from_x, from_y, to_x, to_y, mover).is_ok()
}

/// Check an on-board move for `mover`, returning what it would do.
pub fn validate(board: &Board, mv: Move, mover: Color) -> Result<MoveKind, MoveError> {
    let source = mv.source();
    let dest = mv.dest();

    if source == dest {
        return Err(MoveError::SameSquare);
    }

    let piece = board
        .piece_on(source)
        .ok_or(MoveError::NoPieceAtSource { square: source })?;
    if piece.color() != mover {
        return Err(MoveError::NotYourPiece {
            square: source,
            owner: piece.color(),
        });
    }
    if board.is_occupied(dest) {
        return Err(MoveError::DestinationOccupied { square: dest });
    }

    let (dx, dy) = (mv.dx(), mv.dy());
    if dx.abs() != dy.abs() {
        return Err(MoveError::NotDiagonal);
    }

    if !piece.is_king() && dy.signum() != mover.forward() as i32 {
        return Err(MoveError::WrongDirection);
    }

    match dx.abs() {
        1 => Ok(MoveKind::Step),
        2 => {
            let captured = source.midpoint(dest);
            match board.color_on(captured) {
                Some(color) if color != mover => Ok(MoveKind::Jump { captured }),
                Some(_) => Err(MoveError::CannotCaptureOwnPiece { square: captured }),
                None => Err(MoveError::NothingToCapture { square: captured }),
            }
        }
        _ => Err(MoveError::TooFar),
    }
}
