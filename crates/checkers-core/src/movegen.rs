//! Legal move enumeration and perft.

use crate::board::{Board, PIECES_PER_SIDE};
use crate::checkers_move::{Move, MoveKind};
use crate::color::Color;
use crate::rules::validate;

/// Every diagonal displacement a single move can have.
const DISPLACEMENTS: [(i32, i32); 8] = [
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-2, -2),
    (2, -2),
    (-2, 2),
    (2, 2),
];

const CAPACITY: usize = PIECES_PER_SIDE as usize * DISPLACEMENTS.len();

/// Stack-allocated buffer of legal moves with their validated kinds.
pub struct MoveList {
    moves: [(Move, MoveKind); CAPACITY],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [(Move::NULL, MoveKind::Step); CAPACITY],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move, kind: MoveKind) {
        debug_assert!((self.len as usize) < CAPACITY);
        self.moves[self.len as usize] = (mv, kind);
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[(Move, MoveKind)] {
        &self.moves[..self.len as usize]
    }

    /// Return `true` if the list holds `mv`.
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().iter().any(|&(m, _)| m == mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a (Move, MoveKind);
    type IntoIter = std::slice::Iter<'a, (Move, MoveKind)>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate every move the validator accepts for `mover`, ordered by source
/// square and then by displacement.
pub fn generate_legal_moves(board: &Board, mover: Color) -> MoveList {
    let mut list = MoveList::new();
    for src in board.side(mover) {
        for (dx, dy) in DISPLACEMENTS {
            let Some(dst) = src.offset(dx, dy) else {
                continue;
            };
            let mv = Move::new(src, dst);
            if let Ok(kind) = validate(board, mv, mover) {
                list.push(mv, kind);
            }
        }
    }
    list
}

/// Count the leaf positions `depth` plies ahead with `mover` to play.
pub fn perft(board: &Board, mover: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board, mover);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .as_slice()
        .iter()
        .map(|&(mv, kind)| perft(&board.make_move(mv, kind), !mover, depth - 1))
        .sum()
}
