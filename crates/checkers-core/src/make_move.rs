//! Move execution via copy-make.

use crate::board::Board;
use crate::checkers_move::{Move, MoveKind};

impl Board {
    /// Apply a validated move and return the resulting board. Copy-make:
    /// `self` is not modified.
    ///
    /// `kind` must come from [`validate`](crate::rules::validate) for this
    /// board. If the source square is empty the board is returned unchanged.
    pub fn make_move(&self, mv: Move, kind: MoveKind) -> Board {
        let mut b = *self;
        let src = mv.source();
        let dst = mv.dest();

        let Some(mut piece) = b.remove_piece(src) else {
            return b;
        };

        if let MoveKind::Jump { captured } = kind {
            b.remove_piece(captured);
        }

        if dst.y() == piece.color().promotion_row() {
            piece = piece.crowned();
        }
        b.put_piece(dst, piece);
        b
    }
}
