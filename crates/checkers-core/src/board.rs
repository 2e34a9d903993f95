//! The board: which piece stands on which cell.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::square::Square;

/// Maximum number of pieces a side can own.
pub const PIECES_PER_SIDE: u32 = 12;

/// Piece placement for both sides.
///
/// The bitboards are the single source of truth for piece positions; every
/// lookup is a constant-time bit test.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Bitboard for each side, indexed by [`Color::index()`].
    sides: [Bitboard; Color::COUNT],
    /// Crowned pieces of both sides.
    kings: Bitboard,
    /// Union of both sides.
    occupied: Bitboard,
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            sides: [Bitboard::EMPTY; Color::COUNT],
            kings: Bitboard::EMPTY,
            occupied: Bitboard::EMPTY,
        }
    }

    /// Return the standard starting position: 12 men per side on the dark
    /// squares of the three rows nearest each player.
    pub const fn starting_position() -> Board {
        let white = Bitboard::WHITE_START;
        let black = Bitboard::BLACK_START;
        Board {
            sides: [white, black],
            kings: Bitboard::EMPTY,
            occupied: Bitboard::new(white.inner() | black.inner()),
        }
    }

    /// Return the piece on the given square, if any.
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        let color = self.color_on(sq)?;
        if self.kings.contains(sq) {
            Some(Piece::king(color))
        } else {
            Some(Piece::man(color))
        }
    }

    /// Return the color of the piece on the given square, if any.
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.sides[color.index()].contains(sq))
    }

    /// Return the bitboard for the given side.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied.contains(sq)
    }

    /// Number of pieces the given side still has.
    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.sides[color.index()].count()
    }

    /// Iterate over every piece with its square, in square index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied
            .filter_map(move |sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Place `piece` on `sq`, returning whatever stood there before.
    pub fn put_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        let previous = self.remove_piece(sq);
        let color = piece.color();
        self.sides[color.index()] = self.sides[color.index()].with(sq);
        if piece.is_king() {
            self.kings = self.kings.with(sq);
        }
        self.occupied = self.occupied.with(sq);
        previous
    }

    /// Take the piece off `sq`, if any.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_on(sq)?;
        let color = piece.color();
        self.sides[color.index()] = self.sides[color.index()].without(sq);
        self.kings = self.kings.without(sq);
        self.occupied = self.occupied.without(sq);
        Some(piece)
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        let (white, black) = (self.sides[Color::White.index()], self.sides[Color::Black.index()]);
        if (white & black).is_nonempty() || (white | black) != self.occupied {
            return Err(BoardError::InconsistentSides);
        }

        if let Some(square) = (self.occupied & !Bitboard::DARK).lsb() {
            return Err(BoardError::PieceOnLightSquare { square });
        }

        for color in Color::ALL {
            let count = self.count(color);
            if count > PIECES_PER_SIDE {
                return Err(BoardError::TooManyPieces { color, count });
            }
        }

        if (self.kings & !self.occupied).is_nonempty() {
            return Err(BoardError::OrphanKing);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as a bordered grid, row 1 on top.
///
/// ```text
///     A  B  C  D  E  F  G  H
///   +------------------------+
/// 1 |    B     B     B     B |
/// ```
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "    A  B  C  D  E  F  G  H")?;
        writeln!(f, "  +------------------------+")?;
        for sq_row in 0u8..8 {
            write!(f, "{} |", sq_row + 1)?;
            for x in 0u8..8 {
                let sq = Square::from_index_unchecked(sq_row * 8 + x);
                if !sq.is_dark() {
                    write!(f, "   ")?;
                    continue;
                }
                match board.piece_on(sq) {
                    Some(piece) => write!(f, " {:<2}", piece.glyph())?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "  +------------------------+")
    }
}
