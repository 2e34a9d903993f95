//! Checkers pieces, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;

const COLOR_BIT: u8 = 0b01;
const KING_BIT: u8 = 0b10;

/// A colored man or king.
///
/// Bit layout:
/// - bit 0: [`Color`] (0 = White, 1 = Black)
/// - bit 1: king flag
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces.
    pub const COUNT: usize = 4;

    /// White man. Raw value: 0.
    pub const WHITE_MAN: Piece = Piece::man(Color::White);
    /// Black man. Raw value: 1.
    pub const BLACK_MAN: Piece = Piece::man(Color::Black);
    /// White king. Raw value: 2.
    pub const WHITE_KING: Piece = Piece::king(Color::White);
    /// Black king. Raw value: 3.
    pub const BLACK_KING: Piece = Piece::king(Color::Black);

    /// All four pieces in raw-value order.
    pub const ALL: [Piece; 4] = [
        Self::WHITE_MAN,
        Self::BLACK_MAN,
        Self::WHITE_KING,
        Self::BLACK_KING,
    ];

    /// Create an uncrowned piece.
    #[inline]
    pub const fn man(color: Color) -> Piece {
        Piece(color as u8)
    }

    /// Create a crowned piece.
    #[inline]
    pub const fn king(color: Color) -> Piece {
        Piece(color as u8 | KING_BIT)
    }

    /// Parse a layout character: `w`/`b` for men, `W`/`B` for kings.
    #[inline]
    pub fn from_layout_char(c: char) -> Option<Piece> {
        Piece::ALL.into_iter().find(|piece| piece.layout_char() == c)
    }

    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & COLOR_BIT == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        self.0 & KING_BIT != 0
    }

    /// Return the same piece with the king flag set.
    #[inline]
    pub const fn crowned(self) -> Piece {
        Piece(self.0 | KING_BIT)
    }

    /// Return the layout character for this piece.
    #[inline]
    pub const fn layout_char(self) -> char {
        match (self.color(), self.is_king()) {
            (Color::White, false) => 'w',
            (Color::Black, false) => 'b',
            (Color::White, true) => 'W',
            (Color::Black, true) => 'B',
        }
    }

    /// Board glyph: `W`, `B`, or `W+`/`B+` for kings.
    #[inline]
    pub const fn glyph(self) -> &'static str {
        match (self.color(), self.is_king()) {
            (Color::White, false) => "W",
            (Color::Black, false) => "B",
            (Color::White, true) => "W+",
            (Color::Black, true) => "B+",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_king() { "King" } else { "Man" };
        write!(f, "{}{}", self.color(), kind)
    }
}
