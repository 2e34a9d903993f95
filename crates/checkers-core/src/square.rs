//! Board cells addressed by column and row.

use std::fmt;

use crate::bitboard::Bitboard;

/// A cell on the 8x8 board, encoded as a `u8`.
///
/// Index = y * 8 + x, where `x` is the column (0 = A) and `y` is the row
/// (0 = row 1, printed at the top of the board).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from signed coordinates, returning `None` off the board.
    #[inline]
    pub const fn from_coords(x: i32, y: i32) -> Option<Square> {
        if x >= 0 && x < 8 && y >= 0 && y < 8 {
            Some(Square((y * 8 + x) as u8))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square from a zero-based index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse a column letter (A-H, either case) and a 1-based row number.
    pub fn from_notation(column: char, row: u8) -> Option<Square> {
        let column = column.to_ascii_uppercase();
        if !('A'..='H').contains(&column) || !(1..=8).contains(&row) {
            return None;
        }
        Square::from_coords(column as i32 - 'A' as i32, row as i32 - 1)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column, 0..7.
    #[inline]
    pub const fn x(self) -> u8 {
        self.0 % 8
    }

    /// Row, 0..7.
    #[inline]
    pub const fn y(self) -> u8 {
        self.0 / 8
    }

    /// Return `true` for the playable (dark) cells, where `x + y` is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.x() + self.y()) % 2 == 1
    }

    /// Return the square displaced by `(dx, dy)`, if it stays on the board.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Square> {
        Square::from_coords(self.x() as i32 + dx, self.y() as i32 + dy)
    }

    /// Return the cell halfway between `self` and `other`.
    ///
    /// Only meaningful when both coordinate distances are even.
    #[inline]
    pub const fn midpoint(self, other: Square) -> Square {
        let x = (self.x() + other.x()) / 2;
        let y = (self.y() + other.y()) / 2;
        Square(y * 8 + x)
    }

    /// Column letter as shown to players, `A`-`H`.
    #[inline]
    pub const fn column_letter(self) -> char {
        (b'A' + self.x()) as char
    }

    /// Row number as shown to players, 1-8.
    #[inline]
    pub const fn row_number(self) -> u8 {
        self.y() + 1
    }

    /// Return a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row_number())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
