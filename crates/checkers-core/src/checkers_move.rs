//! Move representation, bit-packed into a u16.

use std::fmt;

use crate::square::Square;

const SRC_MASK: u16 = 0x003F;
const DST_MASK: u16 = 0x0FC0;
const DST_SHIFT: u32 = 6;

/// What a validated move does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// One diagonal cell, no capture.
    Step,
    /// Two diagonal cells over an opposing piece, which is removed.
    Jump {
        /// Square of the piece being captured.
        captured: Square,
    },
}

impl MoveKind {
    /// Return the captured square for a jump.
    #[inline]
    pub const fn captured(self) -> Option<Square> {
        match self {
            MoveKind::Step => None,
            MoveKind::Jump { captured } => Some(captured),
        }
    }
}

/// A source/destination pair encoded in 16 bits.
///
/// ```text
/// bits  0-5:  source square      (0-63)
/// bits  6-11: destination square (0-63)
/// ```
///
/// A `Move` only says where a piece goes; legality is decided by
/// [`validate`](crate::rules::validate) against a board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Null move sentinel (source == destination). Never legal.
    pub const NULL: Move = Move(0);

    pub const fn new(source: Square, dest: Square) -> Move {
        Move((source.index() as u16) | ((dest.index() as u16) << DST_SHIFT))
    }

    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }

    /// Signed column distance from source to destination.
    #[inline]
    pub const fn dx(self) -> i32 {
        self.dest().x() as i32 - self.source().x() as i32
    }

    /// Signed row distance from source to destination.
    #[inline]
    pub const fn dy(self) -> i32 {
        self.dest().y() as i32 - self.source().y() as i32
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == Move::NULL.0
    }

    /// Render in the input notation, e.g. `C 6 D 5`.
    pub fn notation(self) -> String {
        let (src, dst) = (self.source(), self.dest());
        format!(
            "{} {} {} {}",
            src.column_letter(),
            src.row_number(),
            dst.column_letter(),
            dst.row_number()
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source(), self.dest())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
