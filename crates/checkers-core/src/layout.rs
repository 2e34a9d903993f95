//! Compact text layout for a [`Board`], in the spirit of FEN.
//!
//! Eight `/`-separated rows from row 1 (top) to row 8. Within a row, `w`/`b`
//! are men, `W`/`B` are kings, and a digit 1-8 skips that many empty cells.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::LayoutError;
use crate::piece::Piece;
use crate::square::Square;

/// The layout string for the standard starting position.
pub const STARTING_LAYOUT: &str = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1";

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (y, row_str) in rows.iter().enumerate() {
            let mut x: usize = 0;
            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(LayoutError::InvalidChar { character: c });
                    }
                    x += digit as usize;
                    continue;
                }

                let piece = Piece::from_layout_char(c).ok_or(LayoutError::InvalidChar { character: c })?;
                let sq = Square::from_coords(x as i32, y as i32).ok_or(LayoutError::BadRowLength {
                    row: y + 1,
                    length: x + 1,
                })?;
                board.put_piece(sq, piece);
                x += 1;
            }

            if x != 8 {
                return Err(LayoutError::BadRowLength {
                    row: y + 1,
                    length: x,
                });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0u8..8 {
            if y > 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for x in 0u8..8 {
                let sq = Square::from_index_unchecked(y * 8 + x);
                match self.piece_on(sq) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.layout_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_LAYOUT;
    use crate::board::Board;
    use crate::error::{BoardError, LayoutError};
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_layout_parses_to_starting_position() {
        let board: Board = STARTING_LAYOUT.parse().unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn starting_position_prints_starting_layout() {
        assert_eq!(Board::starting_position().to_string(), STARTING_LAYOUT);
    }

    #[test]
    fn kings_survive_roundtrip() {
        let layout = "1W6/8/8/8/8/8/8/6b1";
        let board: Board = layout.parse().unwrap();
        assert_eq!(
            board.piece_on(Square::from_coords(1, 0).unwrap()),
            Some(Piece::WHITE_KING)
        );
        assert_eq!(
            board.piece_on(Square::from_coords(6, 7).unwrap()),
            Some(Piece::BLACK_MAN)
        );
        assert_eq!(board.to_string(), layout);
    }

    #[test]
    fn wrong_row_count() {
        assert_eq!(
            "8/8/8".parse::<Board>(),
            Err(LayoutError::WrongRowCount { found: 3 })
        );
    }

    #[test]
    fn short_and_long_rows() {
        assert_eq!(
            "7/8/8/8/8/8/8/8".parse::<Board>(),
            Err(LayoutError::BadRowLength { row: 1, length: 7 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/8b".parse::<Board>(),
            Err(LayoutError::BadRowLength { row: 8, length: 9 })
        );
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(
            "8/8/8/8/x7/8/8/8".parse::<Board>(),
            Err(LayoutError::InvalidChar { character: 'x' })
        );
        assert_eq!(
            "8/8/8/8/09/8/8/8".parse::<Board>(),
            Err(LayoutError::InvalidChar { character: '0' })
        );
    }

    #[test]
    fn light_square_is_rejected() {
        let err = "w7/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidBoard(BoardError::PieceOnLightSquare {
                square: Square::from_coords(0, 0).unwrap()
            })
        );
    }
}
