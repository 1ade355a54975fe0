//! Piece-placement strings (the first field of FEN) for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    /// Parse a placement such as `"4k3/8/8/8/8/8/8/4K2R"`.
    ///
    /// Rows run from row 0 (rank 8) down to row 7 (rank 1). Any fields after
    /// the first whitespace are ignored, so full FEN strings are accepted.
    /// Pawns off their starting row are marked as moved.
    fn from_str(s: &str) -> Result<Board, PlacementError> {
        let placement = s.split_whitespace().next().ok_or(PlacementError::Empty)?;

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();

        for (row_index, row_str) in rows.iter().enumerate() {
            let mut col: u8 = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    let length = col as usize + digit as usize;
                    if length > 8 {
                        return Err(PlacementError::BadRowLength {
                            row: row_index,
                            length,
                        });
                    }
                    col = length as u8;
                    continue;
                }

                if col >= 8 {
                    return Err(PlacementError::BadRowLength {
                        row: row_index,
                        length: col as usize + 1,
                    });
                }

                let sq = Square::new_unchecked(row_index as u8, col);
                let mut piece = Piece::from_fen_char(c, sq)
                    .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                if piece.kind() == PieceKind::Pawn && sq.row() != piece.team().pawn_row() {
                    piece.set_has_moved(true);
                }
                board.place(piece);
                col += 1;
            }

            if col != 8 {
                return Err(PlacementError::BadRowLength {
                    row: row_index,
                    length: col as usize,
                });
            }
        }

        board.validate()?;
        board.recompute_all_threats();
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_count = 0u8;

            for col in 0u8..8 {
                match self.piece_at(Square::new_unchecked(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
