//! Board squares as `(row, col)` pairs.
//!
//! Row 0 is Black's back row (rank 8) and row 7 is White's (rank 1);
//! column 0 is the a-file.

use std::fmt;

use crate::error::BoundsError;
use crate::geometry::within_bounds;

/// A square on the board. Both coordinates are always in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square, returning `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Create a square without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are in `0..8`.
    #[inline]
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Parse algebraic notation ("e4", case-insensitive file) into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Square::new(b'8' - rank_byte, file_byte - b'a')
    }

    /// Return the row (0 = Black's back row).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Return the column (0 = a-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the row-major index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Step by `(d_row, d_col)`, returning `None` if that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if within_bounds(row, col) {
            Some(Square::new_unchecked(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|i| Square::new_unchecked(i / 8, i % 8))
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = BoundsError;

    fn try_from((row, col): (i8, i8)) -> Result<Square, BoundsError> {
        if within_bounds(row, col) {
            Ok(Square::new_unchecked(row as u8, col as u8))
        } else {
            Err(BoundsError { row, col })
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::error::BoundsError;

    #[test]
    fn new_and_accessors() {
        let sq = Square::new(6, 4).unwrap();
        assert_eq!(sq.row(), 6);
        assert_eq!(sq.col(), 4);
        assert_eq!(sq.index(), 52);
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a8"), Square::new(0, 0));
        assert_eq!(Square::from_algebraic("h1"), Square::new(7, 7));
        assert_eq!(Square::from_algebraic("E2"), Square::new(6, 4));
        assert_eq!(format!("{}", Square::new(6, 4).unwrap()), "e2");
        assert_eq!(format!("{}", Square::new(0, 3).unwrap()), "d8");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a0").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
    }

    #[test]
    fn algebraic_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_algebraic(&sq.to_string()), Some(sq));
        }
    }

    #[test]
    fn offset_respects_bounds() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(1, 1), Square::new(1, 1));
        assert!(corner.offset(-1, 0).is_none());
        assert!(corner.offset(0, -1).is_none());
        assert!(Square::new(7, 7).unwrap().offset(1, 0).is_none());
    }

    #[test]
    fn try_from_coordinates() {
        assert_eq!(Square::try_from((3, 4)), Ok(Square::new(3, 4).unwrap()));
        assert_eq!(
            Square::try_from((-1, 4)),
            Err(BoundsError { row: -1, col: 4 })
        );
    }

    #[test]
    fn all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), Square::COUNT);
        assert!(squares.windows(2).all(|w| w[0].index() + 1 == w[1].index()));
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::new(4, 4).unwrap()), "Square(e4)");
    }
}
