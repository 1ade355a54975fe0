//! Bounds checking and the fixed step tables used by move generation.

use crate::square::Square;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: i8 = 8;

/// A `(row, col)` step.
pub type Direction = (i8, i8);

/// Rook rays: up, down, right, left.
pub const ORTHOGONAL: [Direction; 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Bishop rays.
pub const DIAGONAL: [Direction; 4] = [(-1, 1), (-1, -1), (1, -1), (1, 1)];

/// Queen rays: orthogonal first, then diagonal.
#[rustfmt::skip]
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (-1, 0), (1, 0), (0, 1), (0, -1),
    (-1, 1), (-1, -1), (1, -1), (1, 1),
];

/// Knight jumps.
#[rustfmt::skip]
pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

/// King steps.
#[rustfmt::skip]
pub const KING_OFFSETS: [Direction; 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];

/// Return `true` if `(row, col)` lies on the board.
#[inline]
pub const fn within_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// Squares reached from `from` by each offset, dropping those off the board.
pub fn leaps(from: Square, offsets: &[Direction]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn bounds() {
        assert!(within_bounds(0, 0));
        assert!(within_bounds(7, 7));
        assert!(!within_bounds(-1, 0));
        assert!(!within_bounds(0, 8));
        assert!(!within_bounds(8, 3));
    }

    #[test]
    fn knight_leaps_from_corner() {
        let squares = leaps(sq("a1"), &KNIGHT_OFFSETS);
        assert_eq!(squares.len(), 2);
        assert!(squares.contains(&sq("b3")));
        assert!(squares.contains(&sq("c2")));
    }

    #[test]
    fn king_leaps_from_center() {
        assert_eq!(leaps(sq("e4"), &KING_OFFSETS).len(), 8);
        assert_eq!(leaps(sq("h8"), &KING_OFFSETS).len(), 3);
    }

    #[test]
    fn queen_directions_cover_rook_and_bishop() {
        for d in ORTHOGONAL.iter().chain(DIAGONAL.iter()) {
            assert!(ALL_DIRECTIONS.contains(d));
        }
    }
}
