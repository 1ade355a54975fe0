//! Knight threats.

use crate::geometry::{KNIGHT_OFFSETS, leaps};
use crate::piece::Piece;
use crate::square::Square;

/// Every on-board jump; knights are never blocked.
pub(super) fn knight_threats(piece: &Piece) -> Vec<Square> {
    leaps(piece.square(), &KNIGHT_OFFSETS)
}
