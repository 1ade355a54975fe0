//! King threats.

use crate::geometry::{KING_OFFSETS, leaps};
use crate::piece::Piece;
use crate::square::Square;

/// The adjacent on-board squares, whatever stands on them.
pub(super) fn king_threats(piece: &Piece) -> Vec<Square> {
    leaps(piece.square(), &KING_OFFSETS)
}
