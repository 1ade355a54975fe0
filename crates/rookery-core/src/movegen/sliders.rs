//! Ray casting for bishops, rooks and queens.

use crate::board::Board;
use crate::geometry::{ALL_DIRECTIONS, DIAGONAL, Direction, ORTHOGONAL};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Directions a slider kind moves along; empty for non-sliders.
pub(super) fn slider_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Queen => &ALL_DIRECTIONS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

/// One ray per direction, each running until it leaves the board or hits a
/// piece. The blocking square is included whichever team stands on it.
pub(super) fn slider_rays(board: &Board, piece: &Piece) -> Vec<Vec<Square>> {
    slider_directions(piece.kind())
        .iter()
        .map(|&direction| cast_ray(board, piece.square(), direction))
        .collect()
}

fn cast_ray(board: &Board, from: Square, (d_row, d_col): Direction) -> Vec<Square> {
    let mut ray = Vec::with_capacity(7);
    let mut cursor = from;
    while let Some(next) = cursor.offset(d_row, d_col) {
        ray.push(next);
        if board.is_occupied(next) {
            break;
        }
        cursor = next;
    }
    ray
}
