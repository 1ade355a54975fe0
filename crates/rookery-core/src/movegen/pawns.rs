//! Pawn threats and candidate moves.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// The two forward diagonals, whatever stands on them.
pub(super) fn pawn_threats(piece: &Piece) -> Vec<Square> {
    let forward = piece.team().pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(|d_col| piece.square().offset(forward, d_col))
        .collect()
}

/// Forward steps onto empty squares and diagonal captures of enemy pieces.
///
/// The double step needs an unmoved pawn and both squares ahead empty.
pub(super) fn pawn_candidates(board: &Board, piece: &Piece) -> Vec<Square> {
    let forward = piece.team().pawn_direction();
    let from = piece.square();
    let mut moves = Vec::with_capacity(4);

    if let Some(one) = from.offset(forward, 0)
        && !board.is_occupied(one)
    {
        moves.push(one);
        if !piece.has_moved()
            && let Some(two) = one.offset(forward, 0)
            && !board.is_occupied(two)
        {
            moves.push(two);
        }
    }

    for target in pawn_threats(piece) {
        if board
            .piece_at(target)
            .is_some_and(|occupant| occupant.team() != piece.team())
        {
            moves.push(target);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::{pawn_candidates, pawn_threats};
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;
    use crate::team::Team;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn pawn_at(board: &Board, s: &str) -> Piece {
        board.piece_at(sq(s)).unwrap().clone()
    }

    #[test]
    fn unmoved_pawn_has_single_and_double_step() {
        let board = Board::starting_position();
        let moves = pawn_candidates(&board, &pawn_at(&board, "e2"));
        assert_eq!(moves, vec![sq("e3"), sq("e4")]);
        let moves = pawn_candidates(&board, &pawn_at(&board, "d7"));
        assert_eq!(moves, vec![sq("d6"), sq("d5")]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::starting_position();
        board.place(Piece::new(PieceKind::Knight, Team::Black, sq("e3")));
        // Pawns never capture straight ahead, and the double step needs e3 empty too.
        assert!(pawn_candidates(&board, &pawn_at(&board, "e2")).is_empty());
        // The knight on e3 is capturable from d2 and f2.
        assert!(pawn_candidates(&board, &pawn_at(&board, "d2")).contains(&sq("e3")));
        assert!(pawn_candidates(&board, &pawn_at(&board, "f2")).contains(&sq("e3")));
    }

    #[test]
    fn moved_pawn_steps_once() {
        let mut board = Board::empty();
        let mut pawn = Piece::new(PieceKind::Pawn, Team::White, sq("c3"));
        pawn.set_has_moved(true);
        board.place(pawn.clone());
        assert_eq!(pawn_candidates(&board, &pawn), vec![sq("c4")]);
    }

    #[test]
    fn pawn_does_not_capture_ally() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Team::Black, sq("c6"));
        board.place(pawn.clone());
        board.place(Piece::new(PieceKind::Rook, Team::Black, sq("b5")));
        board.place(Piece::new(PieceKind::Rook, Team::White, sq("d5")));
        let moves = pawn_candidates(&board, &pawn);
        assert!(moves.contains(&sq("d5")));
        assert!(!moves.contains(&sq("b5")));
    }

    #[test]
    fn threats_are_both_diagonals_regardless_of_occupancy() {
        let pawn = Piece::new(PieceKind::Pawn, Team::White, sq("a2"));
        assert_eq!(pawn_threats(&pawn), vec![sq("b3")]);
        let pawn = Piece::new(PieceKind::Pawn, Team::Black, sq("e7"));
        assert_eq!(pawn_threats(&pawn), vec![sq("d6"), sq("f6")]);
    }
}
