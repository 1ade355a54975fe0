//! Per-kind threat generation and check-filtered legal moves.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::simulation::MoveSimulation;
use crate::square::Square;
use crate::team::Team;

use self::king::king_threats;
use self::knights::knight_threats;
use self::pawns::{pawn_candidates, pawn_threats};
use self::sliders::slider_rays;

/// Squares `piece` attacks or covers on `board`, whatever stands on them.
pub(crate) fn threats_of(board: &Board, piece: &Piece) -> Vec<Square> {
    match piece.kind() {
        PieceKind::Pawn => pawn_threats(piece),
        PieceKind::Knight => knight_threats(piece),
        PieceKind::King => king_threats(piece),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            slider_rays(board, piece).into_iter().flatten().collect()
        }
    }
}

impl Board {
    /// Squares the piece on `sq` attacks or covers, computed fresh.
    ///
    /// Includes squares held by allies at the end of a ray: those are
    /// defended, which is what keeps an enemy king from capturing there.
    /// Empty when `sq` is empty.
    pub fn raw_threats(&self, sq: Square) -> Vec<Square> {
        self.piece_at(sq)
            .map(|piece| threats_of(self, piece))
            .unwrap_or_default()
    }

    /// The slider on `sq`'s threats split into one list per direction.
    ///
    /// Empty for empty squares and for pawns, knights and kings, which have
    /// no line of sight.
    pub fn directional_threats(&self, sq: Square) -> Vec<Vec<Square>> {
        match self.piece_at(sq) {
            Some(piece) if piece.kind().is_slider() => slider_rays(self, piece),
            _ => Vec::new(),
        }
    }

    /// Destinations for the piece on `sq` before the check filter.
    pub fn candidate_moves(&self, sq: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(sq) else {
            return Vec::new();
        };
        match piece.kind() {
            PieceKind::Pawn => pawn_candidates(self, piece),
            _ => threats_of(self, piece)
                .into_iter()
                .filter(|&target| {
                    self.piece_at(target)
                        .is_none_or(|occupant| occupant.team() != piece.team())
                })
                .collect(),
        }
    }

    /// Destinations the piece on `sq` may move to without leaving its own
    /// king in check.
    ///
    /// Each candidate is tried through a [`MoveSimulation`] and undone before
    /// the next one, so the board is unchanged on return. Threats must be
    /// current when this is called.
    pub fn legal_moves(&mut self, sq: Square) -> Vec<Square> {
        let Some(team) = self.piece_at(sq).map(Piece::team) else {
            return Vec::new();
        };
        let mut legal = Vec::new();
        for to in self.candidate_moves(sq) {
            let simulation = MoveSimulation::apply(self, sq, to);
            let exposed = simulation.board().king_in_check(team).is_some();
            simulation.undo();
            if exposed {
                trace!(from = %sq, to = %to, "candidate leaves own king in check");
            } else {
                legal.push(to);
            }
        }
        legal
    }

    /// Every piece of `team` paired with its legal destinations, row-major.
    /// Pieces without a legal move are omitted.
    pub fn legal_moves_of(&mut self, team: Team) -> Vec<(Square, Vec<Square>)> {
        self.squares_of(team)
            .into_iter()
            .filter_map(|sq| {
                let moves = self.legal_moves(sq);
                (!moves.is_empty()).then_some((sq, moves))
            })
            .collect()
    }

    /// Return `true` if any piece of `team` has a legal move.
    pub fn has_legal_move(&mut self, team: Team) -> bool {
        self.squares_of(team)
            .into_iter()
            .any(|sq| !self.legal_moves(sq).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;
    use crate::team::Team;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn board_with(pieces: &[(PieceKind, Team, &str)]) -> Board {
        let mut board = Board::empty();
        for &(kind, team, at) in pieces {
            board.place(Piece::new(kind, team, sq(at)));
        }
        board.recompute_all_threats();
        board
    }

    #[test]
    fn starting_position_has_twenty_moves_each() {
        let mut board = Board::starting_position();
        for team in Team::ALL {
            let total: usize = board
                .legal_moves_of(team)
                .iter()
                .map(|(_, moves)| moves.len())
                .sum();
            assert_eq!(total, 20, "{team} should have 20 opening moves");
        }
    }

    #[test]
    fn lone_rook_in_center_has_fourteen_moves() {
        let mut board = board_with(&[(PieceKind::Rook, Team::White, "e4")]);
        assert_eq!(board.legal_moves(sq("e4")).len(), 14);
    }

    #[test]
    fn knight_skips_own_pieces() {
        let mut board = Board::starting_position();
        let moves = board.legal_moves(sq("g1"));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&sq("f3")));
        assert!(moves.contains(&sq("h3")));
        assert_eq!(board.raw_threats(sq("g1")).len(), 3);
    }

    #[test]
    fn pinned_piece_only_moves_along_pin() {
        let mut board = board_with(&[
            (PieceKind::King, Team::White, "e1"),
            (PieceKind::Rook, Team::White, "e3"),
            (PieceKind::Queen, Team::Black, "e7"),
        ]);
        let moves = board.legal_moves(sq("e3"));
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.col() == 4), "pinned rook left the file: {moves:?}");
        assert!(moves.contains(&sq("e7")));
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let mut board = board_with(&[
            (PieceKind::King, Team::White, "e1"),
            (PieceKind::Knight, Team::White, "e2"),
            (PieceKind::Rook, Team::Black, "e8"),
        ]);
        assert!(board.legal_moves(sq("e2")).is_empty());
    }

    #[test]
    fn king_cannot_step_onto_defended_piece() {
        let mut board = board_with(&[
            (PieceKind::King, Team::White, "e1"),
            (PieceKind::Knight, Team::Black, "e2"),
            (PieceKind::Rook, Team::Black, "e8"),
        ]);
        // The rook's ray stops on the knight but still covers it.
        assert!(!board.legal_moves(sq("e1")).contains(&sq("e2")));
    }

    #[test]
    fn legal_moves_never_exceed_raw_threats_for_non_pawns() {
        let mut board = Board::starting_position();
        for sq in board.squares_of(Team::White) {
            let kind = board.piece_at(sq).unwrap().kind();
            if kind == PieceKind::Pawn {
                continue;
            }
            assert!(board.legal_moves(sq).len() <= board.raw_threats(sq).len());
        }
    }

    #[test]
    fn legal_moves_leave_board_untouched() {
        let mut board = Board::starting_position();
        let before = board.clone();
        for sq in board.squares_of(Team::White) {
            let _ = board.legal_moves(sq);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn directional_threats_only_for_sliders() {
        let board = Board::starting_position();
        assert_eq!(board.directional_threats(sq("a1")).len(), 4);
        assert_eq!(board.directional_threats(sq("c8")).len(), 4);
        assert!(board.directional_threats(sq("b1")).is_empty());
        assert!(board.directional_threats(sq("e4")).is_empty());
    }

    #[test]
    fn empty_square_has_nothing() {
        let mut board = Board::starting_position();
        assert!(board.raw_threats(sq("e4")).is_empty());
        assert!(board.candidate_moves(sq("e4")).is_empty());
        assert!(board.legal_moves(sq("e4")).is_empty());
    }

    #[test]
    fn has_legal_move_false_when_boxed_in() {
        // Black king in the corner, covered on every flight square, not in check.
        let mut board = board_with(&[
            (PieceKind::King, Team::Black, "a8"),
            (PieceKind::Queen, Team::White, "b6"),
            (PieceKind::King, Team::White, "h1"),
        ]);
        assert!(board.king_in_check(Team::Black).is_none());
        assert!(!board.has_legal_move(Team::Black));
        assert!(board.has_legal_move(Team::White));
    }
}
