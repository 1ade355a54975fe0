//! Threat tracking: cached per-piece threat sets, team-wide threat unions and
//! check detection.

use std::collections::HashSet;

use crate::board::Board;
use crate::movegen::threats_of;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

impl Board {
    /// Refresh every piece's threat set and threatening-king flag.
    ///
    /// A piece's threats depend on blockers anywhere along its lines, so any
    /// change to the board invalidates all of them. Must run after every
    /// move, capture or promotion before threats are queried.
    pub fn recompute_all_threats(&mut self) {
        let refreshed: Vec<(Square, Vec<Square>, bool)> = self
            .pieces()
            .map(|piece| {
                let threats = threats_of(self, piece);
                let threatening_king = self.covers_enemy_king(piece, &threats);
                (piece.square(), threats, threatening_king)
            })
            .collect();

        for (sq, threats, threatening_king) in refreshed {
            if let Some(piece) = self.piece_at_mut(sq) {
                piece.set_threats(threats, threatening_king);
            }
        }
    }

    fn covers_enemy_king(&self, piece: &Piece, threats: &[Square]) -> bool {
        threats.iter().any(|&sq| {
            self.piece_at(sq).is_some_and(|target| {
                target.kind() == PieceKind::King && target.team() != piece.team()
            })
        })
    }

    /// Union of the cached threat sets of every piece on `team`.
    pub fn squares_threatened_by(&self, team: Team) -> HashSet<Square> {
        self.pieces_of(team)
            .flat_map(|piece| piece.threats().iter().copied())
            .collect()
    }

    /// Return `team`'s king square if the opposing team threatens it.
    ///
    /// `None` when the king is safe or `team` has no king on the board.
    pub fn king_in_check(&self, team: Team) -> Option<Square> {
        let king = self.king_square(team)?;
        self.pieces_of(team.flip())
            .any(|piece| piece.threats().contains(&king))
            .then_some(king)
    }

    /// Squares of `team`'s opponents flagged as threatening `team`'s king.
    pub fn checkers_of(&self, team: Team) -> Vec<Square> {
        self.pieces_of(team.flip())
            .filter(|piece| piece.is_threatening_king())
            .map(Piece::square)
            .collect()
    }

    /// The ray of the slider on `from` that reaches `target`.
    ///
    /// `None` if `from` holds no slider or none of its rays contains `target`.
    pub fn ray_toward(&self, from: Square, target: Square) -> Option<Vec<Square>> {
        self.directional_threats(from)
            .into_iter()
            .find(|ray| ray.contains(&target))
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
    fn starting_threats() {
        let board = Board::starting_position();
        let white = board.squares_threatened_by(Team::White);
        // Rows 5 (rank 3) fully covered by pawns.
        for col in 0..8 {
            assert!(white.contains(&Square::new(5, col).unwrap()));
        }
        assert!(!white.contains(&sq("e4")));
        assert!(board.king_in_check(Team::White).is_none());
        assert!(board.king_in_check(Team::Black).is_none());
    }

    #[test]
    fn threat_union_collapses_duplicates() {
        let board = board_with(&[
            (PieceKind::Rook, Team::White, "a1"),
            (PieceKind::Rook, Team::White, "b2"),
        ]);
        let union = board.squares_threatened_by(Team::White);
        let summed: usize = board.pieces_of(Team::White).map(|p| p.threats().len()).sum();
        assert!(union.len() < summed);
        assert!(union.contains(&sq("a2")));
        assert!(union.contains(&sq("b1")));
    }

    #[test]
    fn queen_down_the_file_gives_check() {
        let board = board_with(&[
            (PieceKind::King, Team::White, "e1"),
            (PieceKind::Queen, Team::Black, "e8"),
        ]);
        assert_eq!(board.king_in_check(Team::White), Some(sq("e1")));
        assert_eq!(board.checkers_of(Team::White), vec![sq("e8")]);
        assert!(board.piece_at(sq("e8")).unwrap().is_threatening_king());
    }

    #[test]
    fn blocker_stops_check() {
        let board = board_with(&[
            (PieceKind::King, Team::White, "e1"),
            (PieceKind::Bishop, Team::White, "e4"),
            (PieceKind::Queen, Team::Black, "e8"),
        ]);
        assert!(board.king_in_check(Team::White).is_none());
        assert!(board.checkers_of(Team::White).is_empty());
    }

    #[test]
    fn stale_flags_clear_after_recompute() {
        let mut board = board_with(&[
            (PieceKind::King, Team::White, "e1"),
            (PieceKind::Rook, Team::Black, "e8"),
        ]);
        assert!(board.piece_at(sq("e8")).unwrap().is_threatening_king());
        board.place(Piece::new(PieceKind::Pawn, Team::White, sq("e2")));
        board.recompute_all_threats();
        assert!(!board.piece_at(sq("e8")).unwrap().is_threatening_king());
    }

    #[test]
    fn pawn_threatens_king_diagonally() {
        let board = board_with(&[
            (PieceKind::King, Team::Black, "d8"),
            (PieceKind::Pawn, Team::White, "e7"),
        ]);
        assert_eq!(board.king_in_check(Team::Black), Some(sq("d8")));
    }

    #[test]
    fn no_king_means_no_check() {
        let board = board_with(&[(PieceKind::Queen, Team::Black, "e8")]);
        assert!(board.king_in_check(Team::White).is_none());
    }

    #[test]
    fn ray_toward_finds_the_checking_line() {
        let board = board_with(&[
            (PieceKind::King, Team::White, "e1"),
            (PieceKind::Bishop, Team::Black, "a5"),
        ]);
        let ray = board.ray_toward(sq("a5"), sq("e1")).unwrap();
        assert_eq!(ray, vec![sq("b4"), sq("c3"), sq("d2"), sq("e1")]);
        assert!(board.ray_toward(sq("a5"), sq("h8")).is_none());
        assert!(board.ray_toward(sq("e1"), sq("e2")).is_none());
    }
}
