//! Counting the moves that get a checked king out of check.

use tracing::debug;

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Count the legal moves that resolve the check on the king at `king_sq`.
    ///
    /// King escapes always count. Against a single checker, every ally move
    /// onto the resolving set (the checker's square, plus the checking ray
    /// for sliders) counts too; against two or more checkers only the king
    /// can help. Zero means checkmate.
    ///
    /// Each piece's [`resolving_moves`](Piece::resolving_moves) is refreshed
    /// along the way. Returns 0 if `king_sq` holds no king.
    pub fn count_resolving_moves(&mut self, king_sq: Square) -> usize {
        let Some(team) = self
            .piece_at(king_sq)
            .filter(|piece| piece.kind() == PieceKind::King)
            .map(Piece::team)
        else {
            return 0;
        };

        let escapes = self.legal_moves(king_sq);
        let mut total = escapes.len();
        if let Some(king) = self.piece_at_mut(king_sq) {
            king.set_resolving_moves(escapes);
        }

        let checkers = self.checkers_of(team);
        for &checker in &checkers {
            if let Some(piece) = self.piece_at(checker) {
                debug!(kind = %piece.kind(), square = %checker, "piece threatening the king");
            }
        }

        let defenders: Vec<Square> = self
            .pieces_of(team)
            .filter(|piece| piece.kind() != PieceKind::King)
            .map(Piece::square)
            .collect();
        for &sq in &defenders {
            if let Some(piece) = self.piece_at_mut(sq) {
                piece.set_resolving_moves(Vec::new());
            }
        }

        if let [checker] = checkers[..] {
            let resolving = self.resolving_set(checker, king_sq);
            for sq in defenders {
                let moves: Vec<Square> = self
                    .legal_moves(sq)
                    .into_iter()
                    .filter(|to| resolving.contains(to))
                    .collect();
                total += moves.len();
                if let Some(piece) = self.piece_at_mut(sq) {
                    piece.set_resolving_moves(moves);
                }
            }
        }

        debug!(king = %king_sq, checkers = checkers.len(), total, "check resolution count");
        total
    }

    /// Squares an ally may land on to stop the check from `checker`.
    ///
    /// Pawns and knights have no line to block, so only capturing them works.
    fn resolving_set(&self, checker: Square, king_sq: Square) -> Vec<Square> {
        let mut squares = self.ray_toward(checker, king_sq).unwrap_or_default();
        squares.push(checker);
        squares
    }
}
