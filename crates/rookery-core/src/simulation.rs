//! Reversible trial moves used to filter out moves that expose the king.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// A move applied to a board on trial, restored when dropped or undone.
///
/// Applying records the captured piece (if any) and the origin square; undo
/// moves the piece back, reinstalls the capture and recomputes threats, so
/// the board compares equal to its state before [`apply`](Self::apply).
/// `has_moved` is never touched.
///
/// While the simulation lives it holds the only borrow of the board, so no
/// other reader can observe the trial position.
pub struct MoveSimulation<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    captured: Option<Piece>,
}

impl<'a> MoveSimulation<'a> {
    /// Move the piece on `from` to `to` and recompute all threats.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty.
    pub fn apply(board: &'a mut Board, from: Square, to: Square) -> MoveSimulation<'a> {
        let captured = board.relocate(from, to);
        board.recompute_all_threats();
        MoveSimulation {
            board,
            from,
            to,
            captured,
        }
    }

    /// The board in its trial state.
    pub fn board(&self) -> &Board {
        self.board
    }

    /// The piece removed from the destination, if the trial was a capture.
    pub fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }

    /// Restore the board. Equivalent to dropping the simulation.
    pub fn undo(self) {}

    fn restore(&mut self) {
        let mover = self.board.relocate(self.to, self.from);
        debug_assert!(mover.is_none(), "origin {} was reoccupied", self.from);
        if let Some(captured) = self.captured.take() {
            self.board.place(captured);
        }
        self.board.recompute_all_threats();
        debug_assert_eq!(self.board.validate_layout(), Ok(()));
    }
}

impl Drop for MoveSimulation<'_> {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::MoveSimulation;
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;
    use crate::team::Team;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn trial_position_is_visible_then_restored() {
        let mut board = Board::starting_position();
        let before = board.clone();
        {
            let simulation = MoveSimulation::apply(&mut board, sq("e2"), sq("e4"));
            let trial = simulation.board();
            assert!(!trial.is_occupied(sq("e2")));
            assert_eq!(trial.piece_at(sq("e4")).unwrap().square(), sq("e4"));
            assert!(simulation.captured().is_none());
        }
        assert_eq!(board, before);
    }

    #[test]
    fn capture_is_reinstalled() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::Rook, Team::White, sq("a1")));
        board.place(Piece::new(PieceKind::Queen, Team::Black, sq("a7")));
        board.recompute_all_threats();
        let before = board.clone();

        let simulation = MoveSimulation::apply(&mut board, sq("a1"), sq("a7"));
        assert_eq!(simulation.captured().map(Piece::kind), Some(PieceKind::Queen));
        assert_eq!(simulation.board().pieces().count(), 1);
        simulation.undo();

        assert_eq!(board, before);
    }

    #[test]
    fn round_trip_for_every_candidate() {
        let mut board: Board = "r3k2r/ppp2ppp/2n1bn2/3qp3/3PP3/2N1BN2/PPP2PPP/R2QK2R"
            .parse()
            .unwrap();
        let before = board.clone();
        for from in Square::all() {
            for to in board.candidate_moves(from) {
                MoveSimulation::apply(&mut board, from, to).undo();
                assert_eq!(board, before, "{from}->{to} did not restore the board");
            }
        }
    }

    #[test]
    fn has_moved_is_untouched() {
        let mut board = Board::starting_position();
        MoveSimulation::apply(&mut board, sq("g1"), sq("f3")).undo();
        assert!(!board.piece_at(sq("g1")).unwrap().has_moved());
    }
}
