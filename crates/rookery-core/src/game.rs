//! Game state: the board plus any pending promotion, and the move/check API
//! the turn controller drives.

use tracing::debug;

use crate::board::Board;
use crate::error::{MoveError, PromotionError};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

/// Check status of one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    /// The king is not attacked.
    NotInCheck,
    /// The king on this square is attacked but the check can be answered.
    InCheck(Square),
    /// The king on this square is attacked and no move resolves it.
    Checkmate(Square),
}

/// A game in progress.
///
/// Owned by whoever runs the turns; every query goes through `&mut self`
/// because legality checks simulate moves on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    pending_promotion: Option<Square>,
}

impl Game {
    /// Start from the standard initial position.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position())
    }

    /// Start from an arbitrary board. Threats are recomputed, and a pawn
    /// already on its promotion row becomes the pending promotion.
    pub fn from_board(mut board: Board) -> Game {
        board.recompute_all_threats();
        let pending_promotion = board
            .pieces()
            .find(|piece| piece.awaits_promotion())
            .map(Piece::square);
        Game {
            board,
            pending_promotion,
        }
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Square of a pawn waiting to be promoted, if any.
    ///
    /// While this is `Some`, [`promote`](Game::promote) must be called before
    /// any other move.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Legal destinations of the piece on `sq`.
    pub fn legal_moves(&mut self, sq: Square) -> Vec<Square> {
        self.board.legal_moves(sq)
    }

    /// Every piece of `team` with its legal destinations.
    pub fn legal_moves_of(&mut self, team: Team) -> Vec<(Square, Vec<Square>)> {
        self.board.legal_moves_of(team)
    }

    /// Move the piece on `from` to `to` on behalf of `mover`.
    ///
    /// On success the piece is marked as moved, threats are recomputed, and
    /// a pawn landing on its promotion row becomes the pending promotion.
    pub fn apply_move(&mut self, from: Square, to: Square, mover: Team) -> Result<(), MoveError> {
        if let Some(square) = self.pending_promotion {
            return Err(MoveError::PromotionPending { square });
        }
        let owner = self
            .board
            .piece_at(from)
            .map(Piece::team)
            .ok_or(MoveError::EmptySource { square: from })?;
        if owner != mover {
            return Err(MoveError::WrongTeam {
                square: from,
                owner,
            });
        }
        if !self.board.legal_moves(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        self.play(from, to);
        Ok(())
    }

    /// Apply a move already known to be legal.
    pub(crate) fn play(&mut self, from: Square, to: Square) -> Option<Piece> {
        let captured = self.board.relocate(from, to);
        self.board.recompute_all_threats();

        let mut awaits_promotion = false;
        if let Some(piece) = self.board.piece_at_mut(to) {
            piece.set_has_moved(true);
            awaits_promotion = piece.awaits_promotion();
            debug!(
                team = %piece.team(),
                kind = %piece.kind(),
                from = %from,
                to = %to,
                captured = ?captured.as_ref().map(Piece::kind),
                "move applied"
            );
        }
        if awaits_promotion {
            self.pending_promotion = Some(to);
        }
        captured
    }

    /// Replace the pawn on `sq`, which must stand on its promotion row, with
    /// a piece of kind `choice`.
    pub fn promote(&mut self, sq: Square, choice: PieceKind) -> Result<(), PromotionError> {
        let pawn = self
            .board
            .piece_at(sq)
            .filter(|piece| piece.awaits_promotion())
            .ok_or(PromotionError::NoPromotablePawn { square: sq })?;
        if !choice.is_promotion_target() {
            return Err(PromotionError::InvalidChoice { kind: choice });
        }

        let team = pawn.team();
        let mut promoted = Piece::new(choice, team, sq);
        promoted.set_has_moved(true);
        self.board.place(promoted);
        self.board.recompute_all_threats();
        if self.pending_promotion == Some(sq) {
            self.pending_promotion = None;
        }
        debug!(team = %team, square = %sq, kind = %choice, "pawn promoted");
        Ok(())
    }

    /// Whether `team` is in check, and if so whether it is mated.
    pub fn check_status(&mut self, team: Team) -> CheckState {
        debug_assert!(
            self.pending_promotion.is_none(),
            "queried check status with an unpromoted pawn on the board"
        );
        let Some(king) = self.board.king_in_check(team) else {
            return CheckState::NotInCheck;
        };
        if self.board.count_resolving_moves(king) == 0 {
            debug!(team = %team, king = %king, "checkmate");
            CheckState::Checkmate(king)
        } else {
            debug!(team = %team, king = %king, "in check");
            CheckState::InCheck(king)
        }
    }

    /// `true` when `team` is not in check yet has no legal move.
    pub fn stalemate(&mut self, team: Team) -> bool {
        debug_assert!(
            self.pending_promotion.is_none(),
            "queried stalemate with an unpromoted pawn on the board"
        );
        if self.board.king_in_check(team).is_some() {
            return false;
        }
        let stalemate = !self.board.has_legal_move(team);
        if stalemate {
            debug!(team = %team, "stalemate");
        }
        stalemate
    }

    /// Pieces of `team` with the check-resolving moves recorded by the last
    /// [`check_status`](Game::check_status) that found a check.
    pub fn resolving_moves(&self, team: Team) -> Vec<(Square, Vec<Square>)> {
        self.board
            .pieces_of(team)
            .filter(|piece| !piece.resolving_moves().is_empty())
            .map(|piece| (piece.square(), piece.resolving_moves().to_vec()))
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
