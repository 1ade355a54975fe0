//! A piece on the board, with its cached threat state.

use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

/// A chess piece owned by the board cell it stands on.
///
/// Identity is `(kind, team)`. Everything else is state the board keeps
/// current: the square (always equal to the owning cell), whether the piece
/// has moved, and the threat cache refreshed by
/// [`Board::recompute_all_threats`](crate::board::Board::recompute_all_threats).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    team: Team,
    square: Square,
    has_moved: bool,
    threats: Vec<Square>,
    threatening_king: bool,
    resolving_moves: Vec<Square>,
}

impl Piece {
    /// Create an unmoved piece with an empty threat cache.
    pub fn new(kind: PieceKind, team: Team, square: Square) -> Piece {
        Piece {
            kind,
            team,
            square,
            has_moved: false,
            threats: Vec::new(),
            threatening_king: false,
            resolving_moves: Vec::new(),
        }
    }

    /// Parse a placement character: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char, square: Square) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        Some(Piece::new(kind, team, square))
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Squares this piece attacks or covers, as of the last recomputation.
    #[inline]
    pub fn threats(&self) -> &[Square] {
        &self.threats
    }

    /// Whether the last recomputation found the enemy king among the threats.
    #[inline]
    pub fn is_threatening_king(&self) -> bool {
        self.threatening_king
    }

    /// Check-resolving destinations recorded by the last
    /// [`Board::count_resolving_moves`](crate::board::Board::count_resolving_moves).
    #[inline]
    pub fn resolving_moves(&self) -> &[Square] {
        &self.resolving_moves
    }

    /// Placement character: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        match self.team {
            Team::White => self.kind.fen_char().to_ascii_uppercase(),
            Team::Black => self.kind.fen_char(),
        }
    }

    /// Unicode glyph.
    pub fn glyph(&self) -> char {
        self.kind.glyph(self.team)
    }

    /// Return `true` if this is a pawn standing on its promotion row.
    pub fn awaits_promotion(&self) -> bool {
        self.kind == PieceKind::Pawn && self.square.row() == self.team.promotion_row()
    }

    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    pub(crate) fn set_has_moved(&mut self, has_moved: bool) {
        self.has_moved = has_moved;
    }

    pub(crate) fn set_threats(&mut self, threats: Vec<Square>, threatening_king: bool) {
        self.threats = threats;
        self.threatening_king = threatening_king;
    }

    pub(crate) fn set_resolving_moves(&mut self, moves: Vec<Square>) {
        self.resolving_moves = moves;
    }
}
