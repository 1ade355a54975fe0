//! Error types for coordinates, board validation, placement parsing, moves and promotion.

use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

/// A coordinate pair fell outside the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("coordinate ({row}, {col}) is outside the board")]
pub struct BoundsError {
    /// Requested row.
    pub row: i8,
    /// Requested column.
    pub col: i8,
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The piece stored in a grid cell believes it stands somewhere else.
    #[error("piece in cell {cell} claims square {claimed}")]
    OccupancyConflict {
        /// The grid cell holding the piece.
        cell: Square,
        /// The square recorded on the piece itself.
        claimed: Square,
    },
    /// A side has more than one king.
    #[error("expected at most 1 king for {team}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        team: Team,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on one of the two back rows.
    #[error("pawn found on back row at {square}")]
    PawnOnBackRow {
        /// Where the pawn stands.
        square: Square,
    },
}

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement string was empty.
    #[error("empty placement string")]
    Empty,
    /// The placement does not have exactly 8 rows.
    #[error("expected 8 rows in placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// A move request rejected by [`Game::apply_move`](crate::game::Game::apply_move).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// There is no piece on the source square.
    #[error("no piece on {square}")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
    /// The piece on the source square belongs to the other team.
    #[error("piece on {square} belongs to {owner}")]
    WrongTeam {
        /// The source square.
        square: Square,
        /// The team that owns the piece.
        owner: Team,
    },
    /// The destination is not among the piece's legal moves.
    #[error("{from} cannot move to {to}")]
    IllegalDestination {
        /// The source square.
        from: Square,
        /// The rejected destination.
        to: Square,
    },
    /// A pawn still waits to be promoted; no other move may be made.
    #[error("pawn on {square} must be promoted first")]
    PromotionPending {
        /// The square of the pawn awaiting promotion.
        square: Square,
    },
}

/// A promotion request rejected by [`Game::promote`](crate::game::Game::promote).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromotionError {
    /// The square does not hold a pawn standing on its promotion row.
    #[error("no promotable pawn on {square}")]
    NoPromotablePawn {
        /// The requested square.
        square: Square,
    },
    /// Pawns may only become a knight, bishop, rook or queen.
    #[error("cannot promote to {kind}")]
    InvalidChoice {
        /// The rejected piece kind.
        kind: PieceKind,
    },
}
