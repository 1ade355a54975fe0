//! The board: an 8x8 grid of optional pieces that owns every piece in play.

use std::fmt;

use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

/// Back row layout from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid. Each cell is empty or owns exactly one [`Piece`] whose
/// stored square equals the cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Return a board with no pieces.
    pub fn empty() -> Board {
        Board {
            grid: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    /// Return the standard starting position with threats computed.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for team in Team::ALL {
            for (col, kind) in (0u8..).zip(BACK_ROW) {
                let back = Square::new_unchecked(team.back_row(), col);
                let pawn = Square::new_unchecked(team.pawn_row(), col);
                board.place(Piece::new(kind, team, back));
                board.place(Piece::new(PieceKind::Pawn, team, pawn));
            }
        }
        board.recompute_all_threats();
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.grid[sq.row() as usize][sq.col() as usize].as_ref()
    }

    /// Return the piece at raw coordinates; `None` when empty or off the board.
    pub fn piece_at_coords(&self, row: i8, col: i8) -> Option<&Piece> {
        let sq = Square::try_from((row, col)).ok()?;
        self.piece_at(sq)
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.grid[sq.row() as usize][sq.col() as usize].as_mut()
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Install `piece` at its own stored square, returning the displaced occupant.
    ///
    /// Threats are not recomputed; call
    /// [`recompute_all_threats`](Board::recompute_all_threats) once the board
    /// has reached its next consistent state.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        let sq = piece.square();
        self.grid[sq.row() as usize][sq.col() as usize].replace(piece)
    }

    /// Remove and return the piece on `sq`.
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize].take()
    }

    /// Move the piece on `from` to `to` as one step, returning whatever stood on `to`.
    ///
    /// The moving piece's stored square is updated together with the grid.
    /// `has_moved` and the threat caches are left to the caller.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty or holds a piece that believes it stands
    /// elsewhere; both indicate a broken board invariant.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self
            .take(from)
            .unwrap_or_else(|| panic!("relocate from empty square {from}"));
        assert_eq!(piece.square(), from, "occupancy conflict at {from}");
        let captured = self.take(to);
        piece.set_square(to);
        self.place(piece);
        captured
    }

    /// Iterate over every piece in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flatten().flatten()
    }

    /// Iterate over the pieces of one team in row-major order.
    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.team() == team)
    }

    /// Squares holding the pieces of one team, row-major.
    pub fn squares_of(&self, team: Team) -> Vec<Square> {
        self.pieces_of(team).map(Piece::square).collect()
    }

    /// Return the square of `team`'s king, if it has one on the board.
    pub fn king_square(&self, team: Team) -> Option<Square> {
        self.pieces_of(team)
            .find(|piece| piece.kind() == PieceKind::King)
            .map(Piece::square)
    }

    /// Check that every piece's stored square matches the cell holding it.
    ///
    /// Unlike [`validate`](Self::validate) this accepts a pawn waiting on the
    /// far row for its promotion.
    pub fn validate_layout(&self) -> Result<(), BoardError> {
        for cell in Square::all() {
            if let Some(piece) = self.piece_at(cell)
                && piece.square() != cell
            {
                return Err(BoardError::OccupancyConflict {
                    cell,
                    claimed: piece.square(),
                });
            }
        }
        Ok(())
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        self.validate_layout()?;

        for cell in Square::all() {
            if let Some(piece) = self.piece_at(cell)
                && piece.kind() == PieceKind::Pawn
                && (cell.row() == 0 || cell.row() == 7)
            {
                return Err(BoardError::PawnOnBackRow { square: cell });
            }
        }

        for team in Team::ALL {
            let count = self
                .pieces_of(team)
                .filter(|piece| piece.kind() == PieceKind::King)
                .count();
            if count > 1 {
                return Err(BoardError::InvalidKingCount { team, count });
            }
        }

        Ok(())
    }

    /// Return a printable grid using the given glyphs.
    pub fn pretty(&self, symbols: SymbolSet) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            symbols,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

/// Glyphs used when printing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolSet {
    /// Unicode chess glyphs.
    #[default]
    Unicode,
    /// Placement letters (`K`, `q`, ...).
    Ascii,
}

/// Wrapper for printing a board as a framed 8x8 grid.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    symbols: SymbolSet,
}

const RULE: &str = "   ---------------------------------";

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        for row in 0u8..8 {
            write!(f, "{}: |", 8 - row)?;
            for col in 0u8..8 {
                let c = match self.board.piece_at(Square::new_unchecked(row, col)) {
                    Some(piece) => match self.symbols {
                        SymbolSet::Unicode => piece.glyph(),
                        SymbolSet::Ascii => piece.fen_char(),
                    },
                    None => ' ',
                };
                write!(f, " {c} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        write!(f, "   | A | B | C | D | E | F | G | H |")
    }
}
