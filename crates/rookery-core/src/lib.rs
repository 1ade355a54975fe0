//! Core chess rules: board state, per-piece move generation, threat tracking,
//! check detection and check resolution.

mod board;
mod error;
mod game;
pub mod geometry;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod placement;
mod resolution;
mod simulation;
mod square;
mod team;
mod threats;

pub use board::{Board, PrettyBoard, SymbolSet};
pub use error::{BoardError, BoundsError, MoveError, PlacementError, PromotionError};
pub use game::{CheckState, Game};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use simulation::MoveSimulation;
pub use square::Square;
pub use team::Team;
