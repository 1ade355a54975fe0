//! Perft (performance test) for move generation correctness verification.

use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

/// Count the leaf nodes of the legal move tree `depth` plies deep, with
/// `team` to move first.
///
/// Depth 0 returns 1. A pawn reaching its promotion row branches into the
/// four promotion choices.
pub fn perft(game: &Game, team: Team, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut root = game.clone();
    let mut nodes = 0u64;
    for (from, destinations) in root.legal_moves_of(team) {
        for to in destinations {
            nodes += children(&root, from, to)
                .iter()
                .map(|child| perft(child, team.flip(), depth - 1))
                .sum::<u64>();
        }
    }
    nodes
}

/// Run perft with a per-move breakdown (useful for debugging).
///
/// Returns `("e2e4", nodes)` pairs sorted alphabetically; promotions get a
/// piece suffix such as `"a7a8q"`.
pub fn divide(game: &Game, team: Team, depth: usize) -> Vec<(String, u64)> {
    let mut root = game.clone();
    let mut results = Vec::new();
    for (from, destinations) in root.legal_moves_of(team) {
        let mover = root.board().piece_at(from).map(Piece::kind);
        for to in destinations {
            for child in children(&root, from, to) {
                let mut name = format!("{from}{to}");
                if mover == Some(PieceKind::Pawn)
                    && let Some(kind) = child.board().piece_at(to).map(Piece::kind)
                    && kind != PieceKind::Pawn
                {
                    name.push(kind.fen_char());
                }
                let count = if depth <= 1 {
                    1
                } else {
                    perft(&child, team.flip(), depth - 1)
                };
                results.push((name, count));
            }
        }
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

/// Positions reached by playing `from`-`to`, one per promotion choice when
/// the move promotes.
fn children(game: &Game, from: Square, to: Square) -> Vec<Game> {
    let mut child = game.clone();
    child.play(from, to);
    match child.pending_promotion() {
        None => vec![child],
        Some(sq) => PieceKind::PROMOTIONS
            .into_iter()
            .filter_map(|kind| {
                let mut promoted = child.clone();
                promoted.promote(sq, kind).ok().map(|()| promoted)
            })
            .collect(),
    }
}
