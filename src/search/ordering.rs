use cozy_chess::{Board, Move};

use crate::search::eval::evaluate;

/// Legal moves sorted by the static evaluation of the position each one
/// reaches, best-for-White first. Pure ordering hint for the alpha-beta
/// search: the set of moves is exactly the legal-move set, and ties keep
/// generation order.
pub fn ordered_moves(board: &Board) -> Vec<Move> {
    let mut scored: Vec<(Move, f32)> = Vec::with_capacity(64);
    board.generate_moves(|ml| {
        for m in ml {
            let mut child = board.clone();
            child.play(m);
            scored.push((m, evaluate(&child)));
        }
        false
    });
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.into_iter().map(|(m, _)| m).collect()
}
