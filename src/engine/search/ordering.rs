//! Move ordering: MVV-LVA.

use crate::core::PieceKind;
use crate::game::{BoardMove, GameEngine};

/// Most valuable victim, least valuable attacker: victim value minus
/// attacker value. Non-captures have a zero-valued victim.
pub fn mvv_lva<G: GameEngine + ?Sized>(game: &G, mv: &G::Move) -> i32 {
    let victim = game.piece_at(mv.to_square());
    let attacker = mv
        .from_square()
        .map(|sq| game.piece_at(sq))
        .unwrap_or(PieceKind::None);
    victim.value() - attacker.value()
}

/// Sort moves by descending MVV-LVA score. The sort is stable, so equal
/// scores keep the game engine's enumeration order.
pub fn order_moves<G: GameEngine + ?Sized>(game: &G, moves: Vec<G::Move>) -> Vec<G::Move> {
    let mut scored: Vec<(G::Move, i32)> = moves
        .into_iter()
        .map(|mv| {
            let score = mvv_lva(game, &mv);
            (mv, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(mv, _)| mv).collect()
}
