//! Static evaluation
//!
//! Scores are in centipawns and always from White's point of view. The
//! evaluator only reads piece placement through the game engine's
//! occupancy query, so it has no side effects and no state.

pub mod pst;

use crate::config::EvalTerms;
use crate::core::{PieceKind, Side};
use crate::game::GameEngine;

pub use pst::{PieceSquareTable, PIECE_SQUARE_TABLE};

/// Evaluate the position with the chosen terms.
pub fn evaluate<G: GameEngine + ?Sized>(game: &G, terms: EvalTerms) -> i32 {
    match terms {
        EvalTerms::Material => material(game),
        EvalTerms::MaterialAndPosition => material_and_position(game),
    }
}

/// Sum of signed piece values.
pub fn material<G: GameEngine + ?Sized>(game: &G) -> i32 {
    let mut score = 0;
    for side in Side::BOTH {
        for kind in PieceKind::PIECES {
            let count = game.piece_squares(kind, side).count() as i32;
            score += side.sign() * count * kind.value();
        }
    }
    score
}

/// Signed piece values plus piece-square bonuses.
pub fn material_and_position<G: GameEngine + ?Sized>(game: &G) -> i32 {
    let mut score = 0;
    for side in Side::BOTH {
        for kind in PieceKind::PIECES {
            for sq in game.piece_squares(kind, side) {
                score += side.sign() * (kind.value() + PIECE_SQUARE_TABLE.bonus(kind, sq, side));
            }
        }
    }
    score
}
