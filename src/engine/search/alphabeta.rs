//! Alpha-beta minimax.

use crate::engine::eval::evaluate;
use crate::error::SearchResult;
use crate::game::GameEngine;

use super::ordering::order_moves;
use super::searcher::{with_move, Searcher};

impl Searcher {
    /// White-positive minimax value of the current position searched
    /// `depth` plies deep inside the `(alpha, beta)` window.
    ///
    /// Fail-hard: the result is clamped to the window, so only a full
    /// window yields the exact value.
    pub fn minimax<G: GameEngine + ?Sized>(
        &mut self,
        game: &mut G,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult<i32> {
        self.stats.nodes += 1;

        if let Some(score) = self.leaf_score(&*game, depth) {
            return Ok(score);
        }

        let mut moves = game.legal_moves();
        if self.config.order_all_nodes {
            moves = order_moves(&*game, moves);
        }

        for mv in &moves {
            let value = with_move(game, mv, |game| {
                let child = self.minimax(game, depth - 1, alpha, beta, !maximizing)?;
                Ok(self.adjust_for_stalemate(&*game, child, maximizing))
            })?;

            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(if maximizing { alpha } else { beta })
    }

    /// Score of a node that is not expanded, or `None` to recurse.
    ///
    /// Repetition is checked first and scored on its own terms, favoring
    /// the side to move by `draw_bias`. Depth exhaustion, draws and mates
    /// use the regular evaluation.
    pub(super) fn leaf_score<G: GameEngine + ?Sized>(&self, game: &G, depth: u8) -> Option<i32> {
        if self.config.detect_repetition && game.is_repeated_position() {
            let bias = game.side_to_move().sign() * self.config.draw_bias;
            return Some(evaluate(game, self.config.repetition_eval) + bias);
        }
        let checkmate = game.is_in_checkmate();
        if depth == 0 || checkmate || game.is_draw() {
            return Some(self.terminal_score(game, checkmate));
        }
        None
    }
}
