//! Searcher: configuration, root move selection, and the scoped make/undo
//! helper every search step goes through.

use std::time::Instant;

use tracing::{debug, trace};

use crate::config::{SearchConfig, StalemateAdjust};
use crate::engine::eval::evaluate;
use crate::error::{SearchError, SearchResult};
use crate::game::{BoardMove, GameEngine};

use super::ordering::order_moves;
use super::types::{SearchOutcome, SearchStats, INFINITY};

/// Apply `mv`, run `f` on the resulting position, then undo `mv`.
///
/// The undo happens whether or not `f` fails; a failure from `f` is
/// returned after the position has been restored.
pub fn with_move<G, T, F>(game: &mut G, mv: &G::Move, f: F) -> SearchResult<T>
where
    G: GameEngine + ?Sized,
    F: FnOnce(&mut G) -> SearchResult<T>,
{
    game.make_move(mv)?;
    let result = f(game);
    game.undo_move(mv)?;
    result
}

#[derive(Clone, Debug, Default)]
pub struct Searcher {
    pub(super) config: SearchConfig,
    pub(super) stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Searcher {
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Stats of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick a move for the side to move at the configured depth.
    pub fn select_move<G: GameEngine + ?Sized>(
        &mut self,
        game: &mut G,
    ) -> SearchResult<SearchOutcome<G::Move>> {
        let depth = self.config.depth;
        self.select_move_to_depth(game, depth)
    }

    /// Pick a move for the side to move, searching `depth` plies.
    ///
    /// White maximizes and Black minimizes the White-positive score. Every
    /// root move is searched; the root window only narrows what the children
    /// see. With `mate_short_circuit`, the first move that mates on the spot
    /// is returned without searching the rest.
    pub fn select_move_to_depth<G: GameEngine + ?Sized>(
        &mut self,
        game: &mut G,
        depth: u8,
    ) -> SearchResult<SearchOutcome<G::Move>> {
        if depth == 0 {
            return Err(SearchError::InvalidDepth(depth));
        }
        let start = Instant::now();
        self.stats = SearchStats::default();

        let mut moves = game.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        if self.config.order_moves {
            moves = order_moves(&*game, moves);
        }

        let maximizing = game.side_to_move().is_white();
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best_value = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move: Option<G::Move> = None;

        for mv in &moves {
            let (value, mates) = with_move(game, mv, |game| {
                if self.config.mate_short_circuit && game.is_in_checkmate() {
                    return Ok((self.terminal_score(&*game, true), true));
                }
                let child = self.minimax(game, depth - 1, alpha, beta, !maximizing)?;
                Ok((self.adjust_for_stalemate(&*game, child, maximizing), false))
            })?;
            trace!(mv = %mv.to_uci_string(), value, "root move");

            if mates {
                return Ok(self.finish(mv.clone(), value, depth, true, start));
            }

            let improved = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improved {
                best_value = value;
                best_move = Some(mv.clone());
            }

            if maximizing {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
        }

        let best_move = match best_move.or_else(|| moves.first().cloned()) {
            Some(mv) => mv,
            None => return Err(SearchError::NoLegalMoves),
        };
        Ok(self.finish(best_move, best_value, depth, false, start))
    }

    fn finish<M: BoardMove>(
        &mut self,
        best_move: M,
        score: i32,
        depth: u8,
        mates: bool,
        start: Instant,
    ) -> SearchOutcome<M> {
        self.stats.elapsed = start.elapsed();
        debug!(
            depth,
            score,
            mates,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            elapsed_ms = self.stats.elapsed.as_millis() as u64,
            best = %best_move.to_uci_string(),
            "search finished"
        );
        SearchOutcome {
            best_move,
            score,
            depth,
            mates,
            stats: self.stats.clone(),
        }
    }

    /// Static score of a leaf. A mated side to move pushes the score
    /// `mate_bonus` toward the side that delivered mate.
    pub(super) fn terminal_score<G: GameEngine + ?Sized>(&self, game: &G, checkmate: bool) -> i32 {
        let score = evaluate(game, self.config.eval);
        if checkmate {
            score - game.side_to_move().sign() * self.config.mate_bonus
        } else {
            score
        }
    }

    /// Correct a child value when the move that produced it stalemated the
    /// opponent. `mover_maximizing` is the side that just moved.
    pub(super) fn adjust_for_stalemate<G: GameEngine + ?Sized>(
        &self,
        game: &G,
        value: i32,
        mover_maximizing: bool,
    ) -> i32 {
        if self.config.stalemate == StalemateAdjust::Off || !game.is_stalemate() {
            return value;
        }
        match self.config.stalemate {
            StalemateAdjust::Off => value,
            StalemateAdjust::Bias if mover_maximizing => value - self.config.draw_bias,
            StalemateAdjust::Bias => value + self.config.draw_bias,
            StalemateAdjust::Damp => value / 2,
        }
    }
}
