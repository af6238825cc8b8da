//! Search results, stats, and constants.

use std::time::Duration;

/// Bound larger than any reachable evaluation.
pub const INFINITY: i32 = 1_000_000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered by `minimax`, root children included
    pub nodes: u64,
    /// Sibling loops cut short by alpha >= beta
    pub cutoffs: u64,
    pub elapsed: Duration,
}

/// Result of one root search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<M> {
    pub best_move: M,
    /// White-positive value of `best_move`
    pub score: i32,
    pub depth: u8,
    /// `best_move` checkmates immediately
    pub mates: bool,
    pub stats: SearchStats,
}
