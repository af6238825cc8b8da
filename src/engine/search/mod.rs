//! Search: fixed-depth alpha-beta minimax and root move selection.

mod alphabeta;
pub mod ordering;
mod searcher;
mod types;

pub use ordering::{mvv_lva, order_moves};
pub use searcher::{with_move, Searcher};
pub use types::{SearchOutcome, SearchStats, INFINITY};
