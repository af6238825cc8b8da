//! Core chess types shared by the evaluator, the move orderer and the search
//!
//! - Piece kinds, sides and their centipawn values
//! - Square sets used for occupancy queries

pub mod square_set;
pub mod types;

pub use square_set::{SquareSet, SquareSetIter};
pub use types::{PieceKind, Side};
