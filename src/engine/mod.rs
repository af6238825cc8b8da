//! Engine components
//!
//! - Static evaluation: material and piece-square tables
//! - MVV-LVA move ordering
//! - Fixed-depth alpha-beta search

pub mod eval;
pub mod search;

pub use eval::{evaluate, material, material_and_position, PieceSquareTable, PIECE_SQUARE_TABLE};
pub use search::{SearchOutcome, SearchStats, Searcher, INFINITY};
