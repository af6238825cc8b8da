//! Game engine capability interface
//!
//! The search never looks inside a position: it asks the game engine for
//! legal moves, applies and reverts them, and queries terminal states and
//! piece placement. `ChessGame` implements the interface on top of shakmaty.

pub mod chess_game;

use std::fmt;

use crate::core::{PieceKind, SquareSet, Side};
use crate::error::GameError;

pub use chess_game::ChessGame;

/// A move that can report its origin and destination squares (0-63, a1 = 0).
pub trait BoardMove {
    /// Origin square, `None` for moves without one (drops).
    fn from_square(&self) -> Option<u8>;
    /// Destination square. For castling this is where the king lands.
    fn to_square(&self) -> u8;
    /// Long algebraic (UCI) notation, used for logging and errors.
    fn to_uci_string(&self) -> String;
}

/// Board state, legality and terminal-state queries consumed by the search.
///
/// `make_move` and `undo_move` must exactly invert each other: after
/// `make_move(m)` followed by `undo_move(m)` every query answers as before.
pub trait GameEngine {
    type Move: BoardMove + Clone + PartialEq + fmt::Debug;

    /// All legal moves for the side to move.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn make_move(&mut self, mv: &Self::Move) -> Result<(), GameError>;

    /// Revert `mv`, which must be the last move made.
    fn undo_move(&mut self, mv: &Self::Move) -> Result<(), GameError>;

    fn is_in_checkmate(&self) -> bool;

    /// Stalemate, insufficient material, fifty-move rule or repetition.
    fn is_draw(&self) -> bool;

    /// The current position already occurred earlier in the game.
    fn is_repeated_position(&self) -> bool;

    fn is_in_check(&self) -> bool;

    fn side_to_move(&self) -> Side;

    /// Squares occupied by `side`'s pieces of `kind`.
    fn piece_squares(&self, kind: PieceKind, side: Side) -> SquareSet;

    /// Kind of the piece on `square`, `PieceKind::None` if empty.
    fn piece_at(&self, square: u8) -> PieceKind;

    fn has_legal_moves(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    /// No legal reply and not in check.
    fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_legal_moves()
    }
}
