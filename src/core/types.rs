//! Piece kinds and sides.

use std::fmt;

/// Side to move / owner of a piece. Scores are always White-positive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    /// +1 for White, -1 for Black.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Side::White)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Piece kind, including `None` for an empty square.
///
/// The discriminants double as indices into the piece-square table and the
/// value table, so `None` sits at 0 with zero weight.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum PieceKind {
    #[default]
    None = 0,
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// Every real piece kind, in value-table order.
    pub const PIECES: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Centipawn values indexed by `PieceKind::index`.
    pub const VALUES: [i32; 7] = [0, 100, 300, 300, 500, 900, 10000];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Material value in centipawns. The king's value is nominal: it is
    /// never captured in legal play, it only keeps the king from weighing zero.
    #[inline]
    pub const fn value(self) -> i32 {
        Self::VALUES[self.index()]
    }
}
