//! Piece-square tables
//!
//! The table ships as one 64-bit word per square. Byte `k` of a word is the
//! bonus for piece kind `k` (1 = pawn ... 6 = king) on that square, seen from
//! White; bytes 0 and 7 are unused. Words are ordered a1, b1, ... h8 with the
//! row taken from the rank and the column from the file.
//!
//! The words are unpacked at compile time into an explicit
//! `[kind][square]` array, so evaluation never shifts bits.

use crate::core::{PieceKind, Side};

#[rustfmt::skip]
pub const PACKED_SQUARES: [u64; 64] = [
    0x00141E321E003200, 0x0014282D280A6400, 0x0014282D28143C00, 0x00142D2D28143700, 0x001E322D28143200, 0x0028282D28143700, 0x00462837280A3700, 0x00461E321E003200,
    0x000A2832280A3200, 0x000A3232321E6400, 0x000A323232323C00, 0x000A323237373700, 0x0014323232323200, 0x001E37323C372D00, 0x0046323C371E3C00, 0x00502832280A3200,
    0x000A283228143200, 0x000A323232326400, 0x000A3732373C4600, 0x000A373237413C00, 0x001437323C413200, 0x001E37323C3C2800, 0x0032373C32323C00, 0x003C283228143200,
    0x00002D3728143200, 0x0000323232326400, 0x000037323C415000, 0x000037323C464B00, 0x000A37323C464600, 0x001E37323C413200, 0x0032323C32371E00, 0x00322D3228143200,
    0x00002D3728143200, 0x0000323232326400, 0x000037323C415000, 0x000037323C464B00, 0x000A37323C464600, 0x001E37323C413200, 0x0032323C32371E00, 0x00322D3228143200,
    0x000A283228143200, 0x000A323232326400, 0x000A3732373C4600, 0x000A373237413C00, 0x001437323C413200, 0x001E37323C3C2800, 0x0032323C32323C00, 0x003C283228143200,
    0x000A2832280A3200, 0x000A3232321E6400, 0x000A323232323C00, 0x000A323237373700, 0x0014323232323200, 0x001E32323C372D00, 0x0046323C371E3C00, 0x00502832280A3200,
    0x00141E321E003200, 0x0014282D280A6400, 0x0014282D28143C00, 0x00142D2D28143700, 0x001E2D2D28143200, 0x0028282D28143700, 0x00462837280A3700, 0x00461E321E003200,
];

/// Positional bonus in centipawns per `(PieceKind, square)`, White-oriented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceSquareTable {
    values: [[i16; 64]; 7],
}

impl PieceSquareTable {
    /// Unpack one byte per piece kind from each square's word.
    pub const fn from_packed(packed: &[u64; 64]) -> Self {
        let mut values = [[0i16; 64]; 7];
        let mut kind = 1;
        while kind < 7 {
            let mut sq = 0;
            while sq < 64 {
                values[kind][sq] = ((packed[sq] >> (kind * 8)) & 0xff) as i16;
                sq += 1;
            }
            kind += 1;
        }
        PieceSquareTable { values }
    }

    /// Raw White-oriented entry.
    #[inline]
    pub fn get(&self, kind: PieceKind, square: u8) -> i16 {
        if square >= 64 {
            return 0;
        }
        self.values[kind.index()][square as usize]
    }

    /// Bonus for `side`'s piece of `kind` on `square`. Black reads the
    /// table with the rank flipped.
    #[inline]
    pub fn bonus(&self, kind: PieceKind, square: u8, side: Side) -> i32 {
        if square >= 64 {
            return 0;
        }
        let rank = square / 8;
        let file = square % 8;
        let row = match side {
            Side::White => rank,
            Side::Black => 7 - rank,
        };
        i32::from(self.values[kind.index()][(row * 8 + file) as usize])
    }
}

pub static PIECE_SQUARE_TABLE: PieceSquareTable = PieceSquareTable::from_packed(&PACKED_SQUARES);
