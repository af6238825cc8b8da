//! Square sets
//!
//! A square set is a 64-bit integer where each bit marks one square,
//! bit 0 representing a1, bit 1 b1, and so on up to bit 63 for h8.
//! It is the occupancy answer the game engine gives for a piece kind and side.

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn from_square(sq: u8) -> Self {
        if sq >= 64 {
            SquareSet::EMPTY
        } else {
            SquareSet(1u64 << sq)
        }
    }

    /// Population count
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over occupied squares, lowest index first.
    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

/// Iterator over the squares of a `SquareSet`
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let sq = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = u8;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}
