//! Fixed-size occupancy set over the 19x19 grid

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = (TOTAL_CELLS + 63) / 64;

/// One bit per cell, 6 x u64 = 384 bits >= 361 cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

#[inline]
fn locate(pos: Pos) -> (usize, u64) {
    let idx = pos.to_index();
    (idx / 64, 1u64 << (idx % 64))
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let (word, mask) = locate(pos);
        self.bits[word] |= mask;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let (word, mask) = locate(pos);
        self.bits[word] &= !mask;
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let (word, mask) = locate(pos);
        self.bits[word] & mask != 0
    }

    /// Number of occupied cells
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Cells set in either board
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut bits = self.bits;
        for (w, o) in bits.iter_mut().zip(other.bits.iter()) {
            *w |= o;
        }
        Bitboard { bits }
    }

    /// Occupied cells in ascending (row-major) order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
        }
    }
}

pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < WORDS {
            let word = &mut self.bits[self.word_idx];
            if *word == 0 {
                self.word_idx += 1;
                continue;
            }
            let idx = self.word_idx * 64 + word.trailing_zeros() as usize;
            *word &= *word - 1;
            // Bits past cell 360 are never set, but guard anyway
            return (idx < TOTAL_CELLS).then(|| Pos::from_index(idx));
        }
        None
    }
}
