//! Bitboard implementation for stone sets

use super::MAX_CELLS;

const WORDS: usize = MAX_CELLS.div_ceil(64);

/// One bit per cell, indexed row-major by the owning board.
/// 10 x u64 covers the largest board (625 cells <= 640 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Set the bit at a cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Check if the bit at a cell index is set
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < MAX_CELLS);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.current_word &= self.current_word - 1;

        Some(self.word_idx * 64 + bit_pos)
    }
}
