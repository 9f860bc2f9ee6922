//! Zobrist hashing for position identification
//!
//! A position hash covers the stones on the board and both capture counters.
//! The side to move is not part of [`ZobristTable::hash`]; the searcher mixes
//! in [`ZobristTable::side_key`] when it probes or stores.
//!
//! # Example
//!
//! ```
//! use gomoku_core::board::{Board, GameState, Pos, Stone};
//! use gomoku_core::search::ZobristTable;
//!
//! let zt = ZobristTable::new();
//! let mut board = Board::new();
//! let state = GameState::default();
//! let before = zt.hash(&board, &state);
//!
//! let pos = Pos::new(9, 9);
//! board.place_stone(pos, Stone::Black);
//! assert_eq!(zt.update_stone(before, pos, Stone::Black), zt.hash(&board, &state));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, GameState, Pos, Stone, TOTAL_CELLS};

/// Fixed seed so hashes are reproducible between runs
const ZOBRIST_SEED: u64 = 12345;

/// Distinct keys per colour for capture counts 0, 2, 4, ...; larger counts
/// share the last key.
const CAPTURE_KEYS: usize = 16;

/// Precomputed random keys for incremental XOR hashing.
pub struct ZobristTable {
    /// Keys for each colour at each cell: [black, white]
    stones: [[u64; TOTAL_CELLS]; 2],
    /// Keys for capture counts: [color][stones / 2]
    captures: [[u64; CAPTURE_KEYS]; 2],
    /// XORed in when black is to move
    black_to_move: u64,
}

impl ZobristTable {
    #[must_use]
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut stones = [[0u64; TOTAL_CELLS]; 2];
        for color in stones.iter_mut() {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }
        let mut captures = [[0u64; CAPTURE_KEYS]; 2];
        for color in captures.iter_mut() {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }
        Self {
            stones,
            captures,
            black_to_move: rng.gen(),
        }
    }

    /// Full hash of board plus capture counters.
    ///
    /// Only needed after a reset or load; during search use the update
    /// functions.
    #[must_use]
    pub fn hash(&self, board: &Board, state: &GameState) -> u64 {
        let mut h = 0u64;
        for pos in board.black.iter_ones() {
            h ^= self.stone_key(pos, Stone::Black);
        }
        for pos in board.white.iter_ones() {
            h ^= self.stone_key(pos, Stone::White);
        }
        h ^= self.capture_key(Stone::Black, state.captured_by_black);
        h ^= self.capture_key(Stone::White, state.captured_by_white);
        h
    }

    #[inline]
    fn stone_key(&self, pos: Pos, stone: Stone) -> u64 {
        stone
            .color_index()
            .map_or(0, |c| self.stones[c][pos.to_index()])
    }

    #[inline]
    fn capture_key(&self, stone: Stone, captured: u32) -> u64 {
        let slot = ((captured / 2) as usize).min(CAPTURE_KEYS - 1);
        stone.color_index().map_or(0, |c| self.captures[c][slot])
    }

    /// Add or remove `stone` at `pos` (XOR is its own inverse)
    #[inline]
    #[must_use]
    pub fn update_stone(&self, hash: u64, pos: Pos, stone: Stone) -> u64 {
        hash ^ self.stone_key(pos, stone)
    }

    /// Swap the capture-count key of `stone` from `old` to `new`
    #[inline]
    #[must_use]
    pub fn update_captures(&self, hash: u64, stone: Stone, old: u32, new: u32) -> u64 {
        hash ^ self.capture_key(stone, old) ^ self.capture_key(stone, new)
    }

    /// Side-to-move component for `stone`
    #[inline]
    pub fn side_key(&self, stone: Stone) -> u64 {
        if stone == Stone::Black {
            self.black_to_move
        } else {
            0
        }
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
