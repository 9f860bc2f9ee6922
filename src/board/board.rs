//! Board grid backed by one bitboard per colour

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// N x N grid of stones. Capture counters live in [`super::GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
    size: u8,
}

impl Board {
    /// Standard 19x19 board
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            size: BOARD_SIZE as u8,
        }
    }

    /// Board of side `size`, which must lie in `5..=19`
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=BOARD_SIZE).contains(&size) {
            return Err(ConfigError::BoardSize(size));
        }
        Ok(Self {
            size: size as u8,
            ..Self::new()
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether `pos` lies inside this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    #[inline]
    pub fn is_on_board(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    /// Checked conversion from signed coordinates
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        self.is_on_board(row, col)
            .then(|| Pos::new(row as u8, col as u8))
    }

    /// The cell `k` steps from `pos` along `(dr, dc)`, if still on this board
    #[inline]
    pub fn step(&self, pos: Pos, dr: i32, dc: i32, k: i32) -> Option<Pos> {
        self.pos_at(pos.row as i32 + dr * k, pos.col as i32 + dc * k)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Occupant of `(row, col)`; off-board cells read as empty
    #[inline]
    pub fn player_at(&self, row: i32, col: i32) -> Stone {
        self.pos_at(row, col).map_or(Stone::Empty, |p| self.get(p))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// True only for on-board, unoccupied cells
    #[inline]
    pub fn is_empty_cell(&self, row: i32, col: i32) -> bool {
        self.pos_at(row, col).is_some_and(|p| self.is_empty(p))
    }

    /// Place a stone without any capture processing
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.contains(pos));
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => self.remove_stone(pos),
        }
    }

    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Centre cell (`N / 2` on both axes)
    #[inline]
    pub fn center(&self) -> Pos {
        let c = self.size / 2;
        Pos::new(c, c)
    }

    /// Every on-board cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        let n = self.size;
        (0..n).flat_map(move |r| (0..n).map(move |c| Pos::new(r, c)))
    }

    /// Row-major cell codes (0 empty, 1 black, 2 white)
    pub fn to_codes(&self) -> Vec<u8> {
        self.cells().map(|p| self.get(p).code()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
