//! Per-player capture counters

use super::Stone;

/// Stones captured so far by each side.
///
/// Counters are in stones (always even) and only ever grow on forward play.
/// Reaching [`crate::rules::CAPTURE_WIN_STONES`] wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct GameState {
    pub captured_by_black: u32,
    pub captured_by_white: u32,
}

impl GameState {
    pub fn new(captured_by_black: u32, captured_by_white: u32) -> Self {
        Self {
            captured_by_black,
            captured_by_white,
        }
    }

    /// Stones captured by `stone`
    #[inline]
    pub fn captured(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.captured_by_black,
            Stone::White => self.captured_by_white,
            Stone::Empty => 0,
        }
    }

    #[inline]
    pub fn add_captured(&mut self, stone: Stone, stones: u32) {
        match stone {
            Stone::Black => self.captured_by_black += stones,
            Stone::White => self.captured_by_white += stones,
            Stone::Empty => {}
        }
    }
}
