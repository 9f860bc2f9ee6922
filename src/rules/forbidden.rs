//! Forbidden moves and the legality state machine
//!
//! Two kinds of placement are forbidden unless the placement itself captures:
//!
//! - **Suicide**: completing a `O X X O` sandwich of your own pair.
//! - **Double-three**: creating two or more free-threes at once.
//!
//! Both checks read the board as if the stone were already at `pos`, which
//! works without touching the board because a capturing move skips them.

use crate::board::{Board, Pos, Stone, AXES, NEIGHBORS};

use super::capture::has_capture;

/// Outcome of a legality check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    Valid,
    OutOfBounds,
    Occupied,
    Suicide,
    DoubleThree,
}

impl MoveStatus {
    #[inline]
    pub fn is_valid(self) -> bool {
        self == MoveStatus::Valid
    }

    /// Numeric code used across the flat-buffer boundary
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            MoveStatus::Valid => 0,
            MoveStatus::OutOfBounds => 1,
            MoveStatus::Occupied => 2,
            MoveStatus::Suicide => 3,
            MoveStatus::DoubleThree => 4,
        }
    }
}

/// Whether placing `stone` at `pos` would put one of its own pairs between
/// two opponent stones.
pub fn is_suicide_move(board: &Board, pos: Pos, stone: Stone) -> bool {
    let opponent = stone.opponent();
    let at = |k: i32, dr: i32, dc: i32| board.step(pos, dr, dc, k).map(|p| board.get(p));

    NEIGHBORS.iter().any(|&(dr, dc)| {
        // O [pos] X O
        at(1, dr, dc) == Some(stone)
            && at(-1, dr, dc) == Some(opponent)
            && at(2, dr, dc) == Some(opponent)
    })
}

/// Free-three shapes, `P` own stone, `_` empty
const FREE_THREES: [&[u8; 6]; 4] = [b"__PPP_", b"_PPP__", b"_P_PP_", b"_PP_P_"];

const WINDOW: usize = 11;
const CENTER: usize = WINDOW / 2;

/// Cells -5..=5 along one axis with the new stone at the centre.
/// Opponent stones and off-board cells both read as `O`.
fn line_window(board: &Board, pos: Pos, stone: Stone, (dr, dc): (i32, i32)) -> [u8; WINDOW] {
    let mut window = [b'O'; WINDOW];
    for (i, cell) in window.iter_mut().enumerate() {
        let k = i as i32 - CENTER as i32;
        if k == 0 {
            *cell = b'P';
            continue;
        }
        if let Some(p) = board.step(pos, dr, dc, k) {
            *cell = match board.get(p) {
                s if s == stone => b'P',
                Stone::Empty => b'_',
                _ => b'O',
            };
        }
    }
    window
}

/// Whether the axis window holds a free-three that includes the centre cell
fn has_free_three(window: &[u8; WINDOW]) -> bool {
    // every start in 0..=CENTER keeps the centre inside the 6-cell span
    (0..=CENTER).any(|start| {
        FREE_THREES
            .iter()
            .any(|pattern| &window[start..start + 6] == pattern.as_slice())
    })
}

/// Count axes on which placing `stone` at `pos` forms a free-three
pub fn count_free_threes(board: &Board, pos: Pos, stone: Stone) -> usize {
    AXES.iter()
        .filter(|&&axis| has_free_three(&line_window(board, pos, stone, axis)))
        .count()
}

/// Whether placing `stone` at `pos` creates two or more free-threes
#[inline]
pub fn check_double_three(board: &Board, pos: Pos, stone: Stone) -> bool {
    count_free_threes(board, pos, stone) >= 2
}

/// Full legality check for `stone` at `(row, col)`.
///
/// Order: bounds, occupancy, then the capture exemption, suicide and
/// double-three. The board is never modified.
///
/// `stone` must be black or white.
pub fn validate_move(board: &Board, row: i32, col: i32, stone: Stone) -> MoveStatus {
    debug_assert_ne!(stone, Stone::Empty, "legality of an empty stone");
    let Some(pos) = board.pos_at(row, col) else {
        return MoveStatus::OutOfBounds;
    };
    if !board.is_empty(pos) {
        return MoveStatus::Occupied;
    }
    if has_capture(board, pos, stone) {
        return MoveStatus::Valid;
    }
    if is_suicide_move(board, pos, stone) {
        return MoveStatus::Suicide;
    }
    if check_double_three(board, pos, stone) {
        return MoveStatus::DoubleThree;
    }
    MoveStatus::Valid
}
