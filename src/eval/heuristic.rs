//! Heuristic evaluation for move ordering and leaf scoring
//!
//! Two entry points:
//! - [`evaluate_move`]: how good a single cell is for one player
//!   (line shapes through it, captures, exposure, centrality).
//! - [`evaluate_board`]: static score of a whole position from one side,
//!   used at the search horizon.

use crate::board::{Board, GameState, Pos, Stone, AXES};
use crate::rules::{capture_threats_as, detect_captures, CAPTURE_WIN_STONES};

use super::patterns::{capture_score, LinePattern, PatternScore};

/// Line shape through a cell on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisScore {
    /// Consecutive stones through the cell, including it
    pub count: usize,
    /// Empty cells directly beyond each end (0..=2)
    pub open_ends: u8,
    /// `None` when the line can never reach five
    pub pattern: Option<LinePattern>,
}

impl AxisScore {
    #[inline]
    pub fn score(&self) -> i64 {
        self.pattern.map_or(0, LinePattern::score)
    }
}

/// Itemised result of [`explain_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub axes: [AxisScore; 4],
    pub captures: i64,
    pub vulnerability: i64,
    pub centrality: i64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i64 {
        self.axes.iter().map(AxisScore::score).sum::<i64>()
            + self.captures
            + self.vulnerability
            + self.centrality
    }
}

/// Scan one axis through `pos`, treating `pos` as holding `stone`.
fn scan_axis(board: &Board, pos: Pos, stone: Stone, (dr, dc): (i32, i32)) -> AxisScore {
    let opponent = stone.opponent();
    let mut count = 1;
    let mut open_ends = 0;
    let mut space = 1;

    for sign in [1, -1] {
        let (dr, dc) = (dr * sign, dc * sign);
        let mut k = 1;
        while let Some(p) = board.step(pos, dr, dc, k) {
            if board.get(p) != stone {
                break;
            }
            count += 1;
            k += 1;
        }
        if board.step(pos, dr, dc, k).is_some_and(|p| board.is_empty(p)) {
            open_ends += 1;
        }
        // room to grow on this side, stopping at the opponent or the edge
        let mut free = 0;
        while free < 4 {
            match board.step(pos, dr, dc, k + free) {
                Some(p) if board.get(p) != opponent => free += 1,
                _ => break,
            }
        }
        space += (k - 1) + free;
    }

    let pattern = if space < 5 {
        None
    } else {
        LinePattern::classify(count, open_ends)
    };
    AxisScore {
        count: count.min(5),
        open_ends,
        pattern,
    }
}

/// Full scoring detail for `stone` at `pos`.
///
/// `pos` may be empty (a candidate) or already hold `stone` (board
/// evaluation); only an empty cell can earn capture credit.
pub fn explain_move(board: &Board, pos: Pos, stone: Stone) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    for (slot, &axis) in breakdown.axes.iter_mut().zip(AXES.iter()) {
        *slot = scan_axis(board, pos, stone, axis);
    }

    let captured = if board.is_empty(pos) {
        detect_captures(board, pos, stone).len()
    } else {
        0
    };
    breakdown.captures = captured as i64 * PatternScore::CAPTURE_STONE;

    if captured == 0 && !capture_threats_as(board, pos, stone).is_empty() {
        breakdown.vulnerability = -PatternScore::VULNERABLE;
    }

    let center = board.center();
    let dist = (pos.row as i64 - center.row as i64).abs()
        + (pos.col as i64 - center.col as i64).abs();
    breakdown.centrality = (board.size() as i64 - dist) * PatternScore::CENTRALITY;

    breakdown
}

/// Heuristic value of `stone` playing at `pos`
#[inline]
pub fn evaluate_move(board: &Board, pos: Pos, stone: Stone) -> i64 {
    explain_move(board, pos, stone).total()
}

/// Static evaluation of the position for `stone`.
///
/// Sums [`evaluate_move`] over the side's own stones and subtracts the
/// opponent's sum scaled by `defense_pct` percent, plus the capture
/// differential. A reached capture threshold short-circuits to
/// `±PatternScore::WIN`.
pub fn evaluate_board(board: &Board, state: &GameState, stone: Stone, defense_pct: i64) -> i64 {
    let opponent = stone.opponent();
    let mine = state.captured(stone);
    let theirs = state.captured(opponent);
    if mine >= CAPTURE_WIN_STONES {
        return PatternScore::WIN;
    }
    if theirs >= CAPTURE_WIN_STONES {
        return -PatternScore::WIN;
    }

    let side_sum = |s: Stone| -> i64 {
        board
            .stones(s)
            .map_or(0, |bb| bb.iter_ones().map(|p| evaluate_move(board, p, s)).sum())
    };

    capture_score(mine, theirs) + side_sum(stone) - side_sum(opponent) * defense_pct / 100
}
