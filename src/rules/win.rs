//! Win and stalemate detection
//!
//! A player wins by capturing [`CAPTURE_WIN_STONES`] stones, or by owning a
//! line of five or more that the opponent cannot break with a single legal
//! capture. Overlines count as fives.

use crate::board::{Board, Pos, Stone, AXES};

use super::capture::{capture_threats, detect_captures};
use super::forbidden::{validate_move, MoveStatus};
use super::CAPTURE_WIN_STONES;

/// A maximal run of five or more stones along one axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiveRun {
    pub stone: Stone,
    /// Cells of the run in order along `dir`
    pub cells: Vec<Pos>,
    pub dir: (i32, i32),
}

impl FiveRun {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Longest contiguous piece of the run left after removing `gone`
    fn longest_remaining(&self, gone: impl Fn(&Pos) -> bool) -> usize {
        let mut best = 0;
        let mut current = 0;
        for cell in &self.cells {
            if gone(cell) {
                current = 0;
            } else {
                current += 1;
                best = best.max(current);
            }
        }
        best
    }
}

/// The full run through `pos` along `dir` if it is at least five long
fn run_through(board: &Board, pos: Pos, stone: Stone, dir: (i32, i32)) -> Option<FiveRun> {
    let (dr, dc) = dir;
    let mut start = pos;
    while let Some(prev) = board.step(start, dr, dc, -1) {
        if board.get(prev) != stone {
            break;
        }
        start = prev;
    }
    let mut cells = vec![start];
    let mut cur = start;
    while let Some(next) = board.step(cur, dr, dc, 1) {
        if board.get(next) != stone {
            break;
        }
        cells.push(next);
        cur = next;
    }
    (cells.len() >= 5).then(|| FiveRun { stone, cells, dir })
}

/// Every run of five or more belonging to `stone`
pub fn find_five_runs(board: &Board, stone: Stone) -> Vec<FiveRun> {
    let Some(stones) = board.stones(stone) else {
        return Vec::new();
    };
    let mut runs = Vec::new();
    for pos in stones.iter_ones() {
        for &(dr, dc) in &AXES {
            // only start scanning at the first stone of a run
            let continues = board
                .step(pos, dr, dc, -1)
                .is_some_and(|prev| board.get(prev) == stone);
            if continues {
                continue;
            }
            if let Some(run) = run_through(board, pos, stone, (dr, dc)) {
                runs.push(run);
            }
        }
    }
    runs
}

/// Whether `stone` has any five on the board, breakable or not
pub fn has_five(board: &Board, stone: Stone) -> bool {
    !find_five_runs(board, stone).is_empty()
}

/// Whether the opponent can break `run` with one legal capture.
///
/// Each capture move is tried on its own: the run is broken when the
/// stones that move removes leave no contiguous piece of five.
pub fn is_run_breakable(board: &Board, run: &FiveRun) -> bool {
    let opponent = run.stone.opponent();
    let mut tried: Vec<Pos> = Vec::new();

    for &cell in &run.cells {
        for target in capture_threats(board, cell) {
            if tried.contains(&target) {
                continue;
            }
            tried.push(target);
            let status = validate_move(board, target.row as i32, target.col as i32, opponent);
            if status != MoveStatus::Valid {
                continue;
            }
            let captured = detect_captures(board, target, opponent);
            if run.longest_remaining(|p| captured.contains(p)) < 5 {
                return true;
            }
        }
    }
    false
}

/// Whether `stone` has won: capture total reached, or an unbreakable five.
pub fn check_win(board: &Board, stone: Stone, captured: u32) -> bool {
    if captured >= CAPTURE_WIN_STONES {
        return true;
    }
    find_five_runs(board, stone)
        .iter()
        .any(|run| !is_run_breakable(board, run))
}

/// Like [`check_win`], but only looks at lines through `pos`.
///
/// Cheaper after a move, when only the placed stone can have made a five.
pub fn check_win_at(board: &Board, pos: Pos, stone: Stone, captured: u32) -> bool {
    if captured >= CAPTURE_WIN_STONES {
        return true;
    }
    if board.get(pos) != stone {
        return false;
    }
    AXES.iter()
        .filter_map(|&dir| run_through(board, pos, stone, dir))
        .any(|run| !is_run_breakable(board, &run))
}

/// True when `stone` has no legal move anywhere on the board.
///
/// `stone` must be black or white.
pub fn check_stalemate(board: &Board, stone: Stone) -> bool {
    debug_assert_ne!(stone, Stone::Empty, "stalemate of an empty stone");
    !board.cells().any(|p| {
        board.is_empty(p) && validate_move(board, p.row as i32, p.col as i32, stone).is_valid()
    })
}
