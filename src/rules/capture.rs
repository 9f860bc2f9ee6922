//! Capture rules for Ninuki-renju (Pente-style pair capture)
//!
//! Capture pattern: X-O-O-X where X is the capturing player's stone
//! and O is the opponent's stone. Only exactly 2 stones can be captured,
//! every matching direction captures at once, and captures never chain.

use arrayvec::ArrayVec;

use crate::board::{Board, Pos, Stone, NEIGHBORS};

/// Upper bound on stones one placement can remove (8 directions x 2)
pub const MAX_CAPTURED: usize = 16;

/// Opponent stones removed by a single placement.
///
/// Fixed capacity so capture probes inside the search never allocate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureRecord {
    stones: ArrayVec<Pos, MAX_CAPTURED>,
}

impl CaptureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stones captured (always even)
    #[inline]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: &Pos) -> bool {
        self.stones.contains(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pos> {
        self.stones.iter()
    }

    pub fn as_slice(&self) -> &[Pos] {
        &self.stones
    }

    fn push_pair(&mut self, a: Pos, b: Pos) {
        self.stones.push(a);
        self.stones.push(b);
    }
}

/// The flanked pair captured along direction `(dr, dc)` from `pos`, if any.
#[inline]
fn captured_pair(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> Option<(Pos, Pos)> {
    let opponent = stone.opponent();
    let p1 = board.step(pos, dr, dc, 1)?;
    let p2 = board.step(pos, dr, dc, 2)?;
    let p3 = board.step(pos, dr, dc, 3)?;

    (board.get(p1) == opponent && board.get(p2) == opponent && board.get(p3) == stone)
        .then_some((p1, p2))
}

/// Find the stones that would be captured if `stone` is placed at `pos`.
///
/// Pure query: the board is not touched and `pos` itself is not inspected,
/// so it can be asked both before and after the stone is on the board.
pub fn detect_captures(board: &Board, pos: Pos, stone: Stone) -> CaptureRecord {
    let mut record = CaptureRecord::new();
    if stone == Stone::Empty {
        return record;
    }
    for &(dr, dc) in &NEIGHBORS {
        if let Some((a, b)) = captured_pair(board, pos, stone, dr, dc) {
            record.push_pair(a, b);
        }
    }
    record
}

/// Check if a move would result in any captures.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, stone: Stone) -> bool {
    stone != Stone::Empty
        && NEIGHBORS
            .iter()
            .any(|&(dr, dc)| captured_pair(board, pos, stone, dr, dc).is_some())
}

/// Place `stone` at `pos` and remove every pair it captures.
///
/// Returns exactly the stones removed; passing the same record to
/// [`undo_move`] restores the board bit-for-bit. Capture counters are the
/// caller's business.
pub fn apply_move(board: &mut Board, pos: Pos, stone: Stone) -> CaptureRecord {
    let captured = detect_captures(board, pos, stone);
    board.place_stone(pos, stone);
    for &cap in captured.iter() {
        board.remove_stone(cap);
    }
    captured
}

/// Reverse [`apply_move`].
pub fn undo_move(board: &mut Board, pos: Pos, stone: Stone, captured: &CaptureRecord) {
    board.remove_stone(pos);
    let opponent = stone.opponent();
    for &cap in captured.iter() {
        board.place_stone(cap, opponent);
    }
}

/// Empty cells where the opponent of the stone at `pos` could complete a
/// capture of a pair containing `pos`.
///
/// Checks both `[O P P _]` and `[_ P P O]` along all eight directions, so a
/// stone can be threatened along its own line or across it.
#[inline]
pub fn capture_threats(board: &Board, pos: Pos) -> ArrayVec<Pos, 8> {
    capture_threats_as(board, pos, board.get(pos))
}

/// [`capture_threats`] for a `stone` assumed to stand at `pos`, whatever the
/// cell currently holds.
pub fn capture_threats_as(board: &Board, pos: Pos, stone: Stone) -> ArrayVec<Pos, 8> {
    let mut cells = ArrayVec::new();
    if stone == Stone::Empty {
        return cells;
    }
    let opponent = stone.opponent();

    for &(dr, dc) in &NEIGHBORS {
        // pair is (pos, partner); ends are behind pos and beyond partner
        let Some(partner) = board.step(pos, dr, dc, 1) else {
            continue;
        };
        if board.get(partner) != stone {
            continue;
        }
        let (Some(behind), Some(beyond)) = (board.step(pos, dr, dc, -1), board.step(pos, dr, dc, 2))
        else {
            continue;
        };
        let target = match (board.get(behind), board.get(beyond)) {
            (b, Stone::Empty) if b == opponent => beyond,
            (Stone::Empty, b) if b == opponent => behind,
            _ => continue,
        };
        if !cells.contains(&target) {
            cells.push(target);
        }
    }
    cells
}
