//! Candidate generation and move ordering
//!
//! Candidates are the empty cells within [`CANDIDATE_RADIUS`] of any stone
//! that pass the full legality check. Ordering scores each cell for the
//! mover plus a weighted share of its value to the opponent, so strong
//! blocking points rank next to strong attacking ones.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::board::{Bitboard, Board, Pos, Stone};
use crate::eval::evaluate_move;
use crate::rules::validate_move;

/// Chebyshev distance from existing stones that a candidate may lie at
pub const CANDIDATE_RADIUS: i32 = 2;

/// Where a move's score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Static ordering score only
    Heuristic,
    /// Score from a completed search
    Searched,
    /// Immediate win or forced block
    Forced,
}

impl Provenance {
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Provenance::Heuristic => 0,
            Provenance::Searched => 1,
            Provenance::Forced => 2,
        }
    }
}

/// A candidate placement with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub score: i64,
    pub provenance: Provenance,
}

#[inline]
fn is_legal(board: &Board, pos: Pos, stone: Stone) -> bool {
    validate_move(board, pos.row as i32, pos.col as i32, stone).is_valid()
}

/// Legal cells near existing stones, in row-major order.
///
/// An empty board yields the centre. When nothing near the stones is legal
/// the centre is tried, then every cell in row-major order; an empty result
/// means `stone` has no legal move at all.
pub fn generate_candidates(board: &Board, stone: Stone) -> Vec<Pos> {
    let center = board.center();
    if board.is_board_empty() {
        return vec![center];
    }

    let mut near = Bitboard::new();
    for pos in board.occupied().iter_ones() {
        for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                if let Some(p) = board.step(pos, dr, dc, 1) {
                    if board.is_empty(p) {
                        near.set(p);
                    }
                }
            }
        }
    }

    let moves: Vec<Pos> = near.iter_ones().filter(|&p| is_legal(board, p, stone)).collect();
    if !moves.is_empty() {
        return moves;
    }

    if board.is_empty(center) && is_legal(board, center, stone) {
        return vec![center];
    }
    board
        .cells()
        .find(|&p| board.is_empty(p) && is_legal(board, p, stone))
        .into_iter()
        .collect()
}

/// Ordering score: own value plus the opponent's value scaled by
/// `defense_pct` percent
#[inline]
pub fn score_candidate(board: &Board, pos: Pos, stone: Stone, defense_pct: i64) -> i64 {
    evaluate_move(board, pos, stone) + evaluate_move(board, pos, stone.opponent()) * defense_pct / 100
}

/// Score and sort `candidates` best first.
///
/// The sort is stable, so ties keep generation order unless `rng` shuffles
/// them first. `tt_move`, when among the candidates, is moved to the front.
pub fn order_moves(
    board: &Board,
    stone: Stone,
    candidates: &[Pos],
    defense_pct: i64,
    tt_move: Option<Pos>,
    rng: Option<&mut SmallRng>,
) -> Vec<Move> {
    let mut moves: Vec<Move> = candidates
        .iter()
        .map(|&pos| Move {
            pos,
            score: score_candidate(board, pos, stone, defense_pct),
            provenance: Provenance::Heuristic,
        })
        .collect();

    if let Some(rng) = rng {
        moves.shuffle(rng);
    }
    moves.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(tt) = tt_move {
        if let Some(idx) = moves.iter().position(|m| m.pos == tt) {
            let m = moves.remove(idx);
            moves.insert(0, m);
        }
    }
    moves
}
