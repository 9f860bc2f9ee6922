//! Reversible game position: board, counters, undo log and hash
//!
//! Every placement goes through [`Position::make_move`] and is taken back by
//! [`Position::undo_move`]. The undo log is indexed by ply, so its length is
//! always the number of placements currently applied, real moves included.

use crate::board::{Board, GameState, Pos, Stone};
use crate::rules::{apply_move, undo_move, CaptureRecord};

use super::ZobristTable;

/// One applied placement and everything needed to take it back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub stone: Stone,
    pub captured: CaptureRecord,
    /// Counters immediately before the move
    pub prev_state: GameState,
    prev_hash: u64,
}

pub struct Position {
    board: Board,
    state: GameState,
    history: Vec<MoveRecord>,
    hash: u64,
    zobrist: ZobristTable,
}

impl Position {
    pub fn new(board: Board, state: GameState) -> Self {
        let zobrist = ZobristTable::new();
        let hash = zobrist.hash(&board, &state);
        Self {
            board,
            state,
            history: Vec::with_capacity(64),
            hash,
            zobrist,
        }
    }

    /// Replace the position wholesale, dropping the undo log and
    /// recomputing the hash from scratch.
    pub fn reset(&mut self, board: Board, state: GameState) {
        self.hash = self.zobrist.hash(&board, &state);
        self.board = board;
        self.state = state;
        self.history.clear();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Hash of stones and counters (no side to move)
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Hash with `to_move` mixed in, as used for table lookups
    #[inline]
    pub fn key(&self, to_move: Stone) -> u64 {
        self.hash ^ self.zobrist.side_key(to_move)
    }

    /// Number of placements applied
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Place `stone` at `pos` with capture physics and push an undo record.
    ///
    /// The caller is responsible for legality.
    pub fn make_move(&mut self, pos: Pos, stone: Stone) -> &CaptureRecord {
        let prev_state = self.state;
        let prev_hash = self.hash;

        let captured = apply_move(&mut self.board, pos, stone);
        self.state.add_captured(stone, captured.len() as u32);

        let mut h = self.zobrist.update_stone(self.hash, pos, stone);
        let opponent = stone.opponent();
        for &cap in captured.iter() {
            h = self.zobrist.update_stone(h, cap, opponent);
        }
        self.hash = self.zobrist.update_captures(
            h,
            stone,
            prev_state.captured(stone),
            self.state.captured(stone),
        );

        self.history.push(MoveRecord {
            pos,
            stone,
            captured,
            prev_state,
            prev_hash,
        });
        &self.history[self.history.len() - 1].captured
    }

    /// Take back the most recent placement
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        undo_move(&mut self.board, record.pos, record.stone, &record.captured);
        self.state = record.prev_state;
        self.hash = record.prev_hash;
        Some(record)
    }
}
