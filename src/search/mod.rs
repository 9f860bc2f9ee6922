//! Search module
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - The reversible [`Position`] the search runs on
//! - Candidate generation and move ordering
//! - Alpha-Beta search with iterative deepening

pub mod alphabeta;
pub mod movegen;
pub mod position;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchResult, SearchStats, Searcher, WIN_SCORE};
pub use movegen::{generate_candidates, order_moves, Move, Provenance, CANDIDATE_RADIUS};
pub use position::{MoveRecord, Position};
pub use tt::{Bound, Probe, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
