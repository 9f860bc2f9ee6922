//! Gomoku AI core with Ninuki-renju rules
//!
//! A rules arbiter and alpha-beta engine for the Ninuki-renju variant:
//! - Square board from 5x5 up to the standard 19x19
//! - 5-in-a-row wins (overlines allowed) unless a capture can break it
//! - Capture win: 10 captured stones (5 pairs)
//! - Pair capture rule: X-O-O-X pattern captures the O-O pair
//! - Moving into a capture pattern is allowed and captures nothing
//! - Double-three is forbidden for both colours unless the move captures
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards and capture counters
//! - [`rules`]: Captures, forbidden moves, win and stalemate detection
//! - [`eval`]: Pattern scores and position evaluation
//! - [`search`]: Candidates, Zobrist hashing, transposition table, alpha-beta
//! - [`engine`]: The [`AIEngine`] facade owning one game
//! - [`bridge`]: Flat integer buffers for hosts that cannot take Rust types
//! - [`notation`]: Text diagrams for positions
//!
//! # Quick Start
//!
//! ```
//! use gomoku_core::{AIEngine, EngineConfig, MoveStatus, Stone};
//!
//! let config = EngineConfig::default().max_depth(4).time_limit(None);
//! let mut engine = AIEngine::new(Stone::White, config).unwrap();
//!
//! engine.apply_external_move(9, 9, Stone::Black).unwrap();
//! assert_eq!(engine.query_move_legality(9, 9, Stone::White), MoveStatus::Occupied);
//!
//! if let Some(pos) = engine.compute_best_move() {
//!     engine.apply_external_move(pos.row as i32, pos.col as i32, Stone::White).unwrap();
//!     println!("AI plays at {}", pos);
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Fixed opening replies for the first two stones
//! 2. Immediate winning move
//! 3. Block of a cell where the opponent wins next move
//! 4. Iterative-deepening alpha-beta with a transposition table

pub mod board;
pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod notation;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GameState, Pos, Stone, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, EngineError, NotationError};
pub use notation::Diagram;
pub use rules::{CaptureRecord, MoveStatus};
pub use search::{Move, Provenance};
