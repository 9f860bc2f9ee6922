//! Position evaluation: shape weights and heuristics

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_board, evaluate_move, explain_move, AxisScore, ScoreBreakdown};
pub use patterns::{capture_score, LinePattern, PatternScore};
