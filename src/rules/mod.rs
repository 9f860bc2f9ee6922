//! Game rules for Gomoku with Ninuki-renju variant
//!
//! This module is the single authority on move legality and game end:
//! - Capture rules (pair capture, see [`capture`])
//! - Forbidden moves: suicide and double-three (see [`forbidden`])
//! - Win conditions: break-aware five-in-a-row and capture win (see [`win`])

pub mod capture;
pub mod forbidden;
pub mod win;

pub use capture::{
    apply_move, capture_threats, capture_threats_as, detect_captures, has_capture, undo_move,
    CaptureRecord,
};
pub use forbidden::{
    check_double_three, count_free_threes, is_suicide_move, validate_move, MoveStatus,
};
pub use win::{
    check_stalemate, check_win, check_win_at, find_five_runs, has_five, is_run_breakable, FiveRun,
};

/// Captured stones (five pairs) that win the game
pub const CAPTURE_WIN_STONES: u32 = 10;
