//! Engine settings
//!
//! Built with chained setters on top of [`Default`]:
//!
//! ```
//! use gomoku_core::config::EngineConfig;
//!
//! let config = EngineConfig::default().max_depth(4).time_limit(None).node_limit(Some(20_000));
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use crate::board::{BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub board_size: usize,
    /// Deepest iterative-deepening iteration
    pub max_depth: u8,
    /// Wall-clock budget per decision; `None` for no limit
    pub time_limit: Option<Duration>,
    /// Node budget per decision; `None` for no limit
    pub node_limit: Option<u64>,
    pub tt_size_mb: usize,
    pub use_tt: bool,
    /// Candidates searched at the root
    pub root_width: usize,
    /// Candidates searched at interior nodes with more than
    /// `deep_threshold` plies remaining
    pub deep_width: usize,
    /// Candidates searched at the remaining interior nodes
    pub shallow_width: usize,
    pub deep_threshold: u8,
    /// Weight of the opponent's view of a cell when ordering moves, percent
    pub ordering_defense_pct: i64,
    /// Weight of the opponent's stones in static evaluation, percent
    pub board_defense_pct: i64,
    /// Seeds a shuffle that breaks ordering ties; `None` keeps generation order
    pub tie_break_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_size: BOARD_SIZE,
            max_depth: 10,
            time_limit: Some(Duration::from_millis(500)),
            node_limit: None,
            tt_size_mb: 16,
            use_tt: true,
            root_width: 6,
            deep_width: 4,
            shallow_width: 6,
            deep_threshold: 3,
            ordering_defense_pct: 110,
            board_defense_pct: 120,
            tie_break_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn node_limit(mut self, node_limit: Option<u64>) -> Self {
        self.node_limit = node_limit;
        self
    }

    pub fn tt_size_mb(mut self, tt_size_mb: usize) -> Self {
        self.tt_size_mb = tt_size_mb;
        self
    }

    pub fn use_tt(mut self, use_tt: bool) -> Self {
        self.use_tt = use_tt;
        self
    }

    /// Set root, deep and shallow widths at once
    pub fn widths(mut self, root: usize, deep: usize, shallow: usize) -> Self {
        self.root_width = root;
        self.deep_width = deep;
        self.shallow_width = shallow;
        self
    }

    pub fn deep_threshold(mut self, deep_threshold: u8) -> Self {
        self.deep_threshold = deep_threshold;
        self
    }

    pub fn defense_weights(mut self, ordering_pct: i64, board_pct: i64) -> Self {
        self.ordering_defense_pct = ordering_pct;
        self.board_defense_pct = board_pct;
        self
    }

    pub fn tie_break_seed(mut self, seed: Option<u64>) -> Self {
        self.tie_break_seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.tt_size_mb == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        for (name, width) in [
            ("root", self.root_width),
            ("deep", self.deep_width),
            ("shallow", self.shallow_width),
        ] {
            if width == 0 {
                return Err(ConfigError::ZeroWidth(name));
            }
        }
        Ok(())
    }
}
