//! Alpha-Beta search with iterative deepening and transposition table
//!
//! Negamax over a reversible [`Position`]: every child is reached with
//! `make_move` and left with `undo_move`, so the board is shared by the whole
//! tree. Widths are tight (a handful of ordered candidates per node), which
//! is what lets the search reach depth 10 on a 19x19 board.
//!
//! # Features
//!
//! - Iterative deepening; an iteration cut short by the budget is thrown
//!   away and the previous one's move is kept
//! - Transposition table with exact/lower/upper bounds
//! - Break-aware win detection at every node
//! - Node and wall-clock budgets, checked every 1024 nodes
//!
//! # Example
//!
//! ```
//! use gomoku_core::board::{Board, GameState, Pos, Stone};
//! use gomoku_core::config::EngineConfig;
//! use gomoku_core::search::{Position, Searcher};
//!
//! let config = EngineConfig::default().max_depth(2).time_limit(None);
//! let mut searcher = Searcher::new(&config);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(9, 9), Stone::Black);
//! let mut position = Position::new(board, GameState::default());
//!
//! let result = searcher.search_depth(&mut position, Stone::White, 2);
//! assert!(result.best_move.is_some());
//! ```

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Pos, Stone};
use crate::config::EngineConfig;
use crate::eval::{evaluate_board, PatternScore};
use crate::rules::{check_win_at, has_five, CAPTURE_WIN_STONES};

use super::movegen::{generate_candidates, order_moves, Move, Provenance};
use super::{Bound, Position, TTStats, TranspositionTable};

/// Score of a decided game, before the depth bonus
pub const WIN_SCORE: i64 = PatternScore::WIN;

/// Infinity score for alpha-beta bounds
const INF: i64 = WIN_SCORE * 10;

const BUDGET_CHECK_INTERVAL: u64 = 1024;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total beta cutoffs (fail-high)
    pub beta_cutoffs: u64,
    /// Beta cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score
    pub tt_score_hits: u64,
    /// TT probes that provided a best move for ordering
    pub tt_move_hits: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }

    /// TT score hit rate in percent
    pub fn tt_score_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_score_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move from the mover's point of view
    pub score: i64,
    /// Deepest completed iteration (0 if none completed)
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    pub stats: SearchStats,
    /// Root candidates, best first, scored by the last completed iteration
    pub root_moves: Vec<Move>,
}

impl SearchResult {
    /// Whether the score is a proven win for the mover
    #[inline]
    pub fn is_win(&self) -> bool {
        self.score >= WIN_SCORE
    }
}

/// Negamax searcher owning the transposition table
pub struct Searcher {
    config: EngineConfig,
    tt: TranspositionTable,
    rng: Option<SmallRng>,
    nodes: u64,
    stats: SearchStats,
    start: Instant,
    stopped: bool,
}

impl Searcher {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            config: config.clone(),
            tt: TranspositionTable::new(config.tt_size_mb),
            rng: config.tie_break_seed.map(SmallRng::seed_from_u64),
            nodes: 0,
            stats: SearchStats::default(),
            start: Instant::now(),
            stopped: false,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Forget all cached results and restart the tie-break sequence
    pub fn clear(&mut self) {
        self.tt.clear();
        self.rng = self.config.tie_break_seed.map(SmallRng::seed_from_u64);
    }

    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Order `candidates` for the root and cut them to the root width
    pub fn root_moves(&mut self, position: &Position, stone: Stone, candidates: &[Pos]) -> Vec<Move> {
        let tt_move = if self.config.use_tt {
            self.tt.get_best_move(position.key(stone))
        } else {
            None
        };
        let mut moves = order_moves(
            position.board(),
            stone,
            candidates,
            self.config.ordering_defense_pct,
            tt_move,
            self.rng.as_mut(),
        );
        moves.truncate(self.config.root_width);
        moves
    }

    /// Iterative deepening from depth 1 to `max_depth` over `candidates`.
    ///
    /// Returns the move of the deepest completed iteration, or the best
    /// ordered candidate if not even depth 1 finished inside the budget.
    pub fn search(&mut self, position: &mut Position, stone: Stone, candidates: &[Pos]) -> SearchResult {
        let max_depth = self.config.max_depth;
        self.run(position, stone, candidates, 1..=max_depth)
    }

    /// A single iteration at exactly `depth` over all generated candidates
    pub fn search_depth(&mut self, position: &mut Position, stone: Stone, depth: u8) -> SearchResult {
        let candidates = generate_candidates(position.board(), stone);
        self.run(position, stone, &candidates, depth..=depth)
    }

    fn run(
        &mut self,
        position: &mut Position,
        stone: Stone,
        candidates: &[Pos],
        depths: std::ops::RangeInclusive<u8>,
    ) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();
        self.start = Instant::now();
        self.stopped = false;

        let mut root = self.root_moves(position, stone, candidates);
        let mut result = SearchResult {
            best_move: root.first().map(|m| m.pos),
            score: root.first().map_or(0, |m| m.score),
            depth: 0,
            nodes: 0,
            stats: SearchStats::default(),
            root_moves: Vec::new(),
        };
        if root.is_empty() {
            return result;
        }

        for depth in depths {
            let Some((score, best)) = self.search_root(position, stone, &mut root, depth as i32)
            else {
                log::trace!("depth {} aborted after {} nodes", depth, self.nodes);
                break;
            };
            result.best_move = Some(best);
            result.score = score;
            result.depth = depth;

            // keep the best move first for the next iteration
            root.sort_by(|a, b| b.score.cmp(&a.score));

            log::trace!(
                "depth {} best {} score {} nodes {} ({:.0?})",
                depth,
                best,
                score,
                self.nodes,
                self.start.elapsed()
            );
            if score.abs() >= WIN_SCORE {
                break;
            }
        }

        result.nodes = self.nodes;
        result.stats = self.stats.clone();
        result.root_moves = root;
        result
    }

    fn budget_exhausted(&self) -> bool {
        self.config
            .time_limit
            .is_some_and(|limit| self.start.elapsed() >= limit)
            || self.config.node_limit.is_some_and(|limit| self.nodes >= limit)
    }

    /// One full-window pass over the root moves. `None` if the budget ran out.
    fn search_root(
        &mut self,
        position: &mut Position,
        stone: Stone,
        root: &mut [Move],
        depth: i32,
    ) -> Option<(i64, Pos)> {
        let mut alpha = -INF;
        let beta = INF;
        let mut best: Option<(i64, Pos)> = None;
        let mut scores = Vec::with_capacity(root.len());

        for mv in root.iter() {
            position.make_move(mv.pos, stone);
            let score = -self.negamax(position, stone.opponent(), depth - 1, -beta, -alpha);
            position.undo_move();
            if self.stopped {
                return None;
            }
            scores.push(score);
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, mv.pos));
            }
            alpha = alpha.max(score);
        }

        for (mv, score) in root.iter_mut().zip(scores) {
            mv.score = score;
            mv.provenance = Provenance::Searched;
        }
        if let Some((score, pos)) = best {
            if self.config.use_tt {
                self.tt
                    .store(position.key(stone), depth, score, Bound::Exact, Some(pos));
            }
        }
        best
    }

    /// Score of a finished game from `stone`'s point of view, where `stone`
    /// is about to move.
    ///
    /// The opponent just moved: a capture total or unbreakable five on that
    /// move loses. A five of our own that the opponent failed to break wins.
    /// Faster results score higher through the remaining `depth`.
    pub(crate) fn terminal_score(&self, position: &Position, stone: Stone, depth: i32) -> Option<i64> {
        let them = stone.opponent();
        let board = position.board();
        let state = position.state();

        let they_won = state.captured(them) >= CAPTURE_WIN_STONES
            || position
                .last_move()
                .is_some_and(|m| m.stone == them && check_win_at(board, m.pos, them, state.captured(them)));
        if they_won {
            return Some(-(WIN_SCORE + depth as i64));
        }
        if state.captured(stone) >= CAPTURE_WIN_STONES || has_five(board, stone) {
            return Some(WIN_SCORE + depth as i64);
        }
        None
    }

    /// Ordered, width-limited children of the current node
    pub(crate) fn children(
        &mut self,
        position: &Position,
        stone: Stone,
        depth: i32,
        tt_move: Option<Pos>,
    ) -> Vec<Move> {
        let board = position.board();
        let candidates = generate_candidates(board, stone);
        let mut moves = order_moves(
            board,
            stone,
            &candidates,
            self.config.ordering_defense_pct,
            tt_move,
            self.rng.as_mut(),
        );
        let width = if depth > self.config.deep_threshold as i32 {
            self.config.deep_width
        } else {
            self.config.shallow_width
        };
        moves.truncate(width);
        moves
    }

    #[inline]
    pub(crate) fn static_eval(&self, position: &Position, stone: Stone) -> i64 {
        evaluate_board(
            position.board(),
            position.state(),
            stone,
            self.config.board_defense_pct,
        )
    }

    fn negamax(
        &mut self,
        position: &mut Position,
        stone: Stone,
        depth: i32,
        mut alpha: i64,
        beta: i64,
    ) -> i64 {
        self.nodes += 1;
        if self.nodes % BUDGET_CHECK_INTERVAL == 0 && self.budget_exhausted() {
            self.stopped = true;
        }
        if self.stopped {
            return 0;
        }

        if let Some(score) = self.terminal_score(position, stone, depth) {
            return score;
        }
        if depth <= 0 {
            return self.static_eval(position, stone);
        }

        let key = position.key(stone);
        let mut tt_move = None;
        if self.config.use_tt {
            self.stats.tt_probes += 1;
            if let Some(probe) = self.tt.probe(key, depth, alpha, beta) {
                if let Some(score) = probe.score {
                    self.stats.tt_score_hits += 1;
                    return score;
                }
                if probe.best_move.is_some() {
                    self.stats.tt_move_hits += 1;
                }
                tt_move = probe.best_move;
            }
        }

        let children = self.children(position, stone, depth, tt_move);
        if children.is_empty() {
            // no legal move: stalemate scores as a draw
            return 0;
        }

        let alpha_orig = alpha;
        let mut best_score = -INF;
        let mut best_move = None;

        for (i, mv) in children.iter().enumerate() {
            position.make_move(mv.pos, stone);
            let score = -self.negamax(position, stone.opponent(), depth - 1, -beta, -alpha);
            position.undo_move();
            if self.stopped {
                return 0;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(mv.pos);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        if self.config.use_tt {
            let bound = if best_score <= alpha_orig {
                Bound::Upper
            } else if best_score >= beta {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.tt.store(key, depth, best_score, bound, best_move);
        }
        best_score
    }
}
