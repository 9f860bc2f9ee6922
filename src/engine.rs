//! Main AI Engine: the external face of the crate
//!
//! An [`AIEngine`] owns the board, capture counters, undo log and
//! transposition table for one game. The host pushes state in
//! ([`AIEngine::load_board`], [`AIEngine::apply_external_move`]), asks for a
//! decision ([`AIEngine::compute_best_move`]) and may query the rules
//! without changing anything.
//!
//! A decision follows this priority:
//!
//! 1. **Opening**: empty board or a single stone, answered without search
//! 2. **Immediate win**: a candidate that wins on the spot
//! 3. **Forced block**: a cell where the opponent would win next move
//! 4. **Alpha-Beta**: iterative-deepening negamax over the best candidates
//!
//! # Example
//!
//! ```
//! use gomoku_core::{AIEngine, EngineConfig, Stone};
//!
//! let config = EngineConfig::default().max_depth(3).time_limit(None);
//! let mut engine = AIEngine::new(Stone::White, config).unwrap();
//! engine.apply_external_move(9, 9, Stone::Black).unwrap();
//!
//! let result = engine.compute_best_move_with_stats();
//! println!("Best move: {:?} via {:?}", result.best_move, result.search_type);
//! ```

use std::time::Instant;

use crate::board::{Board, GameState, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::eval::explain_move;
use crate::rules::{
    check_stalemate, check_win, check_win_at, detect_captures, validate_move, CaptureRecord,
    MoveStatus,
};
use crate::search::{
    generate_candidates, Move, MoveRecord, Position, Provenance, Searcher, TTStats, WIN_SCORE,
};

/// Which phase of the decision produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board or single stone
    Opening,
    /// Five-in-a-row or capture win on this move
    ImmediateWin,
    /// Blocks a cell where the opponent would win
    ForcedBlock,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// No legal move exists
    NoMove,
}

/// Result of a decision with search statistics
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move; `None` means no legal move (stalemate)
    pub best_move: Option<Pos>,
    pub score: i64,
    pub search_type: SearchType,
    /// Deepest completed iteration, 0 when no search ran
    pub depth: u8,
    pub time_ms: u64,
    pub nodes: u64,
}

impl MoveResult {
    fn unsearched(best_move: Option<Pos>, score: i64, search_type: SearchType, start: Instant) -> Self {
        Self {
            best_move,
            score,
            search_type,
            depth: 0,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: 0,
        }
    }
}

/// Move engine for one game and one side
pub struct AIEngine {
    side: Stone,
    config: EngineConfig,
    /// Empty board of the configured size
    blank: Board,
    position: Position,
    searcher: Searcher,
    /// Root candidates behind the last decision
    last_candidates: Vec<Move>,
}

impl AIEngine {
    /// Create an engine playing `side` on an empty board.
    ///
    /// Fails if `side` is [`Stone::Empty`] or the configuration is invalid.
    pub fn new(side: Stone, config: EngineConfig) -> Result<Self, EngineError> {
        if side == Stone::Empty {
            return Err(EngineError::InvalidSide(side));
        }
        config.validate()?;
        let blank = Board::with_size(config.board_size)?;

        log::info!(
            "engine initialized: {:?} on {}x{}, depth {}, tt {} MB",
            side,
            config.board_size,
            config.board_size,
            config.max_depth,
            config.tt_size_mb
        );
        Ok(Self {
            side,
            position: Position::new(blank.clone(), GameState::default()),
            searcher: Searcher::new(&config),
            blank,
            config,
            last_candidates: Vec::new(),
        })
    }

    /// Start a new game playing `side`
    pub fn initialize(&mut self, side: Stone) -> Result<(), EngineError> {
        if side == Stone::Empty {
            return Err(EngineError::InvalidSide(side));
        }
        self.side = side;
        self.reset_board();
        log::info!("engine reinitialized as {:?}", side);
        Ok(())
    }

    /// Clear the board, counters, undo log and transposition table
    pub fn reset_board(&mut self) {
        self.position.reset(self.blank.clone(), GameState::default());
        self.searcher.clear();
        self.last_candidates.clear();
        log::debug!("board reset");
    }

    /// Replace the position with a row-major array of cell codes
    /// (0 empty, 1 black, 2 white) and capture counts in stones.
    ///
    /// The undo log starts empty and the hash is rebuilt from scratch.
    pub fn load_board(
        &mut self,
        cells: &[u8],
        captured_by_black: u32,
        captured_by_white: u32,
    ) -> Result<(), EngineError> {
        let n = self.blank.size();
        if cells.len() != n * n {
            return Err(EngineError::BoardLength {
                expected: n * n,
                actual: cells.len(),
            });
        }
        for count in [captured_by_black, captured_by_white] {
            if count % 2 != 0 {
                return Err(EngineError::InvalidCaptureCount(count));
            }
        }

        let mut board = self.blank.clone();
        for (index, (&code, pos)) in cells.iter().zip(self.blank.cells()).enumerate() {
            let stone = Stone::from_code(code).ok_or(EngineError::InvalidCell { index, code })?;
            if stone != Stone::Empty {
                board.place_stone(pos, stone);
            }
        }

        log::info!(
            "loaded board: {} stones, captures {}/{}",
            board.stone_count(),
            captured_by_black,
            captured_by_white
        );
        self.position
            .reset(board, GameState::new(captured_by_black, captured_by_white));
        self.last_candidates.clear();
        Ok(())
    }

    /// Play a move made outside the engine (usually the opponent's).
    ///
    /// Captures are applied and counted. Legality beyond bounds and
    /// occupancy is the caller's responsibility.
    pub fn apply_external_move(
        &mut self,
        row: i32,
        col: i32,
        player: Stone,
    ) -> Result<CaptureRecord, EngineError> {
        if player == Stone::Empty {
            return Err(EngineError::InvalidSide(player));
        }
        let pos = self
            .position
            .board()
            .pos_at(row, col)
            .ok_or(EngineError::OutOfBounds { row, col })?;
        if !self.position.board().is_empty(pos) {
            return Err(EngineError::Occupied { row, col });
        }
        let captured = self.position.make_move(pos, player).clone();
        log::debug!("{:?} plays {}, captures {}", player, pos, captured.len());
        Ok(captured)
    }

    /// Take back the most recent move
    pub fn undo_last_move(&mut self) -> Result<MoveRecord, EngineError> {
        self.position.undo_move().ok_or(EngineError::NothingToUndo)
    }

    /// Best move for the engine's side; `None` means no legal move.
    ///
    /// The board is left exactly as it was.
    pub fn compute_best_move(&mut self) -> Option<Pos> {
        self.compute_best_move_with_stats().best_move
    }

    /// [`Self::compute_best_move`] with the phase, score and search effort
    pub fn compute_best_move_with_stats(&mut self) -> MoveResult {
        let start = Instant::now();
        let side = self.side;

        if let Some(pos) = self.opening_move() {
            log::debug!("opening move {}", pos);
            self.last_candidates = vec![Move {
                pos,
                score: 0,
                provenance: Provenance::Heuristic,
            }];
            return MoveResult::unsearched(Some(pos), 0, SearchType::Opening, start);
        }

        let candidates = generate_candidates(self.position.board(), side);
        if candidates.is_empty() {
            log::debug!("no legal move for {:?}", side);
            self.last_candidates.clear();
            return MoveResult::unsearched(None, 0, SearchType::NoMove, start);
        }

        if let Some(pos) = self.find_immediate_win(&candidates) {
            log::debug!("immediate win at {}", pos);
            self.last_candidates = vec![Move {
                pos,
                score: WIN_SCORE,
                provenance: Provenance::Forced,
            }];
            return MoveResult::unsearched(Some(pos), WIN_SCORE, SearchType::ImmediateWin, start);
        }

        if let Some(pos) = self.find_forced_block(&candidates) {
            log::debug!("forced block at {}", pos);
            self.last_candidates = vec![Move {
                pos,
                score: 0,
                provenance: Provenance::Forced,
            }];
            return MoveResult::unsearched(Some(pos), 0, SearchType::ForcedBlock, start);
        }

        let result = self.searcher.search(&mut self.position, side, &candidates);
        let time_ms = start.elapsed().as_millis() as u64;
        log::debug!(
            "search chose {:?}: score {}, depth {}, {} nodes, {} ms, first-move cutoffs {:.0}%",
            result.best_move,
            result.score,
            result.depth,
            result.nodes,
            time_ms,
            result.stats.first_move_rate()
        );
        if let Some(pos) = result.best_move {
            if log::log_enabled!(log::Level::Debug) {
                log::debug!("{} breakdown: {:?}", pos, explain_move(self.position.board(), pos, side));
            }
        }
        self.last_candidates = result.root_moves;
        MoveResult {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }

    /// Centre on an empty board; centre or its right neighbour against a
    /// single stone.
    fn opening_move(&self) -> Option<Pos> {
        let board = self.position.board();
        let center = board.center();
        match board.stone_count() {
            0 => Some(center),
            1 if board.is_empty(center) => Some(center),
            1 => board.step(center, 0, 1, 1),
            _ => None,
        }
    }

    /// Whether `stone` at `pos` wins immediately, by five or by captures
    fn wins_at(&mut self, pos: Pos, stone: Stone) -> bool {
        self.position.make_move(pos, stone);
        let won = check_win_at(
            self.position.board(),
            pos,
            stone,
            self.position.state().captured(stone),
        );
        self.position.undo_move();
        won
    }

    fn find_immediate_win(&mut self, candidates: &[Pos]) -> Option<Pos> {
        let side = self.side;
        candidates.iter().copied().find(|&pos| self.wins_at(pos, side))
    }

    /// First candidate where the opponent could legally play and win
    fn find_forced_block(&mut self, candidates: &[Pos]) -> Option<Pos> {
        let opponent = self.side.opponent();
        candidates.iter().copied().find(|&pos| {
            self.query_move_legality(pos.row as i32, pos.col as i32, opponent)
                .is_valid()
                && self.wins_at(pos, opponent)
        })
    }

    /// Legality of `player` at `(row, col)`; `player` must be black or white
    pub fn query_move_legality(&self, row: i32, col: i32, player: Stone) -> MoveStatus {
        validate_move(self.position.board(), row, col, player)
    }

    /// Whether `player` has won in the current position
    pub fn query_win(&self, player: Stone) -> bool {
        check_win(
            self.position.board(),
            player,
            self.position.state().captured(player),
        )
    }

    /// Whether `player` (black or white) has no legal move
    pub fn query_stalemate(&self, player: Stone) -> bool {
        check_stalemate(self.position.board(), player)
    }

    /// Stones `player` would capture at `(row, col)`; empty for cells that
    /// are off the board or occupied
    pub fn query_captures(&self, row: i32, col: i32, player: Stone) -> CaptureRecord {
        let board = self.position.board();
        match board.pos_at(row, col) {
            Some(pos) if board.is_empty(pos) => detect_captures(board, pos, player),
            _ => CaptureRecord::new(),
        }
    }

    /// Root candidates behind the last decision, best first
    pub fn candidates(&self) -> &[Move] {
        &self.last_candidates
    }

    pub fn side(&self) -> Stone {
        self.side
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        self.position.board()
    }

    pub fn state(&self) -> &GameState {
        self.position.state()
    }

    /// Placements applied since the last reset or load
    pub fn history(&self) -> &[MoveRecord] {
        self.position.history()
    }

    /// Drop cached search results
    pub fn clear_cache(&mut self) {
        self.searcher.clear();
    }

    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_engine(side: Stone) -> AIEngine {
        AIEngine::new(side, EngineConfig::default().max_depth(3).time_limit(None)).unwrap()
    }

    fn play(engine: &mut AIEngine, cells: &[(i32, i32)], stone: Stone) {
        for &(r, c) in cells {
            engine.apply_external_move(r, c, stone).unwrap();
        }
    }

    #[test]
    fn test_engine_rejects_empty_side() {
        assert_eq!(
            AIEngine::new(Stone::Empty, EngineConfig::default()).err(),
            Some(EngineError::InvalidSide(Stone::Empty))
        );
        let bad = EngineConfig::default().board_size(30);
        assert!(matches!(AIEngine::new(Stone::Black, bad), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = test_engine(Stone::Black);
        let result = engine.compute_best_move_with_stats();
        assert_eq!(result.best_move, Some(Pos::new(9, 9)));
        assert_eq!(result.search_type, SearchType::Opening);
    }

    #[test]
    fn test_engine_second_move() {
        let mut engine = test_engine(Stone::White);
        play(&mut engine, &[(9, 9)], Stone::Black);
        assert_eq!(engine.compute_best_move(), Some(Pos::new(9, 10)));

        let mut engine = test_engine(Stone::White);
        play(&mut engine, &[(3, 3)], Stone::Black);
        assert_eq!(engine.compute_best_move(), Some(Pos::new(9, 9)));
    }

    #[test]
    fn test_engine_prefers_win_over_block() {
        let mut engine = test_engine(Stone::Black);
        play(&mut engine, &[(5, 5), (5, 6), (5, 7), (5, 8)], Stone::Black);
        play(&mut engine, &[(12, 5), (12, 6), (12, 7), (12, 8)], Stone::White);
        let result = engine.compute_best_move_with_stats();
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        let pos = result.best_move.unwrap();
        assert!(pos == Pos::new(5, 4) || pos == Pos::new(5, 9));
        assert_eq!(engine.candidates()[0].provenance, Provenance::Forced);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut engine = test_engine(Stone::Black);
        play(&mut engine, &[(12, 5), (12, 6), (12, 7), (12, 8)], Stone::White);
        play(&mut engine, &[(12, 4), (3, 3)], Stone::Black);
        let result = engine.compute_best_move_with_stats();
        assert_eq!(result.search_type, SearchType::ForcedBlock);
        assert_eq!(result.best_move, Some(Pos::new(12, 9)));
    }

    #[test]
    fn test_capture_win_detection() {
        let mut engine = test_engine(Stone::Black);
        let mut cells = vec![0u8; 361];
        // B _ W W B on row 9
        cells[9 * 19 + 5] = 1;
        cells[9 * 19 + 7] = 2;
        cells[9 * 19 + 8] = 2;
        cells[9 * 19 + 9] = 1;
        engine.load_board(&cells, 8, 0).unwrap();

        let result = engine.compute_best_move_with_stats();
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.best_move, Some(Pos::new(9, 6)));
    }

    #[test]
    fn test_search_runs_and_restores_board() {
        let mut engine = test_engine(Stone::White);
        play(&mut engine, &[(9, 9), (10, 10)], Stone::Black);
        play(&mut engine, &[(9, 10)], Stone::White);
        let before = engine.board().clone();
        let result = engine.compute_best_move_with_stats();
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(result.best_move.is_some());
        assert!(result.depth >= 1);
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.history().len(), 3);
        assert!(!engine.candidates().is_empty());
        assert_eq!(engine.candidates()[0].pos, result.best_move.unwrap());
    }

    #[test]
    fn test_engine_deterministic() {
        let mut a = test_engine(Stone::White);
        let mut b = test_engine(Stone::White);
        for engine in [&mut a, &mut b] {
            play(engine, &[(9, 9), (10, 10)], Stone::Black);
            play(engine, &[(9, 10)], Stone::White);
        }
        let first = a.compute_best_move();
        assert_eq!(first, b.compute_best_move());
        a.clear_cache();
        assert_eq!(first, a.compute_best_move());
    }

    #[test]
    fn test_load_board_validation() {
        let mut engine = test_engine(Stone::Black);
        assert_eq!(
            engine.load_board(&[0; 10], 0, 0),
            Err(EngineError::BoardLength {
                expected: 361,
                actual: 10
            })
        );
        let mut cells = vec![0u8; 361];
        cells[20] = 3;
        assert_eq!(
            engine.load_board(&cells, 0, 0),
            Err(EngineError::InvalidCell { index: 20, code: 3 })
        );
        cells[20] = 2;
        assert_eq!(
            engine.load_board(&cells, 3, 0),
            Err(EngineError::InvalidCaptureCount(3))
        );
        engine.load_board(&cells, 4, 2).unwrap();
        assert_eq!(engine.board().get(Pos::new(1, 1)), Stone::White);
        assert_eq!(engine.state(), &GameState::new(4, 2));
    }

    #[test]
    fn test_apply_external_move_captures() {
        let mut engine = test_engine(Stone::White);
        play(&mut engine, &[(9, 5), (9, 9)], Stone::Black);
        play(&mut engine, &[(9, 7), (9, 8)], Stone::White);
        let captured = engine.apply_external_move(9, 6, Stone::Black).unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(engine.state().captured_by_black, 2);
        assert_eq!(engine.board().get(Pos::new(9, 7)), Stone::Empty);

        assert_eq!(
            engine.apply_external_move(9, 6, Stone::White).err(),
            Some(EngineError::Occupied { row: 9, col: 6 })
        );
        assert_eq!(
            engine.apply_external_move(19, 0, Stone::White).err(),
            Some(EngineError::OutOfBounds { row: 19, col: 0 })
        );

        let record = engine.undo_last_move().unwrap();
        assert_eq!(record.pos, Pos::new(9, 6));
        assert_eq!(engine.board().get(Pos::new(9, 7)), Stone::White);
        assert_eq!(engine.state().captured_by_black, 0);
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let mut engine = test_engine(Stone::White);
        play(&mut engine, &[(9, 5), (9, 9)], Stone::Black);
        play(&mut engine, &[(9, 7), (9, 8)], Stone::White);
        let before = engine.board().clone();

        assert_eq!(engine.query_captures(9, 6, Stone::Black).len(), 2);
        assert!(engine.query_captures(9, 5, Stone::Black).is_empty());
        assert!(engine.query_captures(-1, 5, Stone::Black).is_empty());
        assert_eq!(engine.query_move_legality(9, 9, Stone::White), MoveStatus::Occupied);
        assert_eq!(engine.query_move_legality(20, 9, Stone::White), MoveStatus::OutOfBounds);
        assert!(!engine.query_win(Stone::Black));
        assert!(!engine.query_stalemate(Stone::Black));
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let config = EngineConfig::default().board_size(5).max_depth(2).time_limit(None);
        let mut engine = AIEngine::new(Stone::Black, config).unwrap();
        let cells: Vec<u8> = (0..25).map(|i| if (i / 5) % 2 == 0 { 1 } else { 2 }).collect();
        engine.load_board(&cells, 0, 0).unwrap();
        let result = engine.compute_best_move_with_stats();
        assert_eq!(result.best_move, None);
        assert_eq!(result.search_type, SearchType::NoMove);
        assert!(engine.query_stalemate(Stone::Black));
    }

    #[test]
    fn test_reset_and_initialize() {
        let mut engine = test_engine(Stone::White);
        play(&mut engine, &[(9, 9), (10, 10)], Stone::Black);
        play(&mut engine, &[(9, 10)], Stone::White);
        let _ = engine.compute_best_move();

        engine.initialize(Stone::Black).unwrap();
        assert_eq!(engine.side(), Stone::Black);
        assert!(engine.board().is_board_empty());
        assert!(engine.history().is_empty());
        assert_eq!(engine.tt_stats().used, 0);
        assert!(engine.initialize(Stone::Empty).is_err());
    }
}
