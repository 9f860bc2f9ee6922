//! Transposition Table for caching search results
//!
//! The transposition table stores search results indexed by position hash,
//! enabling reuse of previous search results for positions reached through
//! different move orders.
//!
//! # Example
//!
//! ```
//! use gomoku_core::board::Pos;
//! use gomoku_core::search::{Bound, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(1); // 1 MB
//!
//! let hash = 0x1234_5678_9ABC_DEF0;
//! tt.store(hash, 5, 100, Bound::Exact, Some(Pos::new(9, 9)));
//!
//! let probe = tt.probe(hash, 5, -1000, 1000).unwrap();
//! assert_eq!(probe.score, Some(100));
//! ```

use crate::board::Pos;

/// How a stored score relates to the true value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    Lower,
    /// Upper bound - score <= stored value (alpha fail-low)
    Upper,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    pub hash: u64,
    /// Remaining depth the score was searched to
    pub depth: i32,
    pub score: i64,
    pub bound: Bound,
    pub best_move: Option<Pos>,
}

/// Result of a successful probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Present only when the entry is deep enough and its bound decides
    /// the current window
    pub score: Option<i64>,
    /// Best move from the stored search, for ordering
    pub best_move: Option<Pos>,
}

/// Direct-mapped table; each hash maps to exactly one slot and collisions
/// are resolved by a depth-preferred replacement policy.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
}

impl TranspositionTable {
    /// Create a table of roughly `size_mb` megabytes
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TTEntry>>();
        let size = ((size_mb * 1024 * 1024) / entry_size).max(1024);

        Self {
            entries: vec![None; size],
            size,
        }
    }

    #[inline]
    fn slot(&self, hash: u64) -> usize {
        (hash % self.size as u64) as usize
    }

    /// Probe the table for a position searched at `depth` with the
    /// window `(alpha, beta)`.
    ///
    /// Returns `None` on a miss. On a hit the move is always returned; the
    /// score only when it can be used directly.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: i32, alpha: i64, beta: i64) -> Option<Probe> {
        let entry = self.entries[self.slot(hash)]?;
        if entry.hash != hash {
            return None;
        }

        let usable = entry.depth >= depth
            && match entry.bound {
                Bound::Exact => true,
                Bound::Lower => entry.score >= beta,
                Bound::Upper => entry.score <= alpha,
            };

        Some(Probe {
            score: usable.then_some(entry.score),
            best_move: entry.best_move,
        })
    }

    /// Best move stored for `hash`, if any
    #[must_use]
    pub fn get_best_move(&self, hash: u64) -> Option<Pos> {
        self.entries[self.slot(hash)]
            .filter(|e| e.hash == hash)
            .and_then(|e| e.best_move)
    }

    /// Store a result. Replaces if the slot is empty, holds the same
    /// position, or the new search is at least as deep.
    pub fn store(&mut self, hash: u64, depth: i32, score: i64, bound: Bound, best_move: Option<Pos>) {
        let idx = self.slot(hash);
        let replace = match &self.entries[idx] {
            None => true,
            Some(e) => e.hash == hash || e.depth <= depth,
        };
        if replace {
            self.entries[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                bound,
                best_move,
            });
        }
    }

    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            size: self.size,
            used,
            usage_percent: (used as f64 / self.size as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Total number of slots in the table
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tt_store_probe_exact() {
        let mut tt = TranspositionTable::new(1);
        tt.store(42, 4, 77, Bound::Exact, Some(Pos::new(1, 2)));
        let probe = tt.probe(42, 4, -100, 100).unwrap();
        assert_eq!(probe.score, Some(77));
        assert_eq!(probe.best_move, Some(Pos::new(1, 2)));
    }

    #[test]
    fn test_tt_depth_requirement() {
        let mut tt = TranspositionTable::new(1);
        tt.store(42, 2, 77, Bound::Exact, Some(Pos::new(1, 2)));
        let probe = tt.probe(42, 3, -100, 100).unwrap();
        assert_eq!(probe.score, None);
        assert_eq!(probe.best_move, Some(Pos::new(1, 2)));
    }

    #[test]
    fn test_tt_bounds() {
        let mut tt = TranspositionTable::new(1);
        tt.store(1, 3, 500, Bound::Lower, None);
        assert_eq!(tt.probe(1, 3, 0, 400).unwrap().score, Some(500));
        assert_eq!(tt.probe(1, 3, 0, 600).unwrap().score, None);

        tt.store(2, 3, -500, Bound::Upper, None);
        assert_eq!(tt.probe(2, 3, -400, 0).unwrap().score, Some(-500));
        assert_eq!(tt.probe(2, 3, -600, 0).unwrap().score, None);
    }

    #[test]
    fn test_tt_hash_mismatch() {
        let mut tt = TranspositionTable::new(1);
        let size = tt.stats().size as u64;
        tt.store(5, 3, 10, Bound::Exact, None);
        assert!(tt.probe(5 + size, 3, -100, 100).is_none());
        assert_eq!(tt.get_best_move(5 + size), None);
    }

    #[test]
    fn test_tt_replacement_policy() {
        let mut tt = TranspositionTable::new(1);
        let size = tt.stats().size as u64;
        tt.store(7, 5, 1, Bound::Exact, Some(Pos::new(0, 0)));
        // Shallower entry for a colliding hash does not replace
        tt.store(7 + size, 2, 2, Bound::Exact, Some(Pos::new(1, 1)));
        assert_eq!(tt.get_best_move(7), Some(Pos::new(0, 0)));
        // Deeper one does
        tt.store(7 + size, 6, 3, Bound::Exact, Some(Pos::new(2, 2)));
        assert_eq!(tt.get_best_move(7 + size), Some(Pos::new(2, 2)));
        assert!(tt.probe(7, 1, -10, 10).is_none());
    }

    #[test]
    fn test_tt_clear_and_stats() {
        let mut tt = TranspositionTable::new(1);
        tt.store(1, 1, 0, Bound::Exact, None);
        tt.store(2, 1, 0, Bound::Exact, None);
        assert_eq!(tt.stats().used, 2);
        tt.clear();
        assert_eq!(tt.stats().used, 0);
        assert!(tt.probe(1, 1, -1, 1).is_none());
    }
}
