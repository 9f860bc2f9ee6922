//! Pattern scores for Ninuki-renju evaluation
//!
//! Line shapes are classified by run length and the number of open ends.
//! Weights are spaced an order of magnitude apart so that a stronger shape
//! always dominates any realistic sum of weaker ones.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Decided game; above any sum of shape scores a real board can reach
    pub const WIN: i64 = 1_000_000_000_000;

    /// Five or more in a row
    pub const FIVE: i64 = 100_000_000;
    /// Open four: _OOOO_
    pub const LIVE_FOUR: i64 = 50_000_000;
    /// Four with one end blocked
    pub const DEAD_FOUR: i64 = 10_000_000;
    /// Open three: _OOO_
    pub const LIVE_THREE: i64 = 5_000_000;
    pub const DEAD_THREE: i64 = 500_000;
    pub const LIVE_TWO: i64 = 100_000;
    pub const DEAD_TWO: i64 = 10_000;
    /// Lone stone with room to grow
    pub const ONE: i64 = 1_000;

    /// Value of each captured stone
    pub const CAPTURE_STONE: i64 = Self::LIVE_THREE;
    /// Penalty for placing a stone the opponent can immediately capture
    pub const VULNERABLE: i64 = Self::DEAD_FOUR / 2;
    /// Per-step bonus for closeness to the centre
    pub const CENTRALITY: i64 = 50;
}

/// Shape of the line through one cell on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinePattern {
    Five,
    LiveFour,
    DeadFour,
    LiveThree,
    DeadThree,
    LiveTwo,
    DeadTwo,
    One,
}

impl LinePattern {
    /// Classify a run of `count` stones with `open_ends` empty ends.
    ///
    /// `None` for shapes with no value: fully blocked runs below five.
    pub fn classify(count: usize, open_ends: u8) -> Option<LinePattern> {
        match (count.min(5), open_ends) {
            (5, _) => Some(LinePattern::Five),
            (_, 0) => None,
            (4, 2) => Some(LinePattern::LiveFour),
            (4, _) => Some(LinePattern::DeadFour),
            (3, 2) => Some(LinePattern::LiveThree),
            (3, _) => Some(LinePattern::DeadThree),
            (2, 2) => Some(LinePattern::LiveTwo),
            (2, _) => Some(LinePattern::DeadTwo),
            _ => Some(LinePattern::One),
        }
    }

    pub fn score(self) -> i64 {
        match self {
            LinePattern::Five => PatternScore::FIVE,
            LinePattern::LiveFour => PatternScore::LIVE_FOUR,
            LinePattern::DeadFour => PatternScore::DEAD_FOUR,
            LinePattern::LiveThree => PatternScore::LIVE_THREE,
            LinePattern::DeadThree => PatternScore::DEAD_THREE,
            LinePattern::LiveTwo => PatternScore::LIVE_TWO,
            LinePattern::DeadTwo => PatternScore::DEAD_TWO,
            LinePattern::One => PatternScore::ONE,
        }
    }
}

/// Capture differential, in stones, weighted per stone.
///
/// Antisymmetric: `capture_score(a, b) == -capture_score(b, a)`.
#[inline]
pub fn capture_score(my_stones: u32, opp_stones: u32) -> i64 {
    (my_stones as i64 - opp_stones as i64) * PatternScore::CAPTURE_STONE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_table() {
        assert_eq!(LinePattern::classify(5, 0), Some(LinePattern::Five));
        assert_eq!(LinePattern::classify(7, 1), Some(LinePattern::Five));
        assert_eq!(LinePattern::classify(4, 2), Some(LinePattern::LiveFour));
        assert_eq!(LinePattern::classify(4, 1), Some(LinePattern::DeadFour));
        assert_eq!(LinePattern::classify(3, 2), Some(LinePattern::LiveThree));
        assert_eq!(LinePattern::classify(2, 1), Some(LinePattern::DeadTwo));
        assert_eq!(LinePattern::classify(1, 2), Some(LinePattern::One));
        assert_eq!(LinePattern::classify(4, 0), None);
    }

    #[test]
    fn test_scores_strictly_ordered() {
        let order = [
            LinePattern::Five,
            LinePattern::LiveFour,
            LinePattern::DeadFour,
            LinePattern::LiveThree,
            LinePattern::DeadThree,
            LinePattern::LiveTwo,
            LinePattern::DeadTwo,
            LinePattern::One,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].score() > pair[1].score());
        }
    }

    #[test]
    fn test_capture_score_antisymmetric() {
        assert_eq!(capture_score(4, 2), -capture_score(2, 4));
        assert_eq!(capture_score(3, 3), 0);
    }
}
