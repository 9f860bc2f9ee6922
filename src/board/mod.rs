//! Board representation for Ninuki-renju
//!
//! Cells are stored in two bitboards with a fixed 19-column stride. Smaller
//! boards (down to 5x5) use the top-left corner of that grid and simply treat
//! everything beyond `size` as off-board.

pub mod bitboard;
pub mod board;
pub mod state;

#[cfg(test)]
mod tests;

pub use bitboard::Bitboard;
pub use board::Board;
pub use state::GameState;

/// Largest (and canonical) board size
pub const BOARD_SIZE: usize = 19;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 361

/// Smallest board on which a five still fits
pub const MIN_BOARD_SIZE: usize = 5;

/// The four line axes (each scanned in both directions)
pub const AXES: [(i32, i32); 4] = [
    (0, 1),  // Horizontal →
    (1, 0),  // Vertical ↓
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↙
];

/// All eight neighbour directions
pub const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cell occupancy / player colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Decode the external cell code (0 empty, 1 black, 2 white)
    #[inline]
    pub fn from_code(code: u8) -> Option<Stone> {
        match code {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }

    /// Index into per-colour tables (black 0, white 1)
    #[inline]
    pub(crate) fn color_index(self) -> Option<usize> {
        match self {
            Stone::Black => Some(0),
            Stone::White => Some(1),
            Stone::Empty => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
