//! Plain-text board diagrams
//!
//! ```text
//! # optional comments
//! captures 2 0
//! . . . . .
//! . X O . .
//! . . X . .
//! . . . O .
//! . . . . .
//! ```
//!
//! `X`/`B` is black, `O`/`W` is white and `.` is empty. Whitespace inside a
//! row is ignored, so `.XO..` is the same row as `. X O . .`. The board is
//! square and its side is the row width.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, GameState, Stone};
use crate::error::NotationError;

/// A position as read from or written to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    pub board: Board,
    pub state: GameState,
}

impl Diagram {
    pub fn new(board: Board, state: GameState) -> Self {
        Diagram { board, state }
    }
}

fn parse_cell(c: char) -> Result<Stone, NotationError> {
    match c {
        '.' => Ok(Stone::Empty),
        'X' | 'x' | 'B' | 'b' => Ok(Stone::Black),
        'O' | 'o' | 'W' | 'w' => Ok(Stone::White),
        _ => Err(NotationError::InvalidChar(c)),
    }
}

fn cell_char(stone: Stone) -> char {
    match stone {
        Stone::Empty => '.',
        Stone::Black => 'X',
        Stone::White => 'O',
    }
}

fn parse_captures(line: &str) -> Result<GameState, NotationError> {
    let err = || NotationError::Captures(line.to_string());
    let mut fields = line.split_whitespace().skip(1);
    let black = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let white = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    if fields.next().is_some() {
        return Err(err());
    }
    Ok(GameState::new(black, white))
}

impl FromStr for Diagram {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .map(|line| line.split('#').next().unwrap_or("").trim())
            .filter(|line| !line.is_empty())
            .peekable();

        let state = match lines.peek() {
            Some(&line) if line.starts_with("captures") => {
                let state = parse_captures(line)?;
                lines.next();
                state
            }
            _ => GameState::default(),
        };

        let rows = lines
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(parse_cell)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let width = rows.first().ok_or(NotationError::Empty)?.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(NotationError::RowLength {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
        }
        if rows.len() != width {
            return Err(NotationError::NotSquare(rows.len(), width));
        }

        let mut board = Board::with_size(width)?;
        let cells: Vec<_> = board.cells().collect();
        for (pos, &stone) in cells.into_iter().zip(rows.iter().flatten()) {
            board.place_stone(pos, stone);
        }
        Ok(Diagram { board, state })
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "captures {} {}",
            self.state.captured_by_black, self.state.captured_by_white
        )?;
        let n = self.board.size();
        for (i, pos) in self.board.cells().enumerate() {
            write!(f, "{}", cell_char(self.board.get(pos)))?;
            if i % n == n - 1 {
                writeln!(f)?;
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    const SMALL: &str = "
        # black to capture at (1, 0)
        captures 2 4
        . . . . .
        . O O X .
        . . X . .
        . . . . .
        . . . . W
    ";

    #[test]
    fn test_parse_diagram() {
        let diagram: Diagram = SMALL.parse().unwrap();
        assert_eq!(diagram.board.size(), 5);
        assert_eq!(diagram.state, GameState::new(2, 4));
        assert_eq!(diagram.board.get(Pos::new(1, 1)), Stone::White);
        assert_eq!(diagram.board.get(Pos::new(1, 3)), Stone::Black);
        assert_eq!(diagram.board.get(Pos::new(4, 4)), Stone::White);
        assert_eq!(diagram.board.stone_count(), 5);
    }

    #[test]
    fn test_display_reparses() {
        let diagram: Diagram = SMALL.parse().unwrap();
        let text = diagram.to_string();
        assert!(text.starts_with("captures 2 4\n. . . . .\n. O O X .\n"));
        assert_eq!(text.parse::<Diagram>().unwrap(), diagram);
    }

    #[test]
    fn test_compact_rows() {
        let diagram: Diagram = ".....\n.XO..\n.....\n.....\n.....".parse().unwrap();
        assert_eq!(diagram.state, GameState::default());
        assert_eq!(diagram.board.get(Pos::new(1, 2)), Stone::White);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Diagram>(), Err(NotationError::Empty));
        assert_eq!("# nothing".parse::<Diagram>(), Err(NotationError::Empty));
        assert_eq!(
            ".....\n....\n.....\n.....\n.....".parse::<Diagram>(),
            Err(NotationError::RowLength {
                row: 1,
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            ".....\n.....".parse::<Diagram>(),
            Err(NotationError::NotSquare(2, 5))
        );
        assert_eq!(
            "....?\n.....\n.....\n.....\n.....".parse::<Diagram>(),
            Err(NotationError::InvalidChar('?'))
        );
        assert!(matches!(
            "captures two 0\n.....".parse::<Diagram>(),
            Err(NotationError::Captures(_))
        ));
        assert!(matches!(
            "....\n....\n....\n....".parse::<Diagram>(),
            Err(NotationError::Config(_))
        ));
    }
}
