//! Flat integer encodings for hosts that exchange plain buffers
//!
//! Variable-length results are written as a count followed by fixed-size
//! records into a caller-provided `&mut [i32]`. When the buffer is too small
//! the output is truncated to whole records and the count says how many were
//! written.

use crate::board::{Pos, BOARD_SIZE};
use crate::search::Move;

/// Encoded form of "no legal move"
pub const NO_MOVE: i32 = -1;

/// Slots per record in [`write_coords`]
pub const COORD_STRIDE: usize = 2;

/// Slots per record in [`write_candidates`]
pub const CANDIDATE_STRIDE: usize = 4;

/// `row * 100 + col`, or [`NO_MOVE`]
#[inline]
pub fn encode_move(mv: Option<Pos>) -> i32 {
    match mv {
        Some(pos) => pos.row as i32 * 100 + pos.col as i32,
        None => NO_MOVE,
    }
}

/// Inverse of [`encode_move`]. Negative codes and codes outside the
/// 19x19 grid decode to `None`.
#[inline]
pub fn decode_move(code: i32) -> Option<Pos> {
    if code < 0 {
        return None;
    }
    let (row, col) = ((code / 100) as usize, (code % 100) as usize);
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some(Pos::new(row as u8, col as u8))
}

fn write_records<T>(
    items: &[T],
    out: &mut [i32],
    stride: usize,
    encode: impl Fn(&T, &mut [i32]),
) -> usize {
    let Some((count, body)) = out.split_first_mut() else {
        return 0;
    };
    let written = items
        .iter()
        .zip(body.chunks_exact_mut(stride))
        .map(|(item, slot)| encode(item, slot))
        .count();
    *count = written as i32;
    written
}

/// Write `count, row, col, row, col, ...`; returns the number of pairs written
pub fn write_coords(coords: &[Pos], out: &mut [i32]) -> usize {
    write_records(coords, out, COORD_STRIDE, |pos, slot| {
        slot[0] = pos.row as i32;
        slot[1] = pos.col as i32;
    })
}

/// Write `count` then `row, col, score, provenance` per move.
///
/// Scores are saturated to the `i32` range.
pub fn write_candidates(moves: &[Move], out: &mut [i32]) -> usize {
    write_records(moves, out, CANDIDATE_STRIDE, |mv, slot| {
        slot[0] = mv.pos.row as i32;
        slot[1] = mv.pos.col as i32;
        slot[2] = mv.score.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        slot[3] = mv.provenance.code();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Provenance;

    #[test]
    fn test_encode_move() {
        assert_eq!(encode_move(Some(Pos::new(9, 10))), 910);
        assert_eq!(encode_move(Some(Pos::new(0, 0))), 0);
        assert_eq!(encode_move(None), NO_MOVE);
        assert_eq!(decode_move(1803), Some(Pos::new(18, 3)));
        assert_eq!(decode_move(NO_MOVE), None);
    }

    #[test]
    fn test_decode_move_rejects_off_grid() {
        assert_eq!(decode_move(1818), Some(Pos::new(18, 18)));
        assert_eq!(decode_move(1999), None);
        assert_eq!(decode_move(2500), None);
        assert_eq!(decode_move(19), None);
        assert_eq!(decode_move(i32::MAX), None);
    }

    #[test]
    fn test_write_coords() {
        let coords = [Pos::new(1, 2), Pos::new(3, 4)];
        let mut buf = [99; 6];
        assert_eq!(write_coords(&coords, &mut buf), 2);
        assert_eq!(buf, [2, 1, 2, 3, 4, 99]);
    }

    #[test]
    fn test_write_coords_truncates() {
        let coords = [Pos::new(1, 2), Pos::new(3, 4), Pos::new(5, 6)];
        let mut buf = [0; 4];
        assert_eq!(write_coords(&coords, &mut buf), 1);
        assert_eq!(buf, [1, 1, 2, 0]);

        let mut empty: [i32; 0] = [];
        assert_eq!(write_coords(&coords, &mut empty), 0);
        let mut one = [7];
        assert_eq!(write_coords(&coords, &mut one), 0);
        assert_eq!(one, [0]);
    }

    #[test]
    fn test_write_candidates() {
        let moves = [
            Move {
                pos: Pos::new(9, 9),
                score: 1_000_000_000_000,
                provenance: Provenance::Forced,
            },
            Move {
                pos: Pos::new(8, 7),
                score: -42,
                provenance: Provenance::Searched,
            },
        ];
        let mut buf = [0; 9];
        assert_eq!(write_candidates(&moves, &mut buf), 2);
        assert_eq!(buf, [2, 9, 9, i32::MAX, 2, 8, 7, -42, 1]);

        let mut short = [0; 7];
        assert_eq!(write_candidates(&moves, &mut short), 1);
        assert_eq!(short[0], 1);
    }
}
