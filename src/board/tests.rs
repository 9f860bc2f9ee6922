use super::*;

#[test]
fn test_board_new_is_empty() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.center(), Pos::new(9, 9));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert_eq!(board.get(pos), Stone::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_player_at_off_board_reads_empty() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    assert_eq!(board.player_at(0, 0), Stone::Black);
    assert_eq!(board.player_at(-1, 0), Stone::Empty);
    assert_eq!(board.player_at(0, 19), Stone::Empty);
    assert!(!board.is_empty_cell(-1, 0));
    assert!(!board.is_empty_cell(0, 0));
    assert!(board.is_empty_cell(0, 1));
}

#[test]
fn test_small_board_bounds() {
    let board = Board::with_size(7).unwrap();
    assert_eq!(board.size(), 7);
    assert!(board.is_on_board(6, 6));
    assert!(!board.is_on_board(7, 0));
    assert!(!board.contains(Pos::new(7, 7)));
    assert_eq!(board.center(), Pos::new(3, 3));
    assert_eq!(board.cells().count(), 49);
    assert_eq!(board.step(Pos::new(5, 5), 1, 1, 2), None);
    assert_eq!(board.step(Pos::new(5, 5), -1, 0, 2), Some(Pos::new(3, 5)));
}

#[test]
fn test_step_respects_runtime_size() {
    // (4, 4) is the corner of a 5x5 board but mid-grid in 19x19 indexing
    let board = Board::with_size(5).unwrap();
    let corner = Pos::new(4, 4);
    assert_eq!(board.step(corner, 0, 1, 1), None);
    assert_eq!(board.step(corner, 1, 0, 1), None);
    assert_eq!(board.step(corner, 1, 1, -4), Some(Pos::new(0, 0)));
    assert_eq!(board.pos_at(4, 5), None);
    assert_eq!(board.pos_at(-1, 0), None);
    assert_eq!(board.pos_at(2, 3), Some(Pos::new(2, 3)));
}

#[test]
fn test_with_size_rejects_out_of_range() {
    assert!(Board::with_size(4).is_err());
    assert!(Board::with_size(20).is_err());
    assert!(Board::with_size(5).is_ok());
}

#[test]
fn test_bitboard_iter_row_major() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(18, 18));
    bb.set(Pos::new(0, 1));
    bb.set(Pos::new(7, 3));
    let cells: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(cells, vec![Pos::new(0, 1), Pos::new(7, 3), Pos::new(18, 18)]);
    assert_eq!(bb.count(), 3);
}

#[test]
fn test_to_codes() {
    let mut board = Board::with_size(5).unwrap();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.place_stone(Pos::new(4, 4), Stone::White);
    let codes = board.to_codes();
    assert_eq!(codes.len(), 25);
    assert_eq!(codes[0], 1);
    assert_eq!(codes[24], 2);
    assert_eq!(codes.iter().filter(|&&c| c == 0).count(), 23);
}

#[test]
fn test_stone_codes() {
    for stone in [Stone::Empty, Stone::Black, Stone::White] {
        assert_eq!(Stone::from_code(stone.code()), Some(stone));
    }
    assert_eq!(Stone::from_code(3), None);
    assert_eq!(Stone::Black.opponent(), Stone::White);
}

#[test]
fn test_game_state_counts_stones() {
    let mut state = GameState::default();
    state.add_captured(Stone::Black, 2);
    state.add_captured(Stone::Black, 4);
    state.add_captured(Stone::White, 2);
    assert_eq!(state.captured(Stone::Black), 6);
    assert_eq!(state.captured(Stone::White), 2);
    assert_eq!(state.captured(Stone::Empty), 0);
}
