//! Board tests - grid access and orientation primitives

use tui_2048::core::Board;
use tui_2048::types::{Direction, Tile};

fn values(board: &Board) -> Vec<Vec<u64>> {
    board
        .rows()
        .map(|row| row.iter().map(|c| c.map_or(0, |t| t.value())).collect())
        .collect()
}

fn grid(rows: &[&[u64]]) -> Board {
    Board::from_values(rows).unwrap()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(4);
    assert_eq!(board.size(), 4);
    assert_eq!(board.tile_count(), 0);
    assert_eq!(board.empty_cells().len(), 16);

    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(board.get(row, col), Some(None));
        }
    }
    assert_eq!(board.get(4, 0), None);
}

#[test]
fn test_board_default_is_four_by_four() {
    assert_eq!(Board::default().size(), 4);
}

#[test]
fn test_from_rows_requires_square() {
    let two = Tile::new(2);
    assert!(Board::from_rows(&[vec![two, None], vec![None, two]]).is_some());
    assert!(Board::from_rows(&[vec![two, None, None]]).is_none());
}

#[test]
fn test_row_access() {
    let board = grid(&[&[2, 4, 0], &[0, 0, 8], &[0, 0, 0]]);
    assert_eq!(board.row(0), Some(&[Tile::new(2), Tile::new(4), None][..]));
    assert_eq!(board.row(3), None);
    assert_eq!(board.rows().count(), 3);
}

#[test]
fn test_rotate_left_three_by_three() {
    let board = grid(&[&[2, 4, 8], &[16, 32, 64], &[128, 256, 512]]);
    assert_eq!(
        values(&board.rotate_left()),
        vec![vec![128, 16, 2], vec![256, 32, 4], vec![512, 64, 8]]
    );
}

#[test]
fn test_rotate_right_three_by_three() {
    let board = grid(&[&[2, 4, 8], &[16, 32, 64], &[128, 256, 512]]);
    assert_eq!(
        values(&board.rotate_right()),
        vec![vec![8, 64, 512], vec![4, 32, 256], vec![2, 16, 128]]
    );
}

#[test]
fn test_rotations_undo_each_other_with_gaps() {
    let board = grid(&[&[2, 0, 0, 4], &[0, 8, 0, 0], &[0, 0, 0, 16], &[32, 0, 2, 0]]);
    assert_eq!(board.rotate_left().rotate_right(), board);
    assert_eq!(board.rotate_right().rotate_left(), board);
}

#[test]
fn test_reverse_rows_is_involution() {
    let board = grid(&[&[2, 4, 0], &[0, 8, 16], &[32, 0, 0]]);
    assert_eq!(values(&board.reverse_rows())[0], vec![0, 4, 2]);
    assert_eq!(board.reverse_rows().reverse_rows(), board);
}

#[test]
fn test_up_orientation_puts_columns_in_rows() {
    // Oriented for Up, a column reads bottom-to-top as a row; Down reads it top-to-bottom.
    let board = grid(&[&[0, 0, 0], &[0, 0, 0], &[0, 2, 0]]);
    let oriented = board.orient_for(Direction::Up);
    let row = oriented.rows().find(|r| r.iter().any(|c| c.is_some())).unwrap();
    assert_eq!(row, &[None, None, Tile::new(2)][..]);

    let down = board.orient_for(Direction::Down);
    let row = down.rows().find(|r| r.iter().any(|c| c.is_some())).unwrap();
    assert_eq!(row, &[Tile::new(2), None, None][..]);
}

#[test]
fn test_orientation_round_trip_every_direction() {
    let board = grid(&[&[2, 4, 0, 0], &[0, 8, 0, 0], &[16, 0, 0, 2], &[0, 0, 4, 0]]);
    for d in Direction::ALL {
        assert_eq!(board.orient_for(d).unorient_for(d), board, "{d:?}");
    }
}
