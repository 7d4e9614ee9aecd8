//! End-to-end rules: collapse examples, spawning, score and best.

use tui_2048::core::{collapse_line, Board, GameSnapshot, GameState};
use tui_2048::types::{Cell, Direction, GameAction, Tile};

fn line(values: &[u64]) -> Vec<Cell> {
    values
        .iter()
        .map(|&v| if v == 0 { None } else { Tile::new(v) })
        .collect()
}

fn game(rows: &[&[u64]], seed: u64) -> GameState {
    GameState::from_board(Board::from_values(rows).unwrap(), seed).unwrap()
}

/// Tiles that are not at `skip`, as (row, col, value).
fn tiles_except(snap: &GameSnapshot, skip: Option<(usize, usize)>) -> Vec<(usize, usize, u64)> {
    snap.cells_iter()
        .filter(|c| Some((c.row, c.col)) != skip)
        .filter_map(|c| c.value.map(|v| (c.row, c.col, v)))
        .collect()
}

#[test]
fn test_collapse_examples() {
    let out = collapse_line(&line(&[2, 2, 4, 0]));
    assert_eq!(out.cells, line(&[4, 4, 0, 0]));
    assert_eq!(out.points, 4);

    let out = collapse_line(&line(&[2, 2, 2, 2]));
    assert_eq!(out.cells, line(&[4, 4, 0, 0]));
    assert_eq!(out.points, 8);

    let out = collapse_line(&line(&[0, 2, 0, 2]));
    assert_eq!(out.cells, line(&[4, 0, 0, 0]));
    assert_eq!(out.points, 4);
}

#[test]
fn test_merging_fours_scores_eight() {
    let mut state = game(&[&[4, 4, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]], 1);
    let out = state.apply_move(Direction::Left);
    assert_eq!(out.points, 8);
    assert_eq!(state.score(), 8);
    assert_eq!(state.board().get(0, 0), Some(Tile::new(8)));
}

#[test]
fn test_new_game_has_two_spawned_tiles() {
    for seed in 0..50 {
        let state = GameState::new(4, seed).unwrap();
        let snap = state.snapshot();
        let tiles: Vec<_> = tiles_except(&snap, None);
        assert_eq!(tiles.len(), 2, "seed {seed}");
        assert!(tiles.iter().all(|&(_, _, v)| v == 2));
        assert_ne!((tiles[0].0, tiles[0].1), (tiles[1].0, tiles[1].1));
        assert_eq!(state.score(), 0);
        assert_eq!(state.best(), 0);
    }
}

#[test]
fn test_invalid_size_fails_fast() {
    assert!(GameState::new(0, 1).is_err());
    assert!(GameState::new(2, 1).is_ok());
}

#[test]
fn test_each_direction_slides_to_its_edge() {
    let rows: &[&[u64]] = &[&[0, 0, 0, 0], &[0, 2, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]];
    let expected = [
        (Direction::Left, (1, 0)),
        (Direction::Right, (1, 3)),
        (Direction::Up, (0, 1)),
        (Direction::Down, (3, 1)),
    ];
    for (direction, (row, col)) in expected {
        let mut state = game(rows, 3);
        let out = state.apply_move(direction);
        assert!(out.changed, "{direction:?}");
        assert_ne!(out.spawned, Some((row, col)));
        let remaining = tiles_except(&state.snapshot(), out.spawned);
        assert_eq!(remaining, vec![(row, col, 2)], "{direction:?}");
    }
}

#[test]
fn test_compacted_board_does_not_spawn() {
    let mut state = game(&[&[2, 4, 8, 16], &[4, 8, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]], 4);
    let before = state.snapshot();
    let out = state.apply_move(Direction::Left);
    assert!(!out.changed);
    assert_eq!(out.spawned, None);
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_changed_move_spawns_exactly_one_tile() {
    let mut state = game(&[&[0, 0, 0, 2], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 4]], 5);
    let out = state.apply_move(Direction::Left);
    assert!(out.changed);
    let (row, col) = out.spawned.unwrap();
    // Both original tiles moved to column 0; the spawn cannot be there.
    assert!(!((row, col) == (0, 0) || (row, col) == (3, 0)));
    assert_eq!(state.board().tile_count(), 3);
    assert_eq!(state.board().get(row, col), Some(Some(Tile::SPAWN)));
}

#[test]
fn test_long_game_keeps_invariants() {
    let mut state = GameState::new(4, 31337).unwrap();
    let mut last_best = 0;
    let mut last_score = 0;
    for i in 0..500 {
        let before = state.board().tile_count();
        let out = state.apply_move(Direction::ALL[(i * 5 + i / 3) % 4]);
        let after = state.board().tile_count();

        if out.changed {
            // merges remove tiles, the spawn adds exactly one
            assert!(after <= before + 1);
            assert!(out.spawned.is_some());
        } else {
            assert_eq!(after, before);
        }
        assert!(state.score() >= last_score);
        assert_eq!(state.score(), last_score + out.points);
        assert!(state.best() >= last_best);
        assert!(state.best() >= state.score());
        for tile in state.board().cells().iter().flatten() {
            assert!(tile.value() >= 2 && tile.value().is_power_of_two());
        }
        last_best = state.best();
        last_score = state.score();
    }
}

#[test]
fn test_restart_resets_score_but_not_best() {
    let mut state = game(&[&[2, 2, 0], &[0, 0, 0], &[0, 0, 0]], 6);
    state.apply_action(GameAction::Move(Direction::Right));
    assert_eq!(state.best(), 4);

    state.apply_action(GameAction::Restart);
    assert_eq!(state.score(), 0);
    assert_eq!(state.best(), 4);
    assert_eq!(state.board().size(), 3);
    assert_eq!(state.board().tile_count(), 2);
    assert_eq!(state.episode_id(), 1);
}

#[test]
fn test_text_commands() {
    let mut state = game(&[&[2, 0], &[0, 0]], 7);
    assert!(!state.apply_command("jump"));
    assert!(state.apply_command("ArrowRight"));
    assert_eq!(state.board().get(0, 1), Some(Tile::new(2)));
}
