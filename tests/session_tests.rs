//! Session state machine tests: Playing → Won → Over, restart, resize.

use rust_2048::{Board, Direction, EngineConfig, EngineError, GameStatus, Pos, SessionBuilder};

fn board(rows: Vec<Vec<u64>>) -> Board {
    Board::from_rows(rows).unwrap()
}

#[test]
fn test_inert_move_spawns_nothing() {
    let start = board(vec![vec![2, 0], vec![0, 0]]);
    let mut session = SessionBuilder::new().starting_board(start.clone()).build(1).unwrap();
    let rng_before = session.rng_state();

    for dir in [Direction::Left, Direction::Up] {
        let report = session.play(dir).unwrap();
        assert!(!report.moved);
        assert_eq!(report.score_delta, 0);
        assert!(report.spawned.is_none());
        assert_eq!(report.status, GameStatus::Playing);
    }

    assert_eq!(session.board(), &start);
    assert_eq!(session.score(), 0);
    assert_eq!(session.rng_state(), rng_before);
}

#[test]
fn test_move_spawns_and_scores() {
    let start = board(vec![vec![2, 2, 0], vec![0, 0, 0], vec![0, 0, 0]]);
    let mut session = SessionBuilder::new().starting_board(start).build(9).unwrap();

    let report = session.play(Direction::Left).unwrap();
    assert!(report.moved);
    assert_eq!(report.score_delta, 4);
    assert_eq!(session.score(), 4);
    assert_eq!(session.best_score(), 4);
    assert_eq!(session.board().get(Pos::new(0, 0)), Some(4));

    let spawn = report.spawned.unwrap();
    assert_ne!(spawn.pos, Pos::new(0, 0));
    assert_eq!(session.board().get(spawn.pos), Some(spawn.value));
    assert_eq!(session.board().tile_count(), 2);
}

#[test]
fn test_win_notifies_once_and_play_continues() {
    let start = board(vec![vec![1024, 1024, 0], vec![0, 0, 0], vec![0, 0, 0]]);
    let mut session = SessionBuilder::new().starting_board(start).build(3).unwrap();

    let report = session.play(Direction::Left).unwrap();
    assert!(report.just_won);
    assert_eq!(report.status, GameStatus::Won);
    assert_eq!(report.score_delta, 2048);
    assert!(session.has_won());

    let report = session.play(Direction::Right).unwrap();
    assert!(report.moved);
    assert!(!report.just_won);
    assert_eq!(report.status, GameStatus::Won);
}

#[test]
fn test_custom_target_win() {
    let start = board(vec![vec![64, 64, 0], vec![0, 0, 0], vec![0, 0, 0]]);
    let mut session = SessionBuilder::new()
        .target(128)
        .starting_board(start)
        .build(3)
        .unwrap();

    let report = session.play(Direction::Right).unwrap();
    assert!(report.just_won);
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn test_game_over_rejects_moves() {
    // After sliding right the only empty cell is boxed in by 8 and 32,
    // so whichever tile spawns there the board is stuck.
    let start = board(vec![vec![8, 16], vec![32, 0]]);
    let mut session = SessionBuilder::new().starting_board(start).build(4).unwrap();

    let report = session.play(Direction::Right).unwrap();
    assert!(report.moved);
    assert_eq!(report.status, GameStatus::Over);
    assert_eq!(session.status(), GameStatus::Over);
    assert!(session.legal_moves().is_empty());

    let frozen = session.board().clone();
    for dir in Direction::ALL {
        assert_eq!(session.play(dir), Err(EngineError::GameOver));
    }
    assert_eq!(session.board(), &frozen);
}

#[test]
fn test_locked_starting_board_is_over() {
    let start = board(vec![vec![2, 4], vec![4, 2]]);
    let mut session = SessionBuilder::new().starting_board(start.clone()).build(1).unwrap();

    assert_eq!(session.status(), GameStatus::Over);
    assert_eq!(session.play(Direction::Left), Err(EngineError::GameOver));
    assert_eq!(session.board(), &start);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_win_and_loss_on_same_move() {
    let start = board(vec![vec![1024, 1024], vec![8, 16]]);
    let mut session = SessionBuilder::new().starting_board(start).build(4).unwrap();

    let report = session.play(Direction::Left).unwrap();
    assert!(report.just_won);
    assert_eq!(report.status, GameStatus::Over);
    assert!(session.has_won());
}

#[test]
fn test_restart_keeps_best_score() {
    let start = board(vec![vec![4, 4, 0], vec![8, 8, 0], vec![0, 0, 0]]);
    let mut session = SessionBuilder::new().starting_board(start).build(12).unwrap();

    session.play(Direction::Left).unwrap();
    assert_eq!(session.score(), 24);

    session.restart();
    assert_eq!(session.score(), 0);
    assert_eq!(session.best_score(), 24);
    assert_eq!(session.status(), GameStatus::Playing);
    assert!(!session.has_won());
    assert_eq!(session.board().size(), 3);
    assert_eq!(session.board().tile_count(), 2);
}

#[test]
fn test_restart_after_game_over() {
    let start = board(vec![vec![8, 16], vec![32, 0]]);
    let mut session = SessionBuilder::new().starting_board(start).build(4).unwrap();
    session.play(Direction::Right).unwrap();
    assert_eq!(session.status(), GameStatus::Over);

    session.restart();
    assert_eq!(session.status(), GameStatus::Playing);
    assert!(session.play(Direction::Up).is_ok());
}

#[test]
fn test_resize_through_standard_sizes() {
    let mut session = SessionBuilder::new().build(77).unwrap();
    for size in EngineConfig::STANDARD_SIZES {
        session.resize(size).unwrap();
        assert_eq!(session.size(), size);
        assert_eq!(session.board().size(), size);
        assert_eq!(session.board().tile_count(), 2);
        assert_eq!(session.score(), 0);
    }
}

#[test]
fn test_same_seed_same_game() {
    let moves = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    let mut a = SessionBuilder::new().size(4).build(555).unwrap();
    let mut b = SessionBuilder::new().size(4).build(555).unwrap();
    assert_eq!(a.board(), b.board());

    for i in 0..200 {
        let dir = moves[i % moves.len()];
        assert_eq!(a.play(dir), b.play(dir));
        assert_eq!(a.board(), b.board());
    }
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_score_tracks_deltas_until_over() {
    let mut session = SessionBuilder::new().size(3).build(31).unwrap();
    let mut total = 0;

    for i in 0..10_000 {
        if session.status() == GameStatus::Over {
            break;
        }
        let legal = session.legal_moves();
        let report = session.play(legal[i % legal.len()]).unwrap();
        assert!(report.moved);
        total += report.score_delta;
        assert_eq!(session.score(), total);
        assert!(session.best_score() >= session.score());
    }

    assert_eq!(session.status(), GameStatus::Over);
}
