//! Integration tests for the game session

use retro_tetris::core::{GameSession, RandomSource, RandomizerMode, SessionConfig};
use retro_tetris::types::{GameAction, PieceKind};

/// Always returns zero: uniform draws are all I pieces.
struct ZeroRng;

impl RandomSource for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
}

fn i_only_session() -> GameSession<ZeroRng> {
    let mut session = GameSession::new(ZeroRng, SessionConfig::default());
    session.start();
    session
}

fn repeat(session: &mut GameSession<ZeroRng>, action: GameAction, times: usize) {
    for _ in 0..times {
        assert!(session.apply_action(action), "{:?} was blocked", action);
    }
}

#[test]
fn test_game_lifecycle() {
    let mut session = GameSession::with_seed(12345, SessionConfig::default());
    assert!(!session.running());
    assert!(session.snapshot().active.is_none());

    session.apply_action(GameAction::Restart);
    assert!(session.running());
    assert!(session.active().is_some());
    assert!(!session.game_over());
    assert!(!session.paused());
}

#[test]
fn test_i_piece_hard_drop_fills_bottom_row() {
    let mut session = i_only_session();
    let active = session.active().unwrap();
    assert_eq!(active.piece.kind(), PieceKind::I);
    assert_eq!((active.x, active.y), (3, 0));

    session.apply_action(GameAction::HardDrop);

    let board = session.board();
    for x in 0..10 {
        assert_eq!(board.is_occupied(x, 19), (3..=6).contains(&x), "column {}", x);
    }
    assert_eq!(session.lines(), 0);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_four_placements_clear_bottom_row() {
    let mut session = i_only_session();

    // Columns 0..4.
    repeat(&mut session, GameAction::MoveLeft, 3);
    session.apply_action(GameAction::HardDrop);

    // Columns 4..8.
    repeat(&mut session, GameAction::MoveRight, 1);
    session.apply_action(GameAction::HardDrop);

    // Vertical in column 8.
    session.apply_action(GameAction::Rotate);
    repeat(&mut session, GameAction::MoveRight, 5);
    session.apply_action(GameAction::HardDrop);
    assert_eq!(session.board().row_fill(19), 9);

    // Vertical in column 9 completes the row.
    session.apply_action(GameAction::Rotate);
    repeat(&mut session, GameAction::MoveRight, 6);
    assert!(!session.apply_action(GameAction::MoveRight));
    session.apply_action(GameAction::HardDrop);

    let event = session.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 1);
    assert_eq!(event.line_clear_score, 100);
    assert_eq!(session.score(), 100);
    assert_eq!(session.lines(), 1);
    assert_eq!(session.level(), 1);

    // The two vertical pieces drop by one row.
    let board = session.board();
    assert_eq!(board.row_fill(19), 2);
    assert!(board.is_occupied(8, 17) && board.is_occupied(9, 17));
    assert_eq!(board.row_fill(16), 0);
}

#[test]
fn test_gravity_follows_timestamps() {
    let mut session = i_only_session();
    session.tick(0);
    let mut now = 0;
    for expected_y in 1..=5 {
        now += 1001;
        assert!(session.tick(now));
        assert_eq!(session.active().unwrap().y, expected_y);
    }
}

#[test]
fn test_gravity_locks_piece_on_floor() {
    let mut session = i_only_session();
    let mut now = 0;
    session.tick(now);
    // 19 steps reach the floor, the 20th locks.
    for _ in 0..20 {
        now += 1001;
        session.tick(now);
    }
    assert!(session.take_last_event().unwrap().locked);
    assert_eq!(session.board().row_fill(19), 4);
    assert_eq!(session.active().unwrap().y, 0);
}

#[test]
fn test_pause_blocks_input_and_gravity() {
    let mut session = i_only_session();
    session.tick(0);
    session.apply_action(GameAction::Pause);

    assert!(!session.apply_action(GameAction::MoveLeft));
    assert!(!session.apply_action(GameAction::HardDrop));
    assert!(!session.tick(60_000));
    assert_eq!(session.active().unwrap().y, 0);
    assert!(session.snapshot().paused);

    session.apply_action(GameAction::Pause);
    assert!(session.apply_action(GameAction::MoveLeft));
}

#[test]
fn test_restart_while_paused() {
    let mut session = i_only_session();
    session.apply_action(GameAction::HardDrop);
    session.apply_action(GameAction::Pause);
    session.apply_action(GameAction::Restart);

    assert!(session.running());
    assert!(!session.paused());
    assert_eq!(session.board().row_fill(19), 0);
}

#[test]
fn test_hold_once_per_spawn() {
    let mut session = GameSession::with_seed(
        7,
        SessionConfig {
            advanced_mode: true,
            ..SessionConfig::default()
        },
    );
    session.start();
    let first = session.active().unwrap().piece.kind();

    assert!(session.apply_action(GameAction::Hold));
    assert_eq!(session.held().unwrap().kind(), first);
    let after_first_hold = session.active();

    assert!(!session.apply_action(GameAction::Hold));
    assert_eq!(session.active(), after_first_hold);
    assert_eq!(session.held().unwrap().kind(), first);

    session.apply_action(GameAction::HardDrop);
    assert!(session.can_hold());
    assert!(session.apply_action(GameAction::Hold));
    assert_eq!(session.active().unwrap().piece.kind(), first);
}

#[test]
fn test_advanced_mode_uses_bag() {
    let mut session = GameSession::with_seed(99, SessionConfig::default());
    assert_eq!(session.randomizer_mode(), RandomizerMode::Uniform);
    session.set_advanced_mode(true);
    assert_eq!(session.randomizer_mode(), RandomizerMode::Bag);
    session.start();

    // A fresh bag: the first seven spawns are all different.
    let mut seen = Vec::new();
    for _ in 0..7 {
        let kind = session.active().unwrap().piece.kind();
        assert!(!seen.contains(&kind));
        seen.push(kind);
        session.apply_action(GameAction::HardDrop);
        if session.game_over() {
            break;
        }
    }
    assert_eq!(seen.len(), 7);
}

#[test]
fn test_game_over_and_restart() {
    let mut session = i_only_session();
    for _ in 0..20 {
        session.apply_action(GameAction::HardDrop);
    }
    assert!(session.game_over());
    let snap = session.snapshot();
    assert!(snap.game_over && !snap.running);

    for action in [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Pause,
    ] {
        assert!(!session.apply_action(action));
    }

    session.apply_action(GameAction::Restart);
    assert!(!session.game_over());
    assert_eq!(session.score(), 0);
    assert_eq!(session.board().row_fill(0), 0);
}

#[test]
fn test_preview_setting_round_trip() {
    let mut session = i_only_session();
    for count in [3, 5, 1, 4] {
        session.set_preview_count(count);
        assert_eq!(session.preview().len(), count);
        assert_eq!(session.snapshot().next_pieces().count(), count);
    }
    session.set_preview_count(9);
    assert_eq!(session.preview().len(), 5);
}
