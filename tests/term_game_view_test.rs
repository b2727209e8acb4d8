use retro_tetris::core::{GameSession, GameSnapshot, SessionConfig};
use retro_tetris::term::{
    AnchorY, GameView, Viewport, GAME_OVER_MESSAGE, PAUSED_MESSAGE, START_MESSAGE,
};
use retro_tetris::types::GameAction;

fn running_session() -> GameSession {
    let mut session = GameSession::with_seed(1, SessionConfig::default());
    session.start();
    session
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // 10*2 by 20*1 board cells plus the border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot {
        running: true,
        ..GameSnapshot::default()
    };
    snap.board[19][0] = 1;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside the border: (1,1) origin.
    let y0 = 1 + 19;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = running_session().snapshot();
    snap.score = 1234;
    snap.lines = 10;
    snap.level = 2;

    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let text = fb.text();
    assert!(text.contains("SCORE 001234"));
    assert!(text.contains("LINES 010"));
    assert!(text.contains("LEVEL 02"));
    assert!(text.contains("NEXT"));
}

#[test]
fn term_view_skips_side_panel_on_narrow_viewports() {
    let snap = running_session().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 24));
    assert!(!fb.text().contains("SCORE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSnapshot::default();

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_settings_line_below_well() {
    let mut session = running_session();
    session.set_preview_count(3);
    session.set_show_ghost(false);

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&session.snapshot(), Viewport::new(40, 24));
    assert_eq!(fb.row_text(22).trim(), "NEXT 3 GHOST OFF CLASSIC");
}

#[test]
fn term_view_overlays_lifecycle_messages() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let idle = GameSession::with_seed(1, SessionConfig::default());
    assert!(view.render(&idle.snapshot(), vp).text().contains(START_MESSAGE));

    let mut session = running_session();
    let text = view.render(&session.snapshot(), vp).text();
    assert!(!text.contains(START_MESSAGE));

    session.apply_action(GameAction::Pause);
    assert!(view.render(&session.snapshot(), vp).text().contains(PAUSED_MESSAGE));

    session.apply_action(GameAction::Pause);
    while !session.game_over() {
        session.apply_action(GameAction::HardDrop);
    }
    assert!(view.render(&session.snapshot(), vp).text().contains(GAME_OVER_MESSAGE));
}

#[test]
fn term_view_shows_hold_box_only_in_advanced_mode() {
    let view = GameView::default();
    let vp = Viewport::new(60, 24);

    let mut session = running_session();
    assert!(!view.render(&session.snapshot(), vp).text().contains("HOLD"));

    session.set_advanced_mode(true);
    let text = view.render(&session.snapshot(), vp).text();
    assert!(text.contains("HOLD"));
    assert!(!text.contains("(used)"));

    session.apply_action(GameAction::Hold);
    assert!(view.render(&session.snapshot(), vp).text().contains("(used)"));
}

#[test]
fn term_view_ghost_follows_setting() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let mut session = running_session();
    assert!(view.render(&session.snapshot(), vp).text().contains('░'));

    session.set_show_ghost(false);
    assert!(!view.render(&session.snapshot(), vp).text().contains('░'));
}

#[test]
fn term_view_hides_active_piece_while_paused() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    let mut session = running_session();

    let playing = view.render(&session.snapshot(), vp).text();
    assert!(playing.contains('█'));

    session.apply_action(GameAction::Pause);
    let paused = view.render(&session.snapshot(), vp).text();
    assert!(!paused.contains('█'));
    assert!(!paused.contains('░'));
}
