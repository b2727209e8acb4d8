//! Terminal Tetris runner (default binary).
//!
//! Reads configuration from the environment, then runs a fixed-cadence
//! frame loop: render the session snapshot, apply pending key presses in
//! arrival order, and tick gravity with the elapsed time.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use retro_tetris::config::GameConfig;
use retro_tetris::core::{GameSession, GameSnapshot};
use retro_tetris::event_log::{EventLog, EventRecord};
use retro_tetris::input::{map_key, should_quit, KeyCommand};
use retro_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use retro_tetris::types::{GameAction, FRAME_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env().context("invalid configuration")?;

    let mut log = match &config.event_log {
        Some(path) => EventLog::open(path).unwrap_or_else(|e| {
            eprintln!(
                "[EventLog] cannot open {}: {}; continuing without event log",
                path.display(),
                e
            );
            EventLog::disabled()
        }),
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state before reporting anything.
    let restored = term.exit();
    log.flush();
    let last = result?;
    restored?;

    eprintln!(
        "[Session] seed={} score={} lines={} level={} game_over={} events={}",
        config.seed,
        last.score,
        last.lines,
        last.level,
        last.game_over,
        log.records_written()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, log: &mut EventLog) -> Result<GameSnapshot> {
    let mut session = GameSession::with_seed(config.seed, config.session);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut frame_start = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the frame is used up.
        let mut timeout = frame.saturating_sub(frame_start.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        session.snapshot_into(&mut snap);
                        return Ok(snap);
                    }
                    if let Some(command) = map_key(key) {
                        let now = now_ms();
                        apply_command(&mut session, command, log, now);
                        drain_events(&mut session, log, now, &mut snap);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            timeout = frame.saturating_sub(frame_start.elapsed());
        }
        frame_start = Instant::now();

        // Tick.
        let now = now_ms();
        session.tick(now);
        drain_events(&mut session, log, now, &mut snap);
    }
}

/// Log the session's pending lock/game-over event, if any.
fn drain_events(session: &mut GameSession, log: &mut EventLog, now: u64, snap: &mut GameSnapshot) {
    if let Some(event) = session.take_last_event() {
        session.snapshot_into(snap);
        log.record_core_event(now, event, snap);
    }
}

fn apply_command(
    session: &mut GameSession,
    command: KeyCommand,
    log: &mut EventLog,
    now: u64,
) {
    match command {
        KeyCommand::Action(GameAction::Restart) => {
            // Read before the restart draws from the generator.
            let seed = session.rng_state();
            session.apply_action(GameAction::Restart);
            log.record(now, &EventRecord::session_start(seed, session.config()));
        }
        KeyCommand::Action(action) => {
            session.apply_action(action);
        }
        KeyCommand::IncreasePreview => {
            session.set_preview_count(session.preview_count() + 1);
        }
        KeyCommand::DecreasePreview => {
            session.set_preview_count(session.preview_count().saturating_sub(1));
        }
        KeyCommand::ToggleAdvanced => {
            session.set_advanced_mode(!session.advanced_mode());
        }
        KeyCommand::ToggleGhost => {
            session.set_show_ghost(!session.show_ghost());
        }
    }
}
