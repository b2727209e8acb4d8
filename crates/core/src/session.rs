//! Game session - the single aggregate that owns a running game
//!
//! Ties together the board, the falling piece, the preview queue and hold
//! slot, and the score engine. Input is applied synchronously through
//! [`GameSession::apply_action`]; gravity is driven by the host calling
//! [`GameSession::tick`] once per frame with a monotonic timestamp.
//!
//! Lifecycle: idle → running ⇄ paused → game over → (restart) running.
//! Game over is only left through `Restart`.

use crate::board::Board;
use crate::controller::{ActivePiece, MoveResult};
use crate::pieces::Piece;
use crate::queue::{clamp_preview_count, QueueManager};
use crate::rng::{RandomSource, RandomizerMode, SimpleRng};
use crate::scoring::ScoreEngine;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{CoreLastEvent, GameAction, DEFAULT_PREVIEW_COUNT, MAX_PREVIEW_COUNT};

/// Player-adjustable settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Preview length, clamped to `1..=MAX_PREVIEW_COUNT`.
    pub preview_count: usize,
    /// Bag randomizer and the hold slot.
    pub advanced_mode: bool,
    pub show_ghost: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preview_count: DEFAULT_PREVIEW_COUNT,
            advanced_mode: false,
            show_ghost: true,
        }
    }
}

impl SessionConfig {
    /// Same settings with the preview length forced into range.
    pub fn clamped(self) -> Self {
        Self {
            preview_count: clamp_preview_count(self.preview_count),
            ..self
        }
    }
}

fn randomizer_mode(advanced: bool) -> RandomizerMode {
    if advanced {
        RandomizerMode::Bag
    } else {
        RandomizerMode::Uniform
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R: RandomSource = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    queue: QueueManager<R>,
    scoring: ScoreEngine,
    advanced_mode: bool,
    show_ghost: bool,
    running: bool,
    paused: bool,
    game_over: bool,
    /// Timestamp of the last gravity step; `None` until the first tick
    /// after start or resume.
    last_drop_ms: Option<u64>,
    /// Timestamp passed to the most recent `tick`.
    last_tick_ms: Option<u64>,
    /// Interval time already used up when the game was paused; the first
    /// tick after resuming backdates the baseline by this much.
    resume_elapsed_ms: Option<u64>,
    /// Last lock/game-over event (consumed by observers).
    last_event: Option<CoreLastEvent>,
}

impl GameSession<SimpleRng> {
    /// Create an idle session with the built-in LCG seeded by `seed`.
    pub fn with_seed(seed: u32, config: SessionConfig) -> Self {
        Self::new(SimpleRng::new(seed), config)
    }

    /// Current generator state. A session built with
    /// `with_seed(rng_state(), config())` and started deals the same pieces
    /// as a `restart` issued now.
    pub fn rng_state(&self) -> u32 {
        self.queue.randomizer().rng().state()
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create an idle session; nothing spawns until [`GameSession::start`].
    pub fn new(rng: R, config: SessionConfig) -> Self {
        Self {
            board: Board::new(),
            active: None,
            queue: QueueManager::new(
                rng,
                randomizer_mode(config.advanced_mode),
                config.preview_count,
            ),
            scoring: ScoreEngine::new(),
            advanced_mode: config.advanced_mode,
            show_ghost: config.show_ghost,
            running: false,
            paused: false,
            game_over: false,
            last_drop_ms: None,
            last_tick_ms: None,
            resume_elapsed_ms: None,
            last_event: None,
        }
    }

    /// Start a game. Ignored while one is already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.restart();
    }

    /// Throw away the current game and start a fresh one.
    ///
    /// Board, queue, hold slot and score are rebuilt; settings and the
    /// random source carry over.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.queue.reset();
        self.queue.fill();
        self.scoring.reset();
        self.running = true;
        self.paused = false;
        self.game_over = false;
        self.last_drop_ms = None;
        self.last_tick_ms = None;
        self.resume_elapsed_ms = None;
        self.last_event = None;
        self.spawn_next();
    }

    /// Apply one input. Returns whether it changed anything.
    ///
    /// After game over only `Restart` is honored; while paused only `Pause`
    /// and `Restart` are.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                return true;
            }
            GameAction::Pause => return self.toggle_pause(),
            _ => {}
        }

        if !self.playable() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::SoftDrop => self.move_piece(0, 1),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Hold => self.hold(),
            GameAction::Pause | GameAction::Restart => false,
        }
    }

    /// Shift the active piece. A blocked downward step locks it.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        match active.try_move(&self.board, dx, dy) {
            MoveResult::Moved => true,
            MoveResult::Blocked => false,
            MoveResult::Landed => {
                self.lock_piece();
                true
            }
        }
    }

    pub fn rotate(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        match self.active.as_mut() {
            Some(active) => active.try_rotate(&self.board),
            None => false,
        }
    }

    /// Drop to the landing row and lock immediately.
    pub fn hard_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.hard_drop(&self.board);
        self.lock_piece();
        true
    }

    /// Swap the active piece with the hold slot (advanced mode only).
    ///
    /// The incoming piece appears at its spawn column on row 0 and is
    /// validated like a regular spawn.
    pub fn hold(&mut self) -> bool {
        if !self.advanced_mode || !self.playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        match self.queue.hold(active.piece) {
            Some(incoming) => {
                self.place(incoming);
                true
            }
            None => false,
        }
    }

    /// Toggle pause. Only a running game can be paused.
    ///
    /// Time spent paused does not count toward gravity: the part of the
    /// drop interval used up before pausing carries over to the resume.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.running || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        if self.paused {
            if let (Some(tick), Some(drop)) = (self.last_tick_ms, self.last_drop_ms) {
                self.resume_elapsed_ms = Some(tick.saturating_sub(drop));
            }
            self.last_drop_ms = None;
        }
        true
    }

    /// Advance gravity to `now_ms`.
    ///
    /// A step happens once strictly more than the drop interval has passed
    /// since the last one. Returns whether the piece stepped or locked.
    ///
    /// The first tick after start only records the baseline: a fresh game
    /// never drops on its very first frame, and the first step comes one
    /// full interval after it. The first tick after a
    /// resume sets the baseline back by the interval time already used
    /// before the pause.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.playable() {
            return false;
        }
        self.last_tick_ms = Some(now_ms);
        let last = match self.last_drop_ms {
            Some(last) => last,
            None => {
                let carried = self.resume_elapsed_ms.take().unwrap_or(0);
                let base = now_ms.saturating_sub(carried);
                self.last_drop_ms = Some(base);
                base
            }
        };
        if now_ms.saturating_sub(last) <= u64::from(self.scoring.drop_interval_ms()) {
            return false;
        }
        self.last_drop_ms = Some(now_ms);
        self.move_piece(0, 1)
    }

    /// Landing row of the active piece, or `None` when ghost display is off.
    pub fn ghost_y(&self) -> Option<i8> {
        if !self.show_ghost {
            return None;
        }
        self.active.map(|active| active.landing_y(&self.board))
    }

    /// Change the preview length (clamped). A running game resizes its
    /// queue immediately.
    pub fn set_preview_count(&mut self, count: usize) {
        if self.running {
            self.queue.resize(count);
        } else {
            self.queue.set_preview_count(count);
        }
    }

    /// Toggle the bag randomizer and hold. Turning it off empties the hold
    /// slot.
    pub fn set_advanced_mode(&mut self, enabled: bool) {
        self.advanced_mode = enabled;
        self.queue.set_mode(randomizer_mode(enabled));
        if !enabled {
            self.queue.clear_hold();
        }
    }

    pub fn set_show_ghost(&mut self, enabled: bool) {
        self.show_ghost = enabled;
    }

    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            preview_count: self.queue.preview_count(),
            advanced_mode: self.advanced_mode,
            show_ghost: self.show_ghost,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = [None; MAX_PREVIEW_COUNT];
        for (slot, piece) in out.next.iter_mut().zip(self.queue.pieces()) {
            *slot = Some(*piece);
        }
        out.preview_count = self.queue.pieces().len();
        out.hold = self.queue.held();
        out.can_hold = self.queue.can_hold();
        out.advanced_mode = self.advanced_mode;
        out.show_ghost = self.show_ghost;
        out.running = self.running;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.score = self.scoring.score();
        out.lines = self.scoring.lines();
        out.level = self.scoring.level();
        out.drop_interval_ms = self.scoring.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock/game-over event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn preview(&self) -> &[Piece] {
        self.queue.pieces()
    }

    pub fn preview_count(&self) -> usize {
        self.queue.preview_count()
    }

    pub fn held(&self) -> Option<Piece> {
        self.queue.held()
    }

    pub fn can_hold(&self) -> bool {
        self.queue.can_hold()
    }

    pub fn randomizer_mode(&self) -> RandomizerMode {
        self.queue.randomizer().mode()
    }

    pub fn score(&self) -> u32 {
        self.scoring.score()
    }

    pub fn lines(&self) -> u32 {
        self.scoring.lines()
    }

    pub fn level(&self) -> u32 {
        self.scoring.level()
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.scoring.drop_interval_ms()
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn advanced_mode(&self) -> bool {
        self.advanced_mode
    }

    pub fn show_ghost(&self) -> bool {
        self.show_ghost
    }

    fn playable(&self) -> bool {
        self.running && !self.paused && !self.game_over
    }

    /// Commit the active piece, clear lines, score, and spawn the next one.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board
            .commit(active.shape(), active.x, active.y, active.piece.kind());
        let cleared = self.board.clear_full_lines() as u32;
        let points = self.scoring.apply(cleared);

        self.last_event = Some(CoreLastEvent {
            locked: true,
            lines_cleared: cleared,
            line_clear_score: points,
            game_over: false,
        });

        self.spawn_next();
    }

    /// Regular spawn from the front of the queue; re-arms hold.
    fn spawn_next(&mut self) {
        let piece = self.queue.take_next();
        self.queue.mark_spawned();
        self.place(piece);
    }

    /// Make `piece` active at its spawn position, ending the game if it
    /// does not fit. The blocked piece stays visible.
    fn place(&mut self, piece: Piece) {
        let active = ActivePiece::spawn(piece);
        self.active = Some(active);
        if active.fits(&self.board) {
            return;
        }

        self.game_over = true;
        self.running = false;
        self.paused = false;
        match self.last_event.as_mut() {
            Some(event) => event.game_over = true,
            None => {
                self.last_event = Some(CoreLastEvent {
                    locked: false,
                    lines_cleared: 0,
                    line_clear_score: 0,
                    game_over: true,
                })
            }
        }
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1, SessionConfig::default())
    }
}
