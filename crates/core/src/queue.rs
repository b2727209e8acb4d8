//! Queue manager - next-piece preview queue and the hold slot.
//!
//! The preview queue always holds exactly `preview_count` pieces once
//! filled: it is consumed from the front and topped up at the back from the
//! randomizer. Shrinking the preview drops pieces from the back for good.
//!
//! Hold may be used once per spawned piece. The flag is re-armed by
//! [`QueueManager::mark_spawned`], which the session calls after every
//! successful regular spawn.

use arrayvec::ArrayVec;

use crate::pieces::{create_piece, Piece};
use crate::rng::{RandomSource, Randomizer, RandomizerMode, SimpleRng};
use crate::types::{DEFAULT_PREVIEW_COUNT, MAX_PREVIEW_COUNT};

#[derive(Debug, Clone)]
pub struct QueueManager<R: RandomSource = SimpleRng> {
    randomizer: Randomizer<R>,
    next: ArrayVec<Piece, MAX_PREVIEW_COUNT>,
    preview_count: usize,
    hold: Option<Piece>,
    can_hold: bool,
}

/// Clamp a requested preview length into `1..=MAX_PREVIEW_COUNT`.
pub fn clamp_preview_count(count: usize) -> usize {
    count.clamp(1, MAX_PREVIEW_COUNT)
}

impl<R: RandomSource> QueueManager<R> {
    /// Empty queue; call [`QueueManager::fill`] to generate the preview.
    pub fn new(rng: R, mode: RandomizerMode, preview_count: usize) -> Self {
        Self {
            randomizer: Randomizer::new(rng, mode),
            next: ArrayVec::new(),
            preview_count: clamp_preview_count(preview_count),
            hold: None,
            can_hold: true,
        }
    }

    pub fn preview_count(&self) -> usize {
        self.preview_count
    }

    /// Upcoming pieces, front first.
    pub fn pieces(&self) -> &[Piece] {
        &self.next
    }

    /// First `n` queued pieces (fewer if the queue is shorter).
    pub fn peek_next(&self, n: usize) -> &[Piece] {
        &self.next[..n.min(self.next.len())]
    }

    pub fn held(&self) -> Option<Piece> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn randomizer(&self) -> &Randomizer<R> {
        &self.randomizer
    }

    pub fn set_mode(&mut self, mode: RandomizerMode) {
        self.randomizer.set_mode(mode);
    }

    /// Pop the front piece and top the queue back up.
    ///
    /// Generates a piece directly when the queue is empty.
    pub fn take_next(&mut self) -> Piece {
        let piece = if self.next.is_empty() {
            self.generate()
        } else {
            self.next.remove(0)
        };
        self.fill();
        piece
    }

    /// Top up to `preview_count`, truncating anything beyond it.
    pub fn fill(&mut self) {
        self.next.truncate(self.preview_count);
        while self.next.len() < self.preview_count {
            let piece = self.generate();
            self.next.push(piece);
        }
    }

    /// Change the preview length without generating pieces.
    ///
    /// Excess pieces are discarded immediately.
    pub fn set_preview_count(&mut self, count: usize) {
        self.preview_count = clamp_preview_count(count);
        self.next.truncate(self.preview_count);
    }

    /// Change the preview length and regenerate to match.
    pub fn resize(&mut self, count: usize) {
        self.set_preview_count(count);
        self.fill();
    }

    /// Swap `current` with the hold slot.
    ///
    /// Returns the piece that becomes active, or `None` when hold was already
    /// used for this piece. An empty slot stores `current` and hands out the
    /// next queued piece; an occupied slot hands back the held piece as it
    /// was stored.
    pub fn hold(&mut self, current: Piece) -> Option<Piece> {
        if !self.can_hold {
            return None;
        }
        let incoming = match self.hold.replace(current) {
            Some(held) => held,
            None => self.take_next(),
        };
        self.can_hold = false;
        Some(incoming)
    }

    /// Re-arm hold after a new piece spawned.
    pub fn mark_spawned(&mut self) {
        self.can_hold = true;
    }

    /// Empty the hold slot and re-arm it.
    pub fn clear_hold(&mut self) {
        self.hold = None;
        self.can_hold = true;
    }

    /// Session restart: empty queue and hold, fresh bag.
    pub fn reset(&mut self) {
        self.next.clear();
        self.randomizer.reset();
        self.clear_hold();
    }

    fn generate(&mut self) -> Piece {
        create_piece(self.randomizer.next())
    }
}

impl Default for QueueManager<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::default(), RandomizerMode::Uniform, DEFAULT_PREVIEW_COUNT)
    }
}
