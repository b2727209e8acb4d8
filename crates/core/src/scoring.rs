//! Scoring module - line clears to score, level and drop speed
//!
//! Points use the level in effect *before* the clear is counted:
//! `LINE_SCORES[min(n, 4)] * level`. Level is 1-based and rises every
//! `LINES_PER_LEVEL` cumulative lines; the drop interval shrinks by
//! `DROP_STEP_MS` per level down to `DROP_INTERVAL_MIN_MS`.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Base points for clearing `lines` rows at `level`.
///
/// Clears beyond four rows score like a four-row clear.
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx].saturating_mul(level)
}

/// Level reached after `lines` cumulative cleared lines (1-based).
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for `level`, floored at the minimum.
pub fn drop_interval_ms(level: u32) -> u32 {
    let step = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(step).max(DROP_INTERVAL_MIN_MS)
}

/// Running score, line count, level and gravity speed of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEngine {
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
        }
    }

    /// Count a lock that cleared `lines_cleared` rows and return the points
    /// awarded. A zero-line lock changes nothing.
    pub fn apply(&mut self, lines_cleared: u32) -> u32 {
        if lines_cleared == 0 {
            return 0;
        }
        let points = line_clear_points(lines_cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.level = level_for_lines(self.lines);
        self.drop_interval_ms = drop_interval_ms(self.level);
        points
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}
