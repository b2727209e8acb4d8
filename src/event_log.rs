//! Optional JSONL event log.
//!
//! Enabled with `TETRIS_EVENT_LOG=<path>`. Every record is one JSON object
//! per line, appended to the file:
//!
//! ```text
//! {"seq":0,"ts_ms":0,"type":"session_start","seed":42,"preview_count":1,"advanced_mode":false,"show_ghost":true}
//! {"seq":1,"ts_ms":5120,"type":"lock","lines_cleared":1,"points":100,"score":100,"lines":1,"level":1}
//! {"seq":9,"ts_ms":80110,"type":"game_over","score":100,"lines":1,"level":1}
//! ```
//!
//! A write failure is reported once on stderr and turns the log off;
//! gameplay is never interrupted by logging.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::{GameSnapshot, SessionConfig};
use crate::types::CoreLastEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    SessionStart {
        /// Generator state the game starts from; `GameSession::with_seed`
        /// with it and the logged settings replays the game.
        seed: u32,
        preview_count: usize,
        advanced_mode: bool,
        show_ghost: bool,
    },
    Lock {
        lines_cleared: u32,
        points: u32,
        score: u32,
        lines: u32,
        level: u32,
    },
    GameOver {
        score: u32,
        lines: u32,
        level: u32,
    },
}

impl EventRecord {
    pub fn session_start(seed: u32, config: SessionConfig) -> Self {
        EventRecord::SessionStart {
            seed,
            preview_count: config.preview_count,
            advanced_mode: config.advanced_mode,
            show_ghost: config.show_ghost,
        }
    }
}

#[derive(Serialize)]
struct LogLine<'a> {
    seq: u64,
    ts_ms: u64,
    #[serde(flatten)]
    event: &'a EventRecord,
}

/// Append-only JSONL writer. A disabled log accepts and drops records.
pub struct EventLog<W: Write = BufWriter<File>> {
    writer: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Open (creating if needed) `path` for appending.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: Some(writer),
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            writer: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Number of records written so far.
    pub fn records_written(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, ts_ms: u64, event: &EventRecord) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        self.buf.clear();
        let line = LogLine {
            seq: self.seq,
            ts_ms,
            event,
        };
        if let Err(e) = serde_json::to_writer(&mut self.buf, &line) {
            eprintln!("[EventLog] failed to encode record: {}", e);
            return;
        }
        self.buf.push(b'\n');

        match writer.write_all(&self.buf) {
            Ok(()) => self.seq += 1,
            Err(e) => {
                eprintln!("[EventLog] write failed, disabling event log: {}", e);
                self.writer = None;
            }
        }
    }

    /// Log whatever a session's last event reports, using `snap` for the
    /// running totals.
    pub fn record_core_event(&mut self, ts_ms: u64, event: CoreLastEvent, snap: &GameSnapshot) {
        if event.locked {
            self.record(
                ts_ms,
                &EventRecord::Lock {
                    lines_cleared: event.lines_cleared,
                    points: event.line_clear_score,
                    score: snap.score,
                    lines: snap.lines,
                    level: snap.level,
                },
            );
        }
        if event.game_over {
            self.record(
                ts_ms,
                &EventRecord::GameOver {
                    score: snap.score,
                    lines: snap.lines,
                    level: snap.level,
                },
            );
        }
    }

    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(e) = writer.flush() {
                eprintln!("[EventLog] flush failed, disabling event log: {}", e);
                self.writer = None;
            }
        }
    }

    /// Give back the underlying writer, if still enabled.
    pub fn into_inner(self) -> Option<W> {
        self.writer
    }
}
