//! JSON-lines event journal.
//!
//! Each record is one JSON object per line with a millisecond timestamp relative to the
//! journal start, e.g.
//!
//! ```text
//! {"t_ms":1520,"event":"landed","rows_cleared":1,"points_awarded":1100,"tetris":false}
//! {"t_ms":1521,"event":"command","command":"hardDrop","accepted":true}
//! ```
//!
//! A journal without a path is a no-op sink. Write failures disable the journal after
//! one `[Journal]` line on stderr; they never interrupt the game.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::ScoreEntry;
use crate::types::{GameCommand, GameEvent};

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record<'a> {
    Started {
        mode: &'static str,
    },
    Spawned {
        kind: &'static str,
        color: String,
    },
    Landed {
        rows_cleared: u32,
        points_awarded: u32,
        tetris: bool,
    },
    LevelChanged {
        level: u8,
        speed_ms: u32,
    },
    Held {
        kind: &'static str,
    },
    GameOver {
        points: u32,
        playtime_secs: u32,
    },
    Notice {
        message: String,
    },
    Command {
        command: &'static str,
        accepted: bool,
    },
    Ranked {
        rank: usize,
        name: &'a str,
        points: u32,
        playtime_secs: u32,
    },
}

impl Record<'_> {
    fn from_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Started { mode } => Record::Started {
                mode: mode.as_str(),
            },
            GameEvent::Spawned { kind, color } => Record::Spawned {
                kind: kind.as_str(),
                color: color.to_hex_string(),
            },
            GameEvent::Landed {
                rows_cleared,
                points_awarded,
                tetris,
            } => Record::Landed {
                rows_cleared: *rows_cleared,
                points_awarded: *points_awarded,
                tetris: *tetris,
            },
            GameEvent::LevelChanged { level, speed_ms } => Record::LevelChanged {
                level: *level,
                speed_ms: *speed_ms,
            },
            GameEvent::Held { kind } => Record::Held {
                kind: kind.as_str(),
            },
            GameEvent::GameOver {
                points,
                playtime_secs,
            } => Record::GameOver {
                points: *points,
                playtime_secs: *playtime_secs,
            },
            GameEvent::Notice(notice) => Record::Notice {
                message: notice.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Line<'a> {
    t_ms: u64,
    #[serde(flatten)]
    record: Record<'a>,
}

pub struct Journal {
    out: Option<BufWriter<File>>,
    started: Instant,
}

impl Journal {
    /// A journal that records nothing
    pub fn disabled() -> Self {
        Self {
            out: None,
            started: Instant::now(),
        }
    }

    /// Open (append) the journal at `path`, or a disabled journal for `None`
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open journal {}", path.display()))?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            started: Instant::now(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    fn write(&mut self, record: Record<'_>) -> Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };
        let line = Line {
            t_ms: self.started.elapsed().as_millis() as u64,
            record,
        };
        serde_json::to_writer(&mut *out, &line)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    fn write_or_disable(&mut self, record: Record<'_>) {
        if let Err(e) = self.write(record) {
            eprintln!("[Journal] write failed, journal disabled: {:#}", e);
            self.out = None;
        }
    }

    pub fn event(&mut self, event: &GameEvent) {
        self.write_or_disable(Record::from_event(event));
    }

    pub fn command(&mut self, command: GameCommand, accepted: bool) {
        self.write_or_disable(Record::Command {
            command: command.as_str(),
            accepted,
        });
    }

    /// A finished game that entered the leaderboard
    pub fn ranked(&mut self, rank: usize, entry: &ScoreEntry) {
        self.write_or_disable(Record::Ranked {
            rank,
            name: &entry.name,
            points: entry.points,
            playtime_secs: entry.playtime_secs,
        });
    }
}
