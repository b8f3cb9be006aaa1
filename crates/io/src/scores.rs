//! High-score file persistence.
//!
//! The file holds exactly three `name,points,playtime_seconds` lines and is rewritten
//! in full on every store. A missing file loads as an empty leaderboard.
//!
//! [`HighScores`] pairs the file with the in-memory board and submits each game's result
//! at most once; the file is rewritten at every game end whether or not the result ranks.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::{Leaderboard, ScoreEntry};

#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Leaderboard> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Leaderboard::parse(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Leaderboard::new()),
            Err(e) => Err(e)
                .with_context(|| format!("failed to read score file {}", self.path.display())),
        }
    }

    pub fn store(&self, board: &Leaderboard) -> Result<()> {
        fs::write(&self.path, board.to_text())
            .with_context(|| format!("failed to write score file {}", self.path.display()))
    }
}

/// The leaderboard of a session and the file it is persisted to
#[derive(Debug, Clone)]
pub struct HighScores {
    file: ScoreFile,
    board: Leaderboard,
    submitted: bool,
}

impl HighScores {
    pub fn new(file: ScoreFile, board: Leaderboard) -> Self {
        Self {
            file,
            board,
            submitted: false,
        }
    }

    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    /// A new game started; its result may be submitted again
    pub fn rearm(&mut self) {
        self.submitted = false;
    }

    /// Insert the result of the current game unless it was already submitted.
    ///
    /// Returns the rank taken, if any.
    pub fn submit(&mut self, entry: ScoreEntry) -> Option<usize> {
        if self.submitted {
            return None;
        }
        self.submitted = true;
        self.board.insert(entry)
    }

    /// Rewrite the file with the current board
    pub fn store(&self) -> Result<()> {
        self.file.store(&self.board)
    }
}
