//! Run configuration from environment variables.
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `QUADFALL_SCORES_PATH` | high-score file | `highest_scores.txt` |
//! | `QUADFALL_PLAYER` | player name | `No name` |
//! | `QUADFALL_SEED` | generator seed | wall clock |
//! | `QUADFALL_MODE` | `automatic` or `manual` | `automatic` |
//! | `QUADFALL_LOG_PATH` | JSON-lines journal | disabled |
//!
//! Unparseable values fall back to the defaults.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{DropMode, DEFAULT_PLAYER_NAME};

pub const DEFAULT_SCORES_PATH: &str = "highest_scores.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub scores_path: PathBuf,
    pub player: String,
    pub seed: Option<u32>,
    pub mode: DropMode,
    pub log_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            player: DEFAULT_PLAYER_NAME.to_string(),
            seed: None,
            mode: DropMode::Automatic,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        Self {
            scores_path: non_empty("QUADFALL_SCORES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.scores_path),
            player: non_empty("QUADFALL_PLAYER").unwrap_or(defaults.player),
            seed: non_empty("QUADFALL_SEED").and_then(|s| s.parse().ok()),
            mode: non_empty("QUADFALL_MODE")
                .and_then(|s| DropMode::from_str(&s))
                .unwrap_or(defaults.mode),
            log_path: non_empty("QUADFALL_LOG_PATH").map(PathBuf::from),
        }
    }

    /// Configured seed, or one derived from the wall clock
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
                .unwrap_or(1)
        })
    }
}
