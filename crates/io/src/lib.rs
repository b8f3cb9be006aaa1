//! Process-facing services around the pure core.
//!
//! - [`config`]: run configuration from environment variables
//! - [`scores`]: the high-score file and the session's [`HighScores`] (load on start, full
//!   rewrite on game end or quit)
//! - [`journal`]: optional JSON-lines event journal
//!
//! Everything here returns `anyhow::Result`; the core itself never fails.

pub mod config;
pub mod journal;
pub mod scores;

pub use quadfall_core as core;
pub use quadfall_types as types;

pub use config::RunConfig;
pub use journal::Journal;
pub use scores::{HighScores, ScoreFile};
