//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management, and the high-score ranking.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule, golden outputs for the transforms
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`board`]: 12x24 occupancy grid with row removal and compaction
//! - [`pieces`]: Geometry catalog, tetromino placement and spawn centering
//! - [`movement`]: Collision checks, shifts, soft and hard fall
//! - [`transform`]: Centroid rotation and mirror reflection (no wall kicks)
//! - [`rng`]: Seeded generator of kinds and level-dependent colors
//! - [`scoring`]: Points per landing, level thresholds and the speed curve
//! - [`hold`]: Once-per-spawn hold slot
//! - [`leaderboard`]: Top-3 ranking and its text format
//! - [`game_state`]: The engine and its phase machine
//! - [`snapshot`]: Read-only projection for renderers
//!
//! # Game Rules
//!
//! - **Uniform generator**: every kind is equally likely on every draw
//! - **No wall kicks**: a rotation or reflection that does not fit is rejected
//! - **Landing on tick**: drops only move the piece; the gravity tick that finds it
//!   grounded commits it
//! - **Scoring**: 100 per landing minus a turn penalty, plus 1000 per row (2000 per row
//!   for four or more rows at once)
//! - **Levels**: eight levels, one step per landing at most, 70ms faster each
//!
//! # Example
//!
//! ```
//! use quadfall_core::GameState;
//! use quadfall_types::GameCommand;
//!
//! let mut game = GameState::new(12345);
//! game.new_game();
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::HardDrop);
//! game.tick_gravity();
//!
//! assert_eq!(game.points(), 100);
//! ```

pub mod board;
pub mod game_state;
pub mod hold;
pub mod leaderboard;
pub mod movement;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod transform;

pub use quadfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use game_state::{split_hms, GameState};
pub use hold::HoldSlot;
pub use leaderboard::{sort_score_board, Leaderboard, ScoreEntry};
pub use pieces::{Bounds, PieceSpec, Tetromino};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_point, speed_for_level, LevelChange, Progress};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use transform::{try_reflect, try_rotate};
