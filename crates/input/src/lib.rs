//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`]s. Every key press is
//! one command; there is no auto-repeat handling beyond what the terminal delivers.

pub mod map;

pub use quadfall_types as types;

pub use map::{handle_key_event, should_quit};
