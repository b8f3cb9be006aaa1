//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders into a
//! simple framebuffer that is then diffed and flushed to the terminal.
//!
//! - Keeps `core` deterministic and free of I/O
//! - Two terminal columns per board cell to compensate for glyph aspect ratio
//! - Colors come straight from the cell colors of the snapshot

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use quadfall_core as core;
pub use quadfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, SidePanel, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
