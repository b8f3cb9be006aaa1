//! Snapshot module - a copyable, read-only projection of a game
//!
//! Renderers read a `GameSnapshot` filled by `GameState::snapshot_into` and never touch
//! the engine itself.

use crate::pieces::{catalog_squares, PieceSpec, Tetromino};
use crate::types::{
    Color, Coord, DropMode, GamePhase, PieceKind, COLUMNS, PALETTES, ROWS, SQUARES_PER_PIECE,
    STARTING_SPEED_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    pub squares: [Coord; SQUARES_PER_PIECE],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            color: value.color,
            squares: *value.squares(),
        }
    }
}

/// Read-only projection of a game for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Option<Color>; COLUMNS as usize]; ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceSpec,
    pub held: Option<PieceSpec>,
    pub can_hold: bool,
    pub phase: GamePhase,
    pub mode: DropMode,
    pub level: u8,
    pub points: u32,
    pub lines_cleared: u32,
    pub tetris_count: u32,
    pub speed_ms: u32,
    pub turn_count: u32,
    pub playtime_secs: u32,
}

impl GameSnapshot {
    /// Reset to the projection of a game that has not started
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Squares of the "next" piece in catalog placement
    pub fn next_preview(&self) -> [Coord; SQUARES_PER_PIECE] {
        catalog_squares(self.next.kind)
    }

    /// Squares of the held piece in catalog placement
    pub fn held_preview(&self) -> Option<[Coord; SQUARES_PER_PIECE]> {
        self.held.map(|spec| catalog_squares(spec.kind))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; COLUMNS as usize]; ROWS as usize],
            active: None,
            next: PieceSpec::new(PieceKind::Horizontal, PALETTES[0][0]),
            held: None,
            can_hold: true,
            phase: GamePhase::NotStarted,
            mode: DropMode::Automatic,
            level: 0,
            points: 0,
            lines_cleared: 0,
            tetris_count: 0,
            speed_ms: STARTING_SPEED_MS,
            turn_count: 0,
            playtime_secs: 0,
        }
    }
}
