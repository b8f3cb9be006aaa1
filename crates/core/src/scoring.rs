//! Scoring module - points per landing and the level/speed progression
//!
//! A landing is worth a base of 100 points, reduced by 5 per rotation once more than
//! three rotations were used, plus 1000 per cleared row (2000 per row for a tetris).

use crate::types::{
    BASE_POINTS, FREE_TURNS, LEVEL_THRESHOLDS, MAX_LEVEL, MIN_SPEED_MS, ROW_POINTS,
    SPEED_STEP_MS, STARTING_SPEED_MS, TETRIS_ROWS, TETRIS_ROW_POINTS, TURN_PENALTY,
};

/// Whether a landing clearing `rows_cleared` rows counts as a tetris
pub fn is_tetris(rows_cleared: u32) -> bool {
    rows_cleared >= TETRIS_ROWS
}

/// Points for one landing
pub fn calculate_point(rows_cleared: u32, turns: u32) -> u32 {
    let base = if turns > FREE_TURNS {
        BASE_POINTS.saturating_sub(TURN_PENALTY.saturating_mul(turns))
    } else {
        BASE_POINTS
    };
    let per_row = if is_tetris(rows_cleared) {
        TETRIS_ROW_POINTS
    } else {
        ROW_POINTS
    };
    base.saturating_add(rows_cleared.saturating_mul(per_row))
}

/// Fall interval at a level, never below `MIN_SPEED_MS`
pub fn speed_for_level(level: u8) -> u32 {
    STARTING_SPEED_MS
        .saturating_sub(SPEED_STEP_MS.saturating_mul(level as u32))
        .max(MIN_SPEED_MS)
}

/// Outcome of crediting one landing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChange {
    None,
    /// Advanced to this (0-based) level
    Up(u8),
    /// Threshold reached at the last level
    AtMax,
}

/// Cumulative score, level and speed of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub level: u8,
    pub points: u32,
    pub lines_cleared: u32,
    pub tetris_count: u32,
    pub speed_ms: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            level: 0,
            points: 0,
            lines_cleared: 0,
            tetris_count: 0,
            speed_ms: STARTING_SPEED_MS,
        }
    }

    /// Credit a landing and advance at most one level.
    ///
    /// Returns the points awarded and the level outcome.
    pub fn record_landing(&mut self, rows_cleared: u32, turns: u32) -> (u32, LevelChange) {
        let awarded = calculate_point(rows_cleared, turns);
        self.points = self.points.saturating_add(awarded);
        self.lines_cleared = self.lines_cleared.saturating_add(rows_cleared);
        if is_tetris(rows_cleared) {
            self.tetris_count += 1;
        }
        (awarded, self.check_level())
    }

    fn check_level(&mut self) -> LevelChange {
        if self.points < LEVEL_THRESHOLDS[self.level as usize] {
            return LevelChange::None;
        }
        if self.level >= MAX_LEVEL {
            return LevelChange::AtMax;
        }
        self.level += 1;
        self.speed_ms = speed_for_level(self.level);
        LevelChange::Up(self.level)
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
