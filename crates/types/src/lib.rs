//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, persistence, journaling).
//!
//! # Board Dimensions
//!
//! The playing area is 240x480 units with 20-unit squares:
//!
//! - **Columns**: 12 (indexed 0-11, left to right)
//! - **Rows**: 24 (indexed 0-23, top to bottom)
//!
//! # Levels
//!
//! | Level | Points to advance | Fall interval |
//! |-------|-------------------|---------------|
//! | 0 | 5000 | 650ms |
//! | 1 | 50000 | 580ms |
//! | 2 | 100000 | 510ms |
//! | 3 | 150000 | 440ms |
//! | 4 | 200000 | 370ms |
//! | 5 | 300000 | 300ms |
//! | 6 | 400000 | 230ms |
//! | 7 | (max) | 160ms |
//!
//! # Examples
//!
//! ```
//! use quadfall_types::{GameCommand, PieceKind, COLUMNS, ROWS};
//!
//! let kind = PieceKind::from_index(5).unwrap();
//! assert_eq!(kind, PieceKind::Pyramid);
//! assert_eq!(PieceKind::from_str("pyramid"), Some(PieceKind::Pyramid));
//!
//! assert_eq!(GameCommand::from_str("hardDrop"), Some(GameCommand::HardDrop));
//!
//! assert_eq!(COLUMNS, 12);
//! assert_eq!(ROWS, 24);
//! ```

use std::fmt;

/// Side length of one square in playing-area units.
pub const SQUARE_SIDE: u16 = 20;

/// Width of the playing area in units.
pub const PLAYING_AREA_WIDTH: u16 = 240;

/// Height of the playing area in units.
pub const PLAYING_AREA_HEIGHT: u16 = 480;

/// Board width in cells (12 columns)
pub const COLUMNS: u8 = (PLAYING_AREA_WIDTH / SQUARE_SIDE) as u8;

/// Board height in cells (24 rows)
pub const ROWS: u8 = (PLAYING_AREA_HEIGHT / SQUARE_SIDE) as u8;

/// Number of squares in every tetromino.
pub const SQUARES_PER_PIECE: usize = 4;

/// Number of tetromino kinds.
pub const KIND_COUNT: usize = 7;

/// Rows covered by a soft fall.
pub const SOFT_FALL_ROWS: i8 = 6;

/// Number of levels (0-based, so the last level is `LEVEL_COUNT - 1`).
pub const LEVEL_COUNT: u8 = 8;

/// Highest reachable level.
pub const MAX_LEVEL: u8 = LEVEL_COUNT - 1;

/// Cumulative points needed to leave each level.
pub const LEVEL_THRESHOLDS: [u32; LEVEL_COUNT as usize] =
    [5000, 50000, 100000, 150000, 200000, 300000, 400000, 500000];

/// Fall interval at level 0 (milliseconds per row).
pub const STARTING_SPEED_MS: u32 = 650;

/// Fall interval reduction per level.
pub const SPEED_STEP_MS: u32 = 70;

/// The fall interval never drops below this.
pub const MIN_SPEED_MS: u32 = 50;

/// Interval of the playtime clock.
pub const CLOCK_TICK_MS: u32 = 1000;

/// Points awarded for every landed piece.
pub const BASE_POINTS: u32 = 100;

/// Rotations allowed per piece before the turn penalty applies.
pub const FREE_TURNS: u32 = 3;

/// Penalty per rotation once `FREE_TURNS` is exceeded.
pub const TURN_PENALTY: u32 = 5;

/// Points per cleared row (fewer than `TETRIS_ROWS` rows).
pub const ROW_POINTS: u32 = 1000;

/// Points per cleared row when clearing `TETRIS_ROWS` or more at once.
pub const TETRIS_ROW_POINTS: u32 = 2000;

/// Rows cleared by one landing that count as a tetris.
pub const TETRIS_ROWS: u32 = 4;

/// Number of ranked leaderboard rows.
pub const LEADERBOARD_SIZE: usize = 3;

/// Label used for players (and leaderboard rows) without a name.
pub const DEFAULT_PLAYER_NAME: &str = "No name";

/// Colors available per level.
pub const COLORS_PER_LEVEL: usize = 5;

/// Piece colors, one palette per level.
pub const PALETTES: [[Color; COLORS_PER_LEVEL]; LEVEL_COUNT as usize] = [
    [
        Color::from_hex(0x0444BF),
        Color::from_hex(0x0584F2),
        Color::from_hex(0x0AAFF1),
        Color::from_hex(0xEDF259),
        Color::from_hex(0xA79674),
    ],
    [
        Color::from_hex(0x04060F),
        Color::from_hex(0x03353E),
        Color::from_hex(0x0294A5),
        Color::from_hex(0xA79C93),
        Color::from_hex(0xC1403D),
    ],
    [
        Color::from_hex(0xBE3B45),
        Color::from_hex(0xF07995),
        Color::from_hex(0xF3F1F3),
        Color::from_hex(0xA58E87),
        Color::from_hex(0xBE302B),
    ],
    [
        Color::from_hex(0xA4A4BF),
        Color::from_hex(0x16235A),
        Color::from_hex(0x2A3457),
        Color::from_hex(0x888C46),
        Color::from_hex(0xF2EAED),
    ],
    [
        Color::from_hex(0xE0E8F0),
        Color::from_hex(0x51A2D9),
        Color::from_hex(0x53C0F0),
        Color::from_hex(0xB9E5F3),
        Color::from_hex(0x8A140E),
    ],
    [
        Color::from_hex(0x55D9C0),
        Color::from_hex(0xC7F6EC),
        Color::from_hex(0x107050),
        Color::from_hex(0x02231C),
        Color::from_hex(0x4DD8AD),
    ],
    [
        Color::from_hex(0xBD3E85),
        Color::from_hex(0x182657),
        Color::from_hex(0x121F40),
        Color::from_hex(0xD59B2D),
        Color::from_hex(0x8D541E),
    ],
    [
        Color::from_hex(0xC2D3DA),
        Color::from_hex(0x81A3A7),
        Color::from_hex(0x585A56),
        Color::from_hex(0xF1F3F2),
        Color::from_hex(0x272424),
    ],
];

/// 24-bit RGB color of a piece square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Board coordinate: x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the coordinate lies on the board.
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < COLUMNS as i8 && self.y >= 0 && self.y < ROWS as i8
    }
}

/// The seven tetromino kinds
///
/// - **Horizontal**: straight bar of four
/// - **LeftCorner**: corner square on the upper left
/// - **RightCorner**: corner square on the upper right
/// - **Square**: 2x2 block
/// - **StepUpRight**: step rising to the right
/// - **Pyramid**: three-wide base with a center cap
/// - **StepUpLeft**: step rising to the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Horizontal,
    LeftCorner,
    RightCorner,
    Square,
    StepUpRight,
    Pyramid,
    StepUpLeft,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; KIND_COUNT] = [
        PieceKind::Horizontal,
        PieceKind::LeftCorner,
        PieceKind::RightCorner,
        PieceKind::Square,
        PieceKind::StepUpRight,
        PieceKind::Pyramid,
        PieceKind::StepUpLeft,
    ];

    /// Catalog index in `0..KIND_COUNT`.
    pub fn index(&self) -> usize {
        match self {
            PieceKind::Horizontal => 0,
            PieceKind::LeftCorner => 1,
            PieceKind::RightCorner => 2,
            PieceKind::Square => 3,
            PieceKind::StepUpRight => 4,
            PieceKind::Pyramid => 5,
            PieceKind::StepUpLeft => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive, `_` and `-` ignored)
    ///
    /// # Examples
    ///
    /// ```
    /// use quadfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("step_up_right"), Some(PieceKind::StepUpRight));
    /// assert_eq!(PieceKind::from_str("Square"), Some(PieceKind::Square));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "horizontal" => Some(PieceKind::Horizontal),
            "leftcorner" => Some(PieceKind::LeftCorner),
            "rightcorner" => Some(PieceKind::RightCorner),
            "square" => Some(PieceKind::Square),
            "stepupright" => Some(PieceKind::StepUpRight),
            "pyramid" => Some(PieceKind::Pyramid),
            "stepupleft" => Some(PieceKind::StepUpLeft),
            _ => None,
        }
    }

    /// Convert to snake_case string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Horizontal => "horizontal",
            PieceKind::LeftCorner => "left_corner",
            PieceKind::RightCorner => "right_corner",
            PieceKind::Square => "square",
            PieceKind::StepUpRight => "step_up_right",
            PieceKind::Pyramid => "pyramid",
            PieceKind::StepUpLeft => "step_up_left",
        }
    }
}

/// Horizontal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

/// How new pieces enter play after a landing.
///
/// - **Automatic**: the next piece spawns as soon as the previous one lands
/// - **Manual**: the player releases every piece with a manual drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DropMode {
    #[default]
    Automatic,
    Manual,
}

impl DropMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "automatic" | "auto" => Some(DropMode::Automatic),
            "manual" => Some(DropMode::Manual),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DropMode::Automatic => "automatic",
            DropMode::Manual => "manual",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            DropMode::Automatic => DropMode::Manual,
            DropMode::Manual => DropMode::Automatic,
        }
    }
}

/// Lifecycle phase of a game.
///
/// Transitions:
///
/// | From | Event | To |
/// |------|-------|----|
/// | Running | pause | Paused |
/// | Paused | resume | Running |
/// | Running | spawn overlaps stack | Over |
/// | any | new game | Running |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Paused,
    Over,
}

/// Commands the presentation layer issues to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Reset everything and start a fresh game
    NewGame,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Fall six rows, or to the bottom when blocked
    SoftDrop,
    /// Fall to the lowest free position
    HardDrop,
    /// Rotate 90° counter-clockwise
    Rotate,
    /// Mirror about the vertical axis
    Reflect,
    /// Exchange with the held piece
    Hold,
    Pause,
    Resume,
    TogglePause,
    /// Release the next piece (manual mode)
    ManualDrop,
    /// Switch between automatic and manual mode
    ToggleMode,
}

impl GameCommand {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use quadfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("reflect"), Some(GameCommand::Reflect));
    /// assert_eq!(GameCommand::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newgame" => Some(GameCommand::NewGame),
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "harddrop" => Some(GameCommand::HardDrop),
            "rotate" => Some(GameCommand::Rotate),
            "reflect" => Some(GameCommand::Reflect),
            "hold" => Some(GameCommand::Hold),
            "pause" => Some(GameCommand::Pause),
            "resume" => Some(GameCommand::Resume),
            "togglepause" => Some(GameCommand::TogglePause),
            "manualdrop" => Some(GameCommand::ManualDrop),
            "togglemode" => Some(GameCommand::ToggleMode),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::NewGame => "newGame",
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::Reflect => "reflect",
            GameCommand::Hold => "hold",
            GameCommand::Pause => "pause",
            GameCommand::Resume => "resume",
            GameCommand::TogglePause => "togglePause",
            GameCommand::ManualDrop => "manualDrop",
            GameCommand::ToggleMode => "toggleMode",
        }
    }
}

/// Advisory message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    GameStarted,
    NotStarted,
    AlreadyOver,
    Paused,
    Resumed,
    /// Carries the 1-based level for display.
    LevelUp(u8),
    MaxLevel,
    AutomaticMode,
    ManualMode,
    GameFinished,
    Welcome(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::GameStarted => f.write_str("Game started."),
            Notice::NotStarted => f.write_str("Game has not started."),
            Notice::AlreadyOver => f.write_str("Game is over."),
            Notice::Paused => f.write_str("Game pause."),
            Notice::Resumed => f.write_str("Continue game."),
            Notice::LevelUp(level) => write!(f, "Level up. Level {}", level),
            Notice::MaxLevel => f.write_str("Maximum level."),
            Notice::AutomaticMode => f.write_str("Play automatically."),
            Notice::ManualMode => f.write_str("Play manually."),
            Notice::GameFinished => f.write_str("Game finish."),
            Notice::Welcome(name) => write!(f, "Welcome {}.", name),
        }
    }
}

/// Engine-side event, drained by the caller after each command or tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started {
        mode: DropMode,
    },
    Spawned {
        kind: PieceKind,
        color: Color,
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
        kind: PieceKind,
    },
    GameOver {
        points: u32,
        playtime_secs: u32,
    },
    Notice(Notice),
}
