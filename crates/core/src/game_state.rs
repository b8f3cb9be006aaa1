//! Game state module - the engine behind the command surface
//!
//! This module ties together board, pieces, generator, scoring and hold. It owns the
//! game phase machine and processes player commands, the gravity tick and the playtime
//! clock. Every command returns whether it was accepted; rejected commands leave the
//! state untouched.

use crate::board::Board;
use crate::hold::HoldSlot;
use crate::leaderboard::ScoreEntry;
use crate::movement::{
    can_move_down, can_move_left, can_move_right, hard_fall, move_down, move_left, move_right,
    soft_fall,
};
use crate::pieces::{PieceSpec, Tetromino};
use crate::rng::PieceGenerator;
use crate::scoring::{LevelChange, Progress};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::transform::{try_reflect, try_rotate};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: PieceSpec,
    hold: HoldSlot,
    generator: PieceGenerator,
    progress: Progress,
    phase: GamePhase,
    mode: DropMode,
    /// Rotation attempts since the falling piece spawned.
    turn_count: u32,
    playtime_secs: u32,
    player_name: String,
    /// Pending events (drained by the caller).
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed. The "next" slot is primed immediately.
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let next = generator.next_piece(0);

        Self {
            board: Board::new(),
            active: None,
            next,
            hold: HoldSlot::new(),
            generator,
            progress: Progress::new(),
            phase: GamePhase::NotStarted,
            mode: DropMode::Automatic,
            turn_count: 0,
            playtime_secs: 0,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn mode(&self) -> DropMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_piece(&self) -> PieceSpec {
        self.next
    }

    pub fn held(&self) -> Option<PieceSpec> {
        self.hold.held()
    }

    pub fn can_hold(&self) -> bool {
        self.hold.can_hold()
    }

    pub fn hold_occupied(&self) -> bool {
        self.hold.is_occupied()
    }

    pub fn level(&self) -> u8 {
        self.progress.level
    }

    pub fn points(&self) -> u32 {
        self.progress.points
    }

    pub fn lines_cleared(&self) -> u32 {
        self.progress.lines_cleared
    }

    pub fn tetris_count(&self) -> u32 {
        self.progress.tetris_count
    }

    /// Current gravity interval in milliseconds
    pub fn speed_ms(&self) -> u32 {
        self.progress.speed_ms
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn playtime_secs(&self) -> u32 {
        self.playtime_secs
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    /// Whether gravity ticks should currently be delivered
    pub fn wants_gravity(&self) -> bool {
        self.is_running() && self.active.is_some()
    }

    /// Drain pending events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn notice(&mut self, notice: Notice) {
        self.events.push(GameEvent::Notice(notice));
    }

    /// Reset everything except the generator, the mode and the player name, and start
    /// playing. In automatic mode the first piece spawns at once.
    pub fn new_game(&mut self) {
        self.board.reset();
        self.active = None;
        self.hold = HoldSlot::new();
        self.progress = Progress::new();
        self.turn_count = 0;
        self.playtime_secs = 0;
        self.next = self.generator.next_piece(0);
        self.phase = GamePhase::Running;

        self.events.push(GameEvent::Started { mode: self.mode });
        self.notice(Notice::GameStarted);

        if self.mode == DropMode::Automatic {
            self.spawn_next();
        }
    }

    /// Spawn from "next" and re-arm the hold slot
    fn spawn_next(&mut self) {
        self.hold.rearm();
        self.promote_next();
    }

    /// Promote "next" to the falling piece and refill "next"
    fn promote_next(&mut self) {
        let spec = self.next;
        self.next = self.generator.next_piece(self.progress.level);
        self.turn_count = 0;
        self.events.push(GameEvent::Spawned {
            kind: spec.kind,
            color: spec.color,
        });
        self.enter_play(Tetromino::spawn(spec));
    }

    fn enter_play(&mut self, piece: Tetromino) {
        if piece.overlaps(&self.board) {
            self.top_out(piece);
        } else {
            self.active = Some(piece);
        }
    }

    /// Lift an overlapping piece until its visible squares are free, commit them and end
    /// the game.
    fn top_out(&mut self, mut piece: Tetromino) {
        let fits_visible = |piece: &Tetromino, board: &Board| {
            piece
                .squares()
                .iter()
                .filter(|sq| sq.y >= 0)
                .all(|&sq| !board.is_occupied(sq))
        };
        while piece.bounds().bottom >= 0 {
            piece.translate(0, -1);
            if fits_visible(&piece, &self.board) {
                break;
            }
        }
        for &sq in piece.squares() {
            if sq.y >= 0 {
                self.board.place(sq, piece.color);
            }
        }

        self.active = None;
        self.phase = GamePhase::Over;
        self.events.push(GameEvent::GameOver {
            points: self.progress.points,
            playtime_secs: self.playtime_secs,
        });
        self.notice(Notice::GameFinished);
    }

    /// Move the falling piece one column
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let board = &self.board;
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        match direction {
            Direction::Left if can_move_left(piece, board) => {
                move_left(piece);
                true
            }
            Direction::Right if can_move_right(piece, board) => {
                move_right(piece);
                true
            }
            _ => false,
        }
    }

    /// Fall six rows (or to the bottom when blocked). Landing happens on the next tick.
    pub fn soft_drop(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let board = &self.board;
        match self.active.as_mut() {
            Some(piece) => soft_fall(piece, board) > 0,
            None => false,
        }
    }

    /// Fall to the lowest free position. Landing happens on the next tick.
    pub fn hard_drop(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let board = &self.board;
        match self.active.as_mut() {
            Some(piece) => hard_fall(piece, board) > 0,
            None => false,
        }
    }

    /// Rotate 90° counter-clockwise. Every attempt counts toward the turn penalty.
    pub fn rotate(&mut self) -> bool {
        if self.phase != GamePhase::Running || self.active.is_none() {
            return false;
        }
        self.turn_count += 1;
        let board = &self.board;
        self.active
            .as_mut()
            .map(|piece| try_rotate(piece, board))
            .unwrap_or(false)
    }

    /// Mirror the falling piece about its vertical center line
    pub fn reflect(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let board = &self.board;
        self.active
            .as_mut()
            .map(|piece| try_reflect(piece, board))
            .unwrap_or(false)
    }

    /// Exchange the falling piece with the hold slot (once per spawn)
    pub fn hold(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let Some(previous) = self.hold.exchange(piece.spec()) else {
            return false;
        };

        self.active = None;
        self.events.push(GameEvent::Held { kind: piece.kind });
        match previous {
            // The hold stays spent for the piece spawned in exchange.
            None => self.promote_next(),
            Some(spec) => self.enter_play(Tetromino::spawn(spec)),
        }
        true
    }

    /// Gravity step: move down one row, or land the piece.
    ///
    /// Landing commits the squares, clears full rows, scores, and (in automatic mode)
    /// spawns the next piece.
    pub fn tick_gravity(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };
        if can_move_down(&piece, &self.board) {
            move_down(&mut piece);
            self.active = Some(piece);
            return true;
        }
        self.land(piece);
        true
    }

    fn land(&mut self, piece: Tetromino) {
        for &sq in piece.squares() {
            self.board.place(sq, piece.color);
        }
        self.active = None;

        let rows_cleared = self.board.clear_full_rows();
        let (points_awarded, change) = self.progress.record_landing(rows_cleared, self.turn_count);
        self.events.push(GameEvent::Landed {
            rows_cleared,
            points_awarded,
            tetris: crate::scoring::is_tetris(rows_cleared),
        });

        match change {
            LevelChange::None => {}
            LevelChange::Up(level) => {
                self.events.push(GameEvent::LevelChanged {
                    level,
                    speed_ms: self.progress.speed_ms,
                });
                self.notice(Notice::LevelUp(level + 1));
            }
            LevelChange::AtMax => self.notice(Notice::MaxLevel),
        }

        if self.mode == DropMode::Automatic {
            self.spawn_next();
        }
    }

    /// Release the next piece in manual mode
    pub fn manual_drop(&mut self) -> bool {
        if self.phase != GamePhase::Running
            || self.mode != DropMode::Manual
            || self.active.is_some()
        {
            return false;
        }
        self.spawn_next();
        true
    }

    /// Suspend gravity. Rejected with an advisory notice before start and after game over.
    pub fn pause(&mut self) -> bool {
        match self.phase {
            GamePhase::NotStarted => {
                self.notice(Notice::NotStarted);
                false
            }
            GamePhase::Over => {
                self.notice(Notice::AlreadyOver);
                false
            }
            GamePhase::Paused => false,
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.notice(Notice::Paused);
                true
            }
        }
    }

    /// Continue a paused game. In automatic mode a piece spawns if none is falling.
    pub fn resume(&mut self) -> bool {
        match self.phase {
            GamePhase::NotStarted => {
                self.notice(Notice::NotStarted);
                false
            }
            GamePhase::Over => {
                self.notice(Notice::AlreadyOver);
                false
            }
            GamePhase::Running => false,
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.notice(Notice::Resumed);
                // The mode may have switched to automatic while paused.
                if self.mode == DropMode::Automatic && self.active.is_none() {
                    self.spawn_next();
                }
                true
            }
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.phase == GamePhase::Paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Switch drop mode. Switching to automatic mid-game with nothing falling spawns a piece.
    pub fn set_mode(&mut self, mode: DropMode) {
        self.mode = mode;
        self.notice(match mode {
            DropMode::Automatic => Notice::AutomaticMode,
            DropMode::Manual => Notice::ManualMode,
        });
        if mode == DropMode::Automatic
            && self.phase == GamePhase::Running
            && self.active.is_none()
        {
            self.spawn_next();
        }
    }

    /// Set the player name. Empty names become the default label; separators of the
    /// score file format are replaced by spaces.
    pub fn set_player_name(&mut self, name: &str) {
        let cleaned: String = name
            .trim()
            .chars()
            .map(|c| if c == ',' || c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.player_name = if cleaned.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            cleaned
        };
        self.notice(Notice::Welcome(self.player_name.clone()));
    }

    /// One-second playtime tick. The clock keeps running while paused.
    pub fn tick_clock(&mut self) -> bool {
        match self.phase {
            GamePhase::Running | GamePhase::Paused => {
                self.playtime_secs = self.playtime_secs.saturating_add(1);
                true
            }
            GamePhase::NotStarted | GamePhase::Over => false,
        }
    }

    /// Playtime split into (hours, minutes, seconds)
    pub fn playtime_hms(&self) -> (u32, u32, u32) {
        split_hms(self.playtime_secs)
    }

    /// Leaderboard entry for the current game
    pub fn result(&self) -> ScoreEntry {
        ScoreEntry::new(&self.player_name, self.progress.points, self.playtime_secs)
    }

    /// Apply a presentation-layer command
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::NewGame => {
                self.new_game();
                true
            }
            GameCommand::MoveLeft => self.move_piece(Direction::Left),
            GameCommand::MoveRight => self.move_piece(Direction::Right),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::Reflect => self.reflect(),
            GameCommand::Hold => self.hold(),
            GameCommand::Pause => self.pause(),
            GameCommand::Resume => self.resume(),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::ManualDrop => self.manual_drop(),
            GameCommand::ToggleMode => {
                self.set_mode(self.mode.toggled());
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (y, row) in out.board.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self
                    .board
                    .get(Coord::new(x as i8, y as i8))
                    .flatten();
            }
        }
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.held = self.hold.held();
        out.can_hold = self.hold.can_hold();
        out.phase = self.phase;
        out.mode = self.mode;
        out.level = self.progress.level;
        out.points = self.progress.points;
        out.lines_cleared = self.progress.lines_cleared;
        out.tetris_count = self.progress.tetris_count;
        out.speed_ms = self.progress.speed_ms;
        out.turn_count = self.turn_count;
        out.playtime_secs = self.playtime_secs;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Split seconds into (hours, minutes, seconds)
pub fn split_hms(total_secs: u32) -> (u32, u32, u32) {
    (total_secs / 3600, (total_secs % 3600) / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(seed: u32) -> GameState {
        let mut state = GameState::new(seed);
        state.new_game();
        state
    }

    fn land_active(state: &mut GameState) {
        state.hard_drop();
        assert!(state.tick_gravity());
    }

    #[test]
    fn test_new_state_is_not_started() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase(), GamePhase::NotStarted);
        assert!(state.active().is_none());
        assert!(!state.move_piece(Direction::Left));
        assert!(!state.rotate());
        assert!(!state.hold());
        assert!(!state.tick_gravity());
        assert_eq!(state.turn_count(), 0);
    }

    #[test]
    fn test_new_game_spawns_next_piece() {
        let mut state = GameState::new(12345);
        state.new_game();
        assert!(state.is_running());
        let active = state.active().expect("automatic mode spawns at once");
        assert_eq!(active.bounds().top, 0);

        let events = state.take_events();
        assert_eq!(events[0], GameEvent::Started { mode: DropMode::Automatic });
        assert!(events.contains(&GameEvent::Notice(Notice::GameStarted)));
        assert_eq!(
            events.last(),
            Some(&GameEvent::Spawned {
                kind: active.kind,
                color: active.color
            })
        );
        assert!(PALETTES[0].contains(&state.next_piece().color));
    }

    #[test]
    fn test_gravity_moves_then_lands() {
        let mut state = running(7);
        let top = state.active().map(|p| p.bounds().top);
        assert!(state.tick_gravity());
        assert_eq!(state.active().map(|p| p.bounds().top), top.map(|t| t + 1));

        land_active(&mut state);
        assert_eq!(state.points(), 100);
        assert_eq!(state.board().occupied_count(), 4);
        // Automatic mode spawned a replacement
        assert!(state.active().is_some());
    }

    #[test]
    fn test_hard_drop_does_not_land_by_itself() {
        let mut state = running(7);
        assert!(state.hard_drop());
        assert_eq!(state.board().occupied_count(), 0);
        assert!(!state.hard_drop());
    }

    #[test]
    fn test_rotate_counts_every_attempt() {
        let mut state = running(3);
        for _ in 0..5 {
            state.rotate();
        }
        assert_eq!(state.turn_count(), 5);
        land_active(&mut state);
        assert_eq!(state.points(), 75);
        assert_eq!(state.turn_count(), 0);
    }

    #[test]
    fn test_landing_clears_row_and_scores() {
        let mut state = running(11);
        state.hard_drop();
        let piece = state.active().expect("active piece");
        let color = Color::from_hex(0x999999);
        for x in 0..COLUMNS as i8 {
            let c = Coord::new(x, ROWS as i8 - 1);
            if !piece.squares().contains(&c) {
                state.board_mut().place(c, color);
            }
        }

        assert!(state.tick_gravity());
        assert_eq!(state.lines_cleared(), 1);
        assert_eq!(state.points(), 1100);
        let landed = state
            .take_events()
            .into_iter()
            .find(|e| matches!(e, GameEvent::Landed { .. }));
        assert_eq!(
            landed,
            Some(GameEvent::Landed {
                rows_cleared: 1,
                points_awarded: 1100,
                tetris: false
            })
        );
        // Only the part of the piece above the cleared row remains
        let in_bottom_row = piece
            .squares()
            .iter()
            .filter(|sq| sq.y == ROWS as i8 - 1)
            .count();
        assert_eq!(state.board().occupied_count(), 4 - in_bottom_row);
    }

    #[test]
    fn test_hold_with_empty_slot_spawns_new_piece() {
        let mut state = running(5);
        let first = state.active().map(|p| p.kind);
        let next = state.next_piece();
        assert!(state.hold());
        assert!(!state.can_hold());
        assert!(state.hold_occupied());
        assert_eq!(state.held().map(|s| s.kind), first);
        assert_eq!(state.active().map(|p| p.kind), Some(next.kind));

        let before = state.active();
        assert!(!state.hold());
        assert_eq!(state.active(), before);
    }

    #[test]
    fn test_hold_swaps_after_next_spawn() {
        let mut state = running(5);
        let first = state.active().map(|p| p.spec());
        state.hold();
        land_active(&mut state);
        assert!(state.can_hold());

        let current = state.active().map(|p| p.spec());
        assert!(state.hold());
        assert_eq!(state.active().map(|p| p.spec()), first);
        assert_eq!(state.held(), current);
        // Re-centered on the top row
        assert_eq!(state.active().map(|p| p.bounds().top), Some(0));
    }

    #[test]
    fn test_manual_mode_waits_for_drop() {
        let mut state = GameState::new(9);
        state.set_mode(DropMode::Manual);
        state.new_game();
        assert!(state.active().is_none());
        assert!(!state.wants_gravity());

        assert!(state.manual_drop());
        assert!(state.active().is_some());
        assert!(!state.manual_drop());

        land_active(&mut state);
        assert!(state.active().is_none());
        assert!(state.manual_drop());
    }

    #[test]
    fn test_switch_to_automatic_spawns_when_idle() {
        let mut state = GameState::new(9);
        state.set_mode(DropMode::Manual);
        state.new_game();
        state.set_mode(DropMode::Automatic);
        assert!(state.active().is_some());
        assert!(!state.manual_drop());
    }

    #[test]
    fn test_resume_after_switch_to_automatic_spawns() {
        let mut state = GameState::new(9);
        state.set_mode(DropMode::Manual);
        state.new_game();
        assert!(state.manual_drop());
        land_active(&mut state);
        assert!(state.active().is_none());

        assert!(state.pause());
        state.set_mode(DropMode::Automatic);
        assert!(state.active().is_none());
        assert!(state.resume());
        assert!(state.active().is_some());
        assert!(state.wants_gravity());
        assert!(state.tick_gravity());
    }

    #[test]
    fn test_resume_in_manual_mode_waits_for_drop() {
        let mut state = GameState::new(9);
        state.set_mode(DropMode::Manual);
        state.new_game();
        assert!(state.pause());
        assert!(state.resume());
        assert!(state.active().is_none());
        assert!(state.manual_drop());
    }

    /// Manual game whose next spawn is `kind`
    fn manual_with_next(kind: PieceKind) -> GameState {
        let mut state = GameState::new(5);
        state.set_mode(DropMode::Manual);
        state.new_game();
        state.next = PieceSpec::new(kind, Color::from_hex(0xAA0000));
        state.take_events();
        state
    }

    #[test]
    fn test_top_out_commits_lifted_visible_squares() {
        let mut state = manual_with_next(PieceKind::Square);
        let filler = Color::from_hex(0x333333);
        // Square spawns on (5,0) (5,1) (6,1) (6,0)
        state.board_mut().place(Coord::new(5, 1), filler);

        assert!(state.manual_drop());
        assert!(state.game_over());
        assert!(state.active().is_none());

        // Lifted one row: the top half leaves the board, the bottom half lands on row 0
        let red = Some(Some(Color::from_hex(0xAA0000)));
        assert_eq!(state.board().get(Coord::new(5, 0)), red);
        assert_eq!(state.board().get(Coord::new(6, 0)), red);
        assert_eq!(state.board().get(Coord::new(5, 1)), Some(Some(filler)));
        assert_eq!(state.board().get(Coord::new(6, 1)), Some(None));
        assert_eq!(state.board().occupied_count(), 3);

        let events = state.take_events();
        assert!(events.contains(&GameEvent::GameOver {
            points: 0,
            playtime_secs: 0
        }));
    }

    #[test]
    fn test_top_out_drops_squares_above_the_board() {
        let mut state = manual_with_next(PieceKind::Pyramid);
        let filler = Color::from_hex(0x333333);
        // Pyramid spawns on (4,1) (5,1) (5,0) (6,1); blocking its peak forces a two-row lift
        state.board_mut().place(Coord::new(5, 0), filler);

        assert!(state.manual_drop());
        assert!(state.game_over());
        assert_eq!(state.board().occupied_count(), 1);
        assert_eq!(state.board().get(Coord::new(5, 0)), Some(Some(filler)));
    }

    #[test]
    fn test_pause_notices() {
        let mut state = GameState::new(1);
        assert!(!state.pause());
        assert_eq!(
            state.take_events(),
            vec![GameEvent::Notice(Notice::NotStarted)]
        );

        state.new_game();
        state.take_events();
        assert!(state.toggle_pause());
        assert!(state.is_paused());
        assert!(!state.tick_gravity());
        assert!(!state.move_piece(Direction::Right));
        assert!(state.toggle_pause());
        assert!(state.is_running());
        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::Notice(Notice::Paused),
                GameEvent::Notice(Notice::Resumed)
            ]
        );
    }

    #[test]
    fn test_clock_runs_while_paused() {
        let mut state = GameState::new(1);
        assert!(!state.tick_clock());
        state.new_game();
        state.tick_clock();
        state.pause();
        state.tick_clock();
        assert_eq!(state.playtime_secs(), 2);
    }

    #[test]
    fn test_top_out_ends_game() {
        let mut state = running(21);
        let filler = Color::from_hex(0x333333);
        for y in 2..ROWS as i8 {
            for x in 1..COLUMNS as i8 {
                state.board_mut().place(Coord::new(x, y), filler);
            }
        }

        for _ in 0..10 {
            if state.game_over() {
                break;
            }
            state.tick_gravity();
        }
        assert!(state.game_over());
        assert!(state.active().is_none());
        assert!(!state.tick_gravity());
        assert!(!state.pause());

        let points = state.points();
        assert!(points >= 100);
        let events = state.take_events();
        assert!(events
            .iter()
            .any(|e| *e == GameEvent::GameOver { points, playtime_secs: 0 }));
        assert_eq!(events.last(), Some(&GameEvent::Notice(Notice::AlreadyOver)));

        // Clock stops once the game is over
        assert!(!state.tick_clock());
    }

    #[test]
    fn test_player_name_and_result() {
        let mut state = GameState::new(1);
        state.set_player_name("  a,b\nc ");
        assert_eq!(state.player_name(), "a b c");
        state.set_player_name("");
        assert_eq!(state.player_name(), DEFAULT_PLAYER_NAME);

        state.set_player_name("Kim");
        state.new_game();
        land_active(&mut state);
        state.tick_clock();
        assert_eq!(state.result(), ScoreEntry::new("Kim", 100, 1));
    }

    #[test]
    fn test_new_game_resets_progress() {
        let mut state = running(2);
        land_active(&mut state);
        state.tick_clock();
        state.hold();
        state.new_game();
        assert_eq!(state.points(), 0);
        assert_eq!(state.playtime_secs(), 0);
        assert!(state.held().is_none());
        assert!(state.can_hold());
        assert_eq!(state.board().occupied_count(), 0);
        assert_eq!(state.speed_ms(), STARTING_SPEED_MS);
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut state = GameState::new(4);
        assert!(state.apply(GameCommand::NewGame));
        assert!(state.apply(GameCommand::HardDrop));
        assert!(state.apply(GameCommand::TogglePause));
        assert!(state.is_paused());
        assert!(state.apply(GameCommand::Resume));
        assert!(state.apply(GameCommand::ToggleMode));
        assert_eq!(state.mode(), DropMode::Manual);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = running(8);
        land_active(&mut state);
        let snap = state.snapshot();
        let filled = snap.board.iter().flatten().filter(|c| c.is_some()).count();
        assert_eq!(filled, 4);
        assert_eq!(snap.points, 100);
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.next, state.next_piece());
        assert_eq!(
            snap.active.map(|a| a.squares),
            state.active().map(|p| *p.squares())
        );
    }

    #[test]
    fn test_split_hms() {
        assert_eq!(split_hms(0), (0, 0, 0));
        assert_eq!(split_hms(3725), (1, 2, 5));
    }
}
