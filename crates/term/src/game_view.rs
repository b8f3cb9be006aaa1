//! GameView: maps a `GameSnapshot` and the leaderboard into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Leaderboard};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Color, Coord, GamePhase, COLUMNS, ROWS};

const PANEL_BG: Color = Color::new(0, 0, 0);
const FIELD_BG: Color = Color::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Session data shown next to the field that is not part of the game snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SidePanel<'a> {
    pub player: &'a str,
    pub message: &'a str,
    pub leaderboard: &'a Leaderboard,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Total size of field plus frame.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            COLUMNS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer (resized to the viewport).
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        panel: &SidePanel<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Color::new(220, 220, 220), PANEL_BG));

        let (frame_w, frame_h) = self.frame_size();
        let panel_w = 34;
        let start_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Color::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::new(Color::new(90, 90, 100), FIELD_BG).dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let at = (start_x, start_y, x as u16, y as u16);
                match cell {
                    Some(color) => self.draw_square(fb, at, *color),
                    None => self.fill_cell_rect(fb, at, '·', empty),
                }
            }
        }

        if let Some(active) = snap.active {
            for sq in active.squares.iter().filter(|sq| sq.in_bounds()) {
                self.draw_square(fb, (start_x, start_y, sq.x as u16, sq.y as u16), active.color);
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, panel, panel_x, start_y);

        let overlay = match snap.phase {
            GamePhase::NotStarted => Some("PRESS N TO START"),
            GamePhase::Paused => Some("PAUSED"),
            GamePhase::Over => Some("GAME OVER"),
            GamePhase::Running => None,
        };
        if let Some(text) = overlay {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, panel: &SidePanel<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, panel, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_square(&self, fb: &mut FrameBuffer, at: (u16, u16, u16, u16), color: Color) {
        self.fill_cell_rect(fb, at, '█', CellStyle::new(color, FIELD_BG).bold());
    }

    /// `at` is (frame x, frame y, cell x, cell y).
    fn fill_cell_rect(&self, fb: &mut FrameBuffer, at: (u16, u16, u16, u16), ch: char, style: CellStyle) {
        let (start_x, start_y, cell_x, cell_y) = at;
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        squares: &[Coord],
        color: Color,
    ) {
        let style = CellStyle::new(color, PANEL_BG).bold();
        for sq in squares {
            fb.fill_rect(x + sq.x as u16 * 2, y + sq.y as u16, 2, 1, '█', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        panel: &SidePanel<'_>,
        x: u16,
        start_y: u16,
    ) {
        let label = CellStyle::new(Color::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Color::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = start_y;
        let line = |fb: &mut FrameBuffer, y: &mut u16, name: &str, text: &str| {
            let end = fb.put_str(x, *y, name, label);
            fb.put_str(end.max(x + 8), *y, text, value);
            *y += 1;
        };

        line(fb, &mut y, "PLAYER", panel.player);
        y += 1;
        line(fb, &mut y, "SCORE", &snap.points.to_string());
        line(fb, &mut y, "LEVEL", &(snap.level + 1).to_string());
        line(fb, &mut y, "LINES", &snap.lines_cleared.to_string());
        line(fb, &mut y, "TETRIS", &snap.tetris_count.to_string());
        let (h, m, s) = crate::core::split_hms(snap.playtime_secs);
        line(fb, &mut y, "TIME", &format!("{:02}:{:02}:{:02}", h, m, s));
        y += 1;

        fb.put_str(x, y, "NEXT", label);
        fb.put_str(x + 12, y, "HOLD", label);
        if !snap.can_hold {
            fb.put_str(x + 17, y, "(used)", dim);
        }
        y += 1;
        if snap.phase != GamePhase::NotStarted {
            self.draw_preview(fb, x, y, &snap.next_preview(), snap.next.color);
        }
        match (snap.held, snap.held_preview()) {
            (Some(held), Some(squares)) => self.draw_preview(fb, x + 12, y, &squares, held.color),
            _ => {
                fb.put_str(x + 12, y, "-", dim);
            }
        }
        y += 3;

        line(fb, &mut y, "MODE", snap.mode.as_str());
        y += 1;
        fb.put_str(x, y, panel.message, value);
        y += 2;

        fb.put_str(x, y, "HIGH SCORES", label);
        y += 1;
        for (rank, entry) in panel.leaderboard.entries().iter().enumerate() {
            let text = format!(
                "{}. {} | {} | {}",
                rank + 1,
                entry.display_name(),
                entry.display_points(),
                entry.display_playtime()
            );
            fb.put_str(x, y, &text, value);
            y += 1;
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Color::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, ScoreEntry};

    fn panel(board: &Leaderboard) -> SidePanel<'_> {
        SidePanel {
            player: "Ada",
            message: "Game started.",
            leaderboard: board,
        }
    }

    fn find_row(fb: &FrameBuffer, needle: &str) -> Option<u16> {
        (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
    }

    #[test]
    fn renders_frame_and_overlay_before_start() {
        let board = Leaderboard::new();
        let snap = GameState::new(1).snapshot();
        let fb = GameView::default().render(&snap, &panel(&board), Viewport::new(80, 30));
        assert!(find_row(&fb, "┌").is_some());
        assert!(find_row(&fb, "PRESS N TO START").is_some());
    }

    #[test]
    fn renders_active_piece_squares() {
        let board = Leaderboard::new();
        let mut game = GameState::new(1);
        game.new_game();
        let snap = game.snapshot();
        let fb = GameView::default().render(&snap, &panel(&board), Viewport::new(80, 30));
        let squares = (0..fb.height())
            .map(|y| fb.row_text(y).matches('█').count())
            .sum::<usize>();
        // 4 field squares (2 columns each) plus the next preview
        assert_eq!(squares, 16);
        assert!(find_row(&fb, "PAUSED").is_none());
    }

    #[test]
    fn renders_panel_and_leaderboard() {
        let mut board = Leaderboard::new();
        board.insert(ScoreEntry::new("Bo", 1200, 65));
        let mut game = GameState::new(1);
        game.new_game();
        game.pause();
        let fb = GameView::default().render(&game.snapshot(), &panel(&board), Viewport::new(90, 30));
        assert!(find_row(&fb, "PLAYER  Ada").is_some());
        assert!(find_row(&fb, "1. Bo | 1200 | 1 minutes 5 seconds").is_some());
        assert!(find_row(&fb, "2. No name | No point | No time").is_some());
        assert!(find_row(&fb, "PAUSED").is_some());
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let board = Leaderboard::new();
        let snap = GameState::new(1).snapshot();
        let fb = GameView::default().render(&snap, &panel(&board), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
