//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, GameState, Position};

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

const PLAYFIELD_BG: Rgb = Rgb::new(20, 24, 28);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the snake grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the playfield frame landed in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let grid_w = snap.grid.width.max(0) as u16;
        let grid_h = snap.grid.height.max(0) as u16;
        let field_w = grid_w.saturating_mul(self.cell_w);
        let field_h = grid_h.saturating_mul(self.cell_h);
        let frame = Frame {
            x: 0,
            y: 0,
            w: field_w.saturating_add(2),
            h: field_h.saturating_add(2),
        };
        let panel_w = 22u16;
        let total_w = frame.w.saturating_add(panel_w);
        let frame = Frame {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(frame.h) / 2,
            ..frame
        };

        let empty = CellStyle::new(Rgb::new(60, 66, 72), PLAYFIELD_BG).dim();
        fb.fill_rect(frame.x + 1, frame.y + 1, field_w, field_h, ' ', empty);
        for y in 0..grid_h {
            for x in 0..grid_w {
                self.fill_cell(fb, frame, x, y, '·', empty);
            }
        }

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, frame, border);

        if let Some(food) = snap.food {
            let style = CellStyle::new(Rgb::new(230, 70, 70), PLAYFIELD_BG).bold();
            self.draw_grid_cell(fb, frame, snap, food, '◆', style);
        }

        let body = CellStyle::new(Rgb::new(70, 170, 90), PLAYFIELD_BG);
        let dead = snap.state == GameState::GameOver;
        let body = if dead { body.dim() } else { body };
        for &segment in snap.body.iter().skip(1) {
            self.draw_grid_cell(fb, frame, snap, segment, '█', body);
        }
        if let Some(head) = snap.head() {
            let color = if dead {
                Rgb::new(230, 70, 70)
            } else {
                Rgb::new(140, 240, 140)
            };
            let style = CellStyle::new(color, PLAYFIELD_BG).bold();
            self.draw_grid_cell(fb, frame, snap, head, head_glyph(snap.heading), style);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.state {
            GameState::Waiting => {
                draw_overlay(fb, frame, 0, "PRESS SPACE TO START");
            }
            GameState::Paused => {
                draw_overlay(fb, frame, 0, "PAUSED");
            }
            GameState::GameOver => {
                draw_overlay(fb, frame, 0, "GAME OVER");
                if snap.score.current > 0 && snap.score.current == snap.score.highest {
                    draw_overlay(fb, frame, 1, "NEW BEST!");
                }
                draw_overlay(fb, frame, 2, "SPACE TO PLAY AGAIN");
            }
            GameState::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &GameSnapshot,
        pos: Position,
        ch: char,
        style: CellStyle,
    ) {
        if !snap.grid.contains(pos) {
            return;
        }
        self.fill_cell(fb, frame, pos.x as u16, pos.y as u16, ch, style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = frame.y;
        let rows: [(&str, u32); 4] = [
            ("SCORE", snap.score.current),
            ("BEST", snap.score.highest),
            ("LENGTH", snap.body.len() as u32),
            ("STEP MS", snap.step_interval_ms),
        ];
        for (name, v) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "STATE", label);
        fb.put_str(panel_x, y.saturating_add(1), state_label(snap.state), value);
        y = y.saturating_add(3);

        for line in ["arrows/wasd: move", "space: start/pause", "r: restart", "q: quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

fn head_glyph(heading: Direction) -> char {
    match heading {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

fn state_label(state: GameState) -> &'static str {
    match state {
        GameState::Waiting => "READY",
        GameState::Playing => "PLAYING",
        GameState::Paused => "PAUSED",
        GameState::GameOver => "OVER",
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

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

/// Centered text over the playfield, `line` rows below the middle.
fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, line: u16, text: &str) {
    let y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, y, text, style);
}
