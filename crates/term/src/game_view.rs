//! GameView: draws a [`GameSnapshot`] into a framebuffer.
//!
//! Pure, no I/O.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellKind, Direction};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const FIELD: Rgb = Rgb::new(24, 28, 24);

pub const HEAD_STYLE: CellStyle = CellStyle::new(Rgb::new(230, 70, 70), FIELD).bold();
pub const BODY_STYLE: CellStyle = CellStyle::new(Rgb::new(90, 200, 100), FIELD);
pub const FOOD_STYLE: CellStyle = CellStyle::new(Rgb::new(240, 210, 70), FIELD).bold();
pub const EMPTY_STYLE: CellStyle = CellStyle::new(Rgb::new(80, 90, 80), FIELD).dim();
const BORDER_STYLE: CellStyle = CellStyle::new(Rgb::new(190, 190, 190), BLACK);
const LABEL_STYLE: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BLACK).bold();
const VALUE_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
const HINT_STYLE: CellStyle = VALUE_STYLE.dim();

/// Renders the board inside a box border with a stats panel on its right.
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps the board roughly square.
        Self::new(2, 1)
    }
}

/// Top-left corner and outer size of the bordered board.
#[derive(Debug, Clone, Copy)]
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
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Screen position of the top-left glyph of board cell `(x, y)`.
    pub fn cell_position(&self, viewport: Viewport, grid_size: u8, x: u8, y: u8) -> (u16, u16) {
        let frame = self.frame(viewport, grid_size);
        (
            frame.x + 1 + x as u16 * self.cell_w,
            frame.y + 1 + y as u16 * self.cell_h,
        )
    }

    fn frame(&self, viewport: Viewport, grid_size: u8) -> Frame {
        let w = grid_size as u16 * self.cell_w + 2;
        let h = grid_size as u16 * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let size = snap.grid_size();
        let frame = self.frame(viewport, size);
        draw_border(fb, frame, BORDER_STYLE);

        for (y, row) in snap.cells.rows().enumerate() {
            for (x, &kind) in row.iter().enumerate() {
                let (px, py) = self.cell_position(viewport, size, x as u8, y as u8);
                let (ch, style) = match kind {
                    CellKind::Empty => ('·', EMPTY_STYLE),
                    CellKind::Food => ('●', FOOD_STYLE),
                    CellKind::Body => ('█', BODY_STYLE),
                    CellKind::Head => ('█', HEAD_STYLE),
                };
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over() {
            let won = snap.outcome.is_some_and(|o| o.is_win());
            let title = if won { "YOU WIN!" } else { "TRY AGAIN!" };
            draw_overlay(fb, frame, title, "press R to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let x = frame.x.saturating_add(frame.w).saturating_add(2);
        if viewport.width.saturating_sub(x) < 12 {
            return;
        }

        let mut y = frame.y;
        for (label, value) in [
            ("SCORE", snap.score),
            ("HIGH", snap.high_score),
            ("LENGTH", snap.length as u32),
        ] {
            fb.put_str(x, y, label, LABEL_STYLE);
            fb.put_u32(x, y + 1, value, VALUE_STYLE);
            y += 3;
        }

        fb.put_str(x, y, "DIR", LABEL_STYLE);
        fb.put_str(x, y + 1, direction_label(snap.direction), VALUE_STYLE);
        y += 3;

        for line in ["arrows/wasd/hjkl", "r  restart", "q  quit"] {
            fb.put_str(x, y, line, HINT_STYLE);
            y += 1;
        }
    }
}

fn direction_label(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => "↑ UP",
        Direction::Down => "↓ DOWN",
        Direction::Left => "← LEFT",
        Direction::Right => "→ RIGHT",
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    let (right, bottom) = (x + w - 1, y + h - 1);

    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

/// Centre `title` over the board with `hint` on the row below.
fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, title: &str, hint: &str) {
    let mid = frame.y + frame.h / 2;
    for (row, text, style) in [
        (mid.saturating_sub(1), title, LABEL_STYLE),
        (mid, hint, VALUE_STYLE),
    ] {
        let len = text.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(len) / 2;
        fb.put_str(x, row, text, style);
    }
}
