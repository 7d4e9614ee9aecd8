//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{decimal_width, CellStyle, FrameBuffer, Rgb};

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

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Columns the side panel needs before it is drawn at all.
const MIN_PANEL_W: u16 = 12;

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns (includes a one-column gutter).
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square in typical terminal fonts and fits
        // four-digit values with a margin.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board for a board of `size` cells per side.
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let n = u16::try_from(size).unwrap_or(u16::MAX);
        (
            n.saturating_mul(self.cell_w).saturating_add(2),
            n.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.size);
        if frame_w > viewport.width || frame_h > viewport.height {
            self.draw_too_small(fb, frame_w, frame_h);
            return;
        }

        let start_x = (viewport.width - frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => (viewport.height - frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(BOARD_BG, BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for cell in snap.cells_iter() {
            let px = start_x + 1 + (cell.col as u16) * self.cell_w;
            let py = start_y + 1 + (cell.row as u16) * self.cell_h;
            match cell.value {
                Some(value) => self.draw_tile(fb, px, py, value),
                None => self.draw_empty(fb, px, py),
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn inner_w(&self) -> u16 {
        self.cell_w - 1
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let style = CellStyle::new(DARK_TEXT, EMPTY_BG).dim();
        fb.fill_rect(px, py, self.inner_w(), self.cell_h, ' ', style);
        fb.put_char(px + self.inner_w() / 2, py + self.cell_h / 2, '·', style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16, value: u64) {
        let style = tile_style(value);
        let w = self.inner_w();
        fb.fill_rect(px, py, w, self.cell_h, ' ', style);

        let mid_y = py + self.cell_h / 2;
        let digits = decimal_width(value);
        if digits <= w {
            fb.put_u64(px + (w - digits) / 2, mid_y, value, style);
        } else {
            // Too wide for the cell: show the exponent instead.
            let exp = u64::from(value.trailing_zeros());
            let text_w = (2 + decimal_width(exp)).min(w);
            let x = px + (w - text_w) / 2;
            fb.put_str(x, mid_y, "2^", style);
            fb.put_u64(x + 2, mid_y, exp, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", snap.best),
            ("MOVES", snap.moves as u64),
            ("MAX", snap.max_value().unwrap_or(0)),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u64(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        for line in ["←↑→↓ move", "r   restart", "q   quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, need_w: u16, need_h: u16) {
        let style = CellStyle::default().bold();
        fb.put_str(0, 0, "Terminal too small", style);
        let mut x = fb.put_str(0, 1, "need ", style);
        x += fb.put_u64(x, 1, need_w as u64, style);
        x += fb.put_str(x, 1, "x", style);
        fb.put_u64(x, 1, need_h as u64, style);
    }
}

/// Background/foreground for a tile value.
pub fn tile_style(value: u64) -> CellStyle {
    let (bg, fg) = match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg).bold()
}
