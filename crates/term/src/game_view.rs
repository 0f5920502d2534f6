//! GameView: maps a `BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Board y grows upward while terminal rows grow
//! downward, so board row `y` lands on screen row `height - 1 - y` inside the
//! frame. Tiles above the board (pieces still entering) are not painted.

use crate::core::{BoardSnapshot, TileSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

const BOARD_BG: Rgb = Rgb::new(0x3D, 0x3C, 0x3D);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Board painter
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs.
        Self::new(2, 1)
    }
}

/// Top-left corner of the frame plus its outer size
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
        }
    }

    /// Frame size (board plus border) for a board of `width × height` cells
    pub fn frame_size(&self, width: i32, height: i32) -> (u16, u16) {
        let w = to_u16(width).saturating_mul(self.cell_w).saturating_add(2);
        let h = to_u16(height).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(CellStyle::new(SCREEN_BG, SCREEN_BG).cell(' '));

        let (w, h) = self.frame_size(snap.width, snap.height);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
        for y in 0..snap.height {
            for x in 0..snap.width {
                self.paint_cell(fb, frame, snap.height, x, y, empty.cell('·'));
            }
        }

        // Settled tiles first so the falling piece is always on top.
        for tile in snap.visible_tiles().filter(|t| !t.active) {
            self.draw_tile(fb, frame, snap.height, tile);
        }
        for tile in snap.visible_tiles().filter(|t| t.active) {
            self.draw_tile(fb, frame, snap.height, tile);
        }

        self.draw_side_panel(fb, viewport, frame);

        if snap.game_over() {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, frame: Frame, board_h: i32, tile: &TileSnapshot) {
        let color = tile.kind.color();
        let (ch, fg) = if tile.moving {
            ('▓', color.lighten(1, 2))
        } else {
            ('█', color)
        };
        let mut style = CellStyle::new(fg, BOARD_BG);
        if tile.active {
            style = style.bold();
        }
        self.paint_cell(fb, frame, board_h, tile.x, tile.y, style.cell(ch));
    }

    fn paint_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        board_h: i32,
        x: i32,
        y: i32,
        cell: Cell,
    ) {
        if x < 0 || y < 0 || y >= board_h {
            return;
        }
        let row = to_u16(board_h - 1 - y);
        let px = to_u16(x)
            .saturating_mul(self.cell_w)
            .saturating_add(frame.x + 1);
        let py = row.saturating_mul(self.cell_h).saturating_add(frame.y + 1);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, cell);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.set(x, y, style.cell('┌'));
        fb.set(x + w - 1, y, style.cell('┐'));
        fb.set(x, y + h - 1, style.cell('└'));
        fb.set(x + w - 1, y + h - 1, style.cell('┘'));
        for dx in 1..w - 1 {
            fb.set(x + dx, y, style.cell('─'));
            fb.set(x + dx, y + h - 1, style.cell('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style.cell('│'));
            fb.set(x + w - 1, y + dy, style.cell('│'));
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(160, 160, 160), SCREEN_BG);

        let lines: [(&str, CellStyle); 7] = [
            ("TETROMNOM", label),
            ("", value),
            ("←/→  move", value),
            ("↑    rotate cw", value),
            ("↓    rotate ccw", value),
            ("spc  drop", value),
            ("r/q  new/quit", value),
        ];
        for (i, (text, style)) in lines.iter().enumerate() {
            fb.put_str(panel_x, frame.y.saturating_add(i as u16), text, *style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        fb.put_str(x, y, text, style);
    }
}

/// Board coordinate to terminal units, saturating at both ends
fn to_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_counts_border() {
        let view = GameView::default();
        assert_eq!(view.frame_size(10, 20), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(3, 2), (5, 4));
    }

    #[test]
    fn zero_cell_size_is_clamped() {
        let view = GameView::new(0, 0);
        assert_eq!(view.frame_size(2, 2), (4, 4));
    }

    #[test]
    fn oversized_board_saturates_instead_of_overflowing() {
        let view = GameView::new(4, 4);
        assert_eq!(view.frame_size(100_000, -5), (u16::MAX, 2));

        let snap = BoardSnapshot {
            width: 70_000,
            height: 3,
            tiles: vec![TileSnapshot {
                x: 69_999,
                y: 0,
                kind: crate::types::ShapeKind::T,
                piece_id: 1,
                active: false,
                moving: false,
            }],
            ..BoardSnapshot::default()
        };
        let fb = view.render(&snap, Viewport::new(20, 10));
        assert_eq!(fb.width(), 20);
    }
}
