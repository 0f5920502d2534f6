//! TerminalRenderer: pushes framebuffers to the real terminal.
//!
//! Only cells that differ from the previously flushed frame are rewritten. A
//! missing or differently sized previous frame triggers a clear and a full
//! repaint. Encoding is split from I/O so it can be checked in tests.

use std::io::{self, Write};
use std::mem;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Rgb;

pub struct TerminalRenderer {
    out: io::Stdout,
    prev: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            prev: None,
            bytes: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes.queue(terminal::EnterAlternateScreen)?;
        self.bytes.queue(cursor::Hide)?;
        self.bytes.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo everything `enter` did. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes.queue(ResetColor)?;
        self.bytes.queue(SetAttribute(Attribute::Reset))?;
        self.bytes.queue(terminal::EnableLineWrap)?;
        self.bytes.queue(cursor::Show)?;
        self.bytes.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget the last frame so the next draw repaints everything (e.g. on resize).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Draw `fb`, then swap it with the retained previous frame.
    ///
    /// After the call `fb` holds stale contents the caller is expected to
    /// overwrite; this avoids cloning a full frame every tick.
    pub fn draw(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        encode_frame_into(self.prev.as_ref(), fb, &mut self.bytes)?;
        self.flush()?;

        let mut retained = self
            .prev
            .take()
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        retained.resize(fb.width(), fb.height());
        mem::swap(&mut retained, fb);
        self.prev = Some(retained);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.bytes)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// With no usable `prev` the screen is cleared and every cell is written.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<CellStyle> = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if style != Some(cell.style) {
                queue_style(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of cells that differ; whole rows without `prev`.
fn changed_runs(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let (w, h) = (next.width(), next.height());
    let Some(prev) = prev else {
        return (0..h).filter(|_| w > 0).map(|y| (0, y, w)).collect();
    };

    let mut runs = Vec::new();
    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_changes_coalesce_into_one_run() {
        let prev = FrameBuffer::new(6, 2);
        let mut next = prev.clone();
        let cell = CellStyle::default().cell('X');
        for x in 1..=3 {
            next.set(x, 0, cell);
        }
        next.set(5, 1, cell);

        assert_eq!(changed_runs(Some(&prev), &next), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn no_previous_frame_repaints_every_row() {
        let next = FrameBuffer::new(3, 2);
        assert_eq!(changed_runs(None, &next), vec![(0, 0, 3), (0, 1, 3)]);
    }

    #[test]
    fn identical_frames_only_reset_attributes() {
        let fb = FrameBuffer::new(4, 4);
        let mut full = Vec::new();
        encode_frame_into(None, &fb, &mut full).unwrap();

        let mut diff = Vec::new();
        encode_frame_into(Some(&fb), &fb, &mut diff).unwrap();

        assert!(diff.len() < full.len());
        assert!(!String::from_utf8_lossy(&diff).contains(' '));
    }

    #[test]
    fn size_mismatch_falls_back_to_full_repaint() {
        let prev = FrameBuffer::new(2, 2);
        let mut next = FrameBuffer::new(3, 1);
        next.put_str(0, 0, "abc", CellStyle::default());

        let mut out = Vec::new();
        encode_frame_into(Some(&prev), &next, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('a') && text.contains('c'));
    }
}
