//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs are
//! written. Mouse capture is switched on while the renderer owns the terminal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Owns stdout while the game is running.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor, mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint every cell.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb` and keep it as the baseline for the next diff.
    ///
    /// The previous frame is swapped back into `fb`, so callers can keep
    /// reusing one buffer without cloning. Its contents are stale and should
    /// be fully overwritten before the next call.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        self.last = Some(std::mem::replace(fb, prev));
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Queues cells, emitting style commands only when the style changes.
struct StyledWriter<'a> {
    out: &'a mut Vec<u8>,
    current: Option<CellStyle>,
}

impl<'a> StyledWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, current: None }
    }

    fn cell(&mut self, cell: Cell) -> Result<()> {
        let style = cell.style;
        let prev = self.current;
        let attrs_changed = prev.map_or(true, |p| p.bold != style.bold || p.dim != style.dim);

        // An attribute reset also drops colors, so both are re-sent after it.
        if attrs_changed {
            self.out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if attrs_changed || prev.map(|p| p.fg) != Some(style.fg) {
            self.out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        }
        if attrs_changed || prev.map(|p| p.bg) != Some(style.bg) {
            self.out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        }
        self.current = Some(style);

        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut w = StyledWriter::new(out);
    for (y, row) in rows(fb).enumerate() {
        w.out.queue(cursor::MoveTo(0, y as u16))?;
        for &cell in row {
            w.cell(cell)?;
        }
    }
    w.finish()
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Both frames must have the same dimensions; otherwise this falls back to a
/// full redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }
    let mut w = StyledWriter::new(out);
    for (y, (old, new)) in rows(prev).zip(rows(next)).enumerate() {
        for (start, end) in changed_runs(old, new) {
            w.out.queue(cursor::MoveTo(start as u16, y as u16))?;
            for &cell in &new[start..end] {
                w.cell(cell)?;
            }
        }
    }
    w.finish()
}

fn rows(fb: &FrameBuffer) -> impl Iterator<Item = &[Cell]> {
    let width = (fb.width() as usize).max(1);
    fb.cells().chunks(width)
}

/// Half-open column ranges where two rows differ, adjacent cells coalesced.
fn changed_runs<'a>(old: &'a [Cell], new: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && old.get(x) == Some(&new[x]) {
            x += 1;
        }
        if x >= new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && old.get(x) != Some(&new[x]) {
            x += 1;
        }
        Some((start, x))
    })
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_encode_contains_glyphs() {
        let mut fb = FrameBuffer::new(2, 1);
        let style = CellStyle::default();
        fb.set(0, 0, style.into_cell('♔'));
        fb.set(1, 0, style.into_cell('♚'));

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('♔'));
        assert!(text.contains('♚'));
    }

    #[test]
    fn diff_of_identical_frames_prints_no_cells() {
        let fb = FrameBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains(' '));
    }

    #[test]
    fn diff_prints_only_changed_cells() {
        let a = FrameBuffer::new(6, 2);
        let mut b = a.clone();
        b.set(4, 1, CellStyle::default().into_cell('♞'));

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('♞'));
        assert!(!text.contains(' '));
    }

    #[test]
    fn style_is_sent_once_per_run_of_equal_cells() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.clear(CellStyle::default().into_cell('x'));
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        // 24-bit foreground color sequence.
        assert_eq!(text.matches("38;2;").count(), 1);
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let old = vec![Cell::default(); 7];
        let mut new = old.clone();

        // Move targets at columns 1..=3 and 5.
        for x in [1, 2, 3, 5] {
            new[x] = style.into_cell('•');
        }

        let runs: Vec<_> = changed_runs(&old, &new).collect();
        assert_eq!(runs, vec![(1, 4), (5, 6)]);
    }
}
