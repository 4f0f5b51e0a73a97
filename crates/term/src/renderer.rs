//! Terminal output: owns raw mode / the alternate screen and flushes frames.
//!
//! Frames are diffed against the previously presented one so a steady game
//! only repaints the cells that moved.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// A horizontal span of glyphs that differ between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRun {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Drop the remembered frame so the next `present` repaints everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present `frame`, then swap it with the previous frame so the caller
    /// can draw the next one into the returned buffer.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.as_ref() {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_diff_into(prev, frame, &mut self.buf)?;
            }
            _ => encode_full_into(frame, &mut self.buf)?,
        }
        self.flush()?;

        let mut prev = self
            .last
            .take()
            .unwrap_or_else(|| FrameBuffer::new(frame.width(), frame.height()));
        prev.resize(frame.width(), frame.height());
        std::mem::swap(&mut prev, frame);
        self.last = Some(prev);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .and_then(|_| self.stdout.flush())
            .context("write frame to terminal")
    }
}

/// Encode a complete repaint of `frame`.
pub fn encode_full_into(frame: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_span(frame, 0, y, frame.width(), &mut style, out)?;
    }
    finish(out)
}

/// Encode only the glyphs of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for run in dirty_runs(prev, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        write_span(next, run.x, run.y, run.len, &mut style, out)?;
    }
    finish(out)
}

/// Changed spans, row by row. A size mismatch marks every row dirty.
pub fn dirty_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<DirtyRun> {
    let (w, h) = (next.width(), next.height());
    if prev.width() != w || prev.height() != h {
        return (0..h).map(|y| DirtyRun { x: 0, y, len: w }).collect();
    }

    let mut runs = Vec::new();
    for y in 0..h {
        let mut start = None;
        for x in 0..=w {
            let differs = x < w && prev.get(x, y) != next.get(x, y);
            match (differs, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(DirtyRun { x: s, y, len: x - s });
                    start = None;
                }
                _ => {}
            }
        }
    }
    runs
}

fn write_span(
    frame: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    current: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let glyph = frame.get(x + dx, y).unwrap_or_default();
        if *current != Some(glyph.style) {
            apply_style_into(out, glyph.style)?;
            *current = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
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
    fn adjacent_changes_form_one_run() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 2..=4 {
            b.put_char(x, 1, '#', style);
        }
        b.put_char(0, 0, '#', style);

        assert_eq!(
            dirty_runs(&a, &b),
            vec![
                DirtyRun { x: 0, y: 0, len: 1 },
                DirtyRun { x: 2, y: 1, len: 3 },
            ]
        );
    }

    #[test]
    fn run_reaching_right_edge_is_closed() {
        let a = FrameBuffer::new(3, 1);
        let mut b = FrameBuffer::new(3, 1);
        b.put_str(1, 0, "ab", CellStyle::default());
        assert_eq!(dirty_runs(&a, &b), vec![DirtyRun { x: 1, y: 0, len: 2 }]);
    }

    #[test]
    fn resized_frame_is_fully_dirty() {
        let a = FrameBuffer::new(2, 2);
        let b = FrameBuffer::new(3, 2);
        assert_eq!(dirty_runs(&a, &b).len(), 2);
    }

    #[test]
    fn identical_frames_encode_no_glyphs() {
        let a = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(!out.contains(&b' '));
    }

    #[test]
    fn full_encode_contains_text() {
        let mut fb = FrameBuffer::new(5, 1);
        fb.put_str(0, 0, "HELLO", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('H') && text.contains('O'));
    }
}
