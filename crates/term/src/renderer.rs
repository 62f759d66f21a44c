//! ConsoleRenderer: flushes styled lines to a terminal (or any writer).
//!
//! Lines are encoded into an internal byte buffer with crossterm commands and
//! written in one call, so a half-drawn line never reaches the terminal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::style::{Rgb, TextStyle};
use crate::view::Line;

pub struct ConsoleRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    color: bool,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(1024),
            color,
        }
    }

    /// Draw a line followed by a newline.
    pub fn draw_line(&mut self, line: &Line) -> Result<()> {
        self.buf.clear();
        encode_line_into(line, self.color, &mut self.buf)?;
        self.buf.push(b'\n');
        self.flush_buf()
    }

    pub fn draw_lines(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        for line in lines {
            encode_line_into(line, self.color, &mut self.buf)?;
            self.buf.push(b'\n');
        }
        self.flush_buf()
    }

    /// Empty line.
    pub fn blank(&mut self) -> Result<()> {
        self.draw_line(&Line::default())
    }

    /// Draw a line without a newline and flush, leaving the cursor after it.
    pub fn prompt(&mut self, line: &Line) -> Result<()> {
        self.buf.clear();
        encode_line_into(line, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Reset terminal styling. Safe to call on any exit path.
    pub fn reset(&mut self) -> Result<()> {
        if !self.color {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode one line (without newline) into `out`.
///
/// With `color = false` only the text is written.
pub fn encode_line_into(line: &Line, color: bool, out: &mut Vec<u8>) -> Result<()> {
    if !color {
        for span in &line.spans {
            out.extend_from_slice(span.text.as_bytes());
        }
        return Ok(());
    }

    let mut current_style: Option<TextStyle> = None;
    for span in &line.spans {
        if current_style != Some(span.style) {
            apply_style_into(out, span.style)?;
            current_style = Some(span.style);
        }
        out.queue(Print(&span.text))?;
    }

    if current_style.is_some_and(|s| s != TextStyle::PLAIN) {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: TextStyle) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
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
