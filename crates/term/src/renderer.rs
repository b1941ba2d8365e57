//! Serializes a rink canvas as text or as terminal commands.
//!
//! `render`/`render_to` produce plain text, one line per row. `encode_into`
//! builds the crossterm command stream used by `TerminalRenderer`; with
//! default options it is byte-for-byte the same text.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    QueueableCommand,
};

use crate::core::Canvas;
use crate::options::{rink_to_color, RenderOptions};

/// The canvas as text: rows top to bottom, each terminated by `\n`.
pub fn render(canvas: &Canvas) -> String {
    let mut out = String::with_capacity((canvas.width() as usize + 1) * canvas.height() as usize);
    for row in canvas.rows() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// Write [`render`] output to `out`.
pub fn render_to<W: Write>(canvas: &Canvas, out: &mut W) -> Result<()> {
    out.write_all(render(canvas).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Encode the canvas into `out` as terminal commands.
///
/// This builds the byte stream without writing to stdout.
pub fn encode_into(canvas: &Canvas, opts: &RenderOptions, out: &mut Vec<u8>) -> Result<()> {
    let mut line = String::with_capacity(canvas.width() as usize);
    for (y, row) in canvas.rows().enumerate() {
        if let Some((col, top)) = opts.origin {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            out.queue(cursor::MoveTo(col, top.saturating_add(y)))?;
        }
        if opts.is_styled() {
            apply_style_into(out, opts)?;
        }

        line.clear();
        line.extend(row.iter());
        out.queue(Print(&line))?;

        if opts.is_styled() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        if opts.origin.is_none() {
            out.queue(Print('\n'))?;
        }
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, opts: &RenderOptions) -> Result<()> {
    if opts.bright {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if let Some(color) = opts.color {
        out.queue(SetForegroundColor(rink_to_color(color)))?;
    }
    if opts.black_background {
        out.queue(SetBackgroundColor(Color::Black))?;
    }
    Ok(())
}

/// Writes encoded canvases to stdout, reusing one byte buffer.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    opts: RenderOptions,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            stdout: io::stdout(),
            opts,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn draw(&mut self, canvas: &Canvas) -> Result<()> {
        self.buf.clear();
        encode_into(canvas, &self.opts, &mut self.buf)?;
        tracing::debug!(
            width = canvas.width(),
            height = canvas.height(),
            bytes = self.buf.len(),
            "encoded rink"
        );
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        let mut lock = self.stdout.lock();
        lock.write_all(&self.buf)?;
        lock.flush()?;
        Ok(())
    }
}
