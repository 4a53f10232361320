//! Terminal setup and diffed frame output via crossterm.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{self, Attribute, Color},
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer};

pub struct Renderer {
    out: io::Stdout,
    last: Option<FrameBuffer>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            last: None,
        }
    }

    /// Enters raw mode and the alternate screen. Call `exit` before the
    /// process ends, or the shell is left in a broken state.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.out
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Writes only the cells that changed since the previous frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        let mut cur_style: Option<CellStyle> = None;
        let mut cursor_at: Option<(u16, u16)> = None;

        for y in 0..fb.height() {
            let Some(row) = fb.row(y) else { continue };
            let prev_row = match (&self.last, full) {
                (Some(prev), false) => prev.row(y),
                _ => None,
            };
            for (x, cell) in row.iter().enumerate() {
                if prev_row.map(|p| p[x] == *cell) == Some(true) {
                    continue;
                }
                let x = x as u16;
                if cursor_at != Some((x, y)) {
                    self.out.queue(cursor::MoveTo(x, y))?;
                }
                if cur_style != Some(cell.style) {
                    apply_style(&mut self.out, cell.style)?;
                    cur_style = Some(cell.style);
                }
                self.out.queue(style::Print(cell.ch))?;
                cursor_at = Some((x + 1, y));
            }
        }

        self.out.flush()?;
        self.last = Some(fb.clone());
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_style(out: &mut io::Stdout, s: CellStyle) -> Result<()> {
    out.queue(style::SetAttribute(Attribute::Reset))?;
    if s.bold {
        out.queue(style::SetAttribute(Attribute::Bold))?;
    }
    if s.dim {
        out.queue(style::SetAttribute(Attribute::Dim))?;
    }
    out.queue(style::SetForegroundColor(Color::Rgb {
        r: s.fg.r,
        g: s.fg.g,
        b: s.fg.b,
    }))?;
    out.queue(style::SetBackgroundColor(Color::Rgb {
        r: s.bg.r,
        g: s.bg.g,
        b: s.bg.b,
    }))?;
    Ok(())
}
