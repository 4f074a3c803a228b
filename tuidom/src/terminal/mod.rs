use std::io::{self, Write};

use crossterm::{
    cursor,
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use crate::element::Element;
use crate::render::render;
use crate::types::TextStyle;

/// Current terminal size as (columns, rows), or `None` when stdout is not a terminal.
pub fn size() -> Option<(u16, u16)> {
    terminal::size().ok()
}

pub struct Terminal {
    stdout: io::Stdout,
    width: u16,
    height: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {width}x{height}");

        Ok(Self {
            stdout,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Redraw the whole screen from `root`.
    pub fn draw(&mut self, root: &Element) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.width = width;
        self.height = height;

        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            SetAttribute(Attribute::Reset)
        )?;

        for (y, line) in render(root, width).iter().take(height as usize).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            for span in &line.spans {
                apply_style(&mut self.stdout, span.style)?;
                queue!(self.stdout, Print(&span.text), SetAttribute(Attribute::Reset))?;
            }
        }

        self.stdout.flush()
    }
}

fn apply_style(stdout: &mut io::Stdout, style: TextStyle) -> io::Result<()> {
    if style.bold {
        queue!(stdout, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(stdout, SetAttribute(Attribute::Dim))?;
    }
    if style.underline {
        queue!(stdout, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
