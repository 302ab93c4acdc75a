//! Crossterm-backed terminal target: raw mode, alternate screen, and a
//! diff-based flush of prepared buffers.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent},
    execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

pub struct Terminal {
    stdout: io::Stdout,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Collect pending input events, blocking when `timeout` is `None`.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        match timeout {
            None => events.push(event::read()?),
            Some(dur) => {
                if !event::poll(dur)? {
                    return Ok(events);
                }
                events.push(event::read()?);
            }
        }
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }

        Ok(events)
    }

    /// Flush `buffer` to the screen, writing only cells that changed since
    /// the last draw.
    pub fn draw(&mut self, buffer: &Buffer) -> io::Result<()> {
        if buffer.width() != self.previous.width() || buffer.height() != self.previous.height() {
            self.previous = Buffer::new(buffer.width(), buffer.height());
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_w: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = TextStyle::new();

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in buffer.diff(&self.previous) {
            // The wide character to the left already painted this cell.
            if cell.wide_tail {
                continue;
            }

            if y != last_y || x != last_x + last_w {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = cell.fg;
            }
            if cell.bg != last_bg {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = cell.bg;
            }

            if cell.style.bold != last_style.bold {
                let attr = if cell.style.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                execute!(self.stdout, SetAttribute(attr))?;
            }
            if cell.style.dim != last_style.dim {
                let attr = if cell.style.dim {
                    Attribute::Dim
                } else {
                    Attribute::NormalIntensity
                };
                execute!(self.stdout, SetAttribute(attr))?;
            }
            if cell.style.italic != last_style.italic {
                let attr = if cell.style.italic {
                    Attribute::Italic
                } else {
                    Attribute::NoItalic
                };
                execute!(self.stdout, SetAttribute(attr))?;
            }
            if cell.style.underline != last_style.underline {
                let attr = if cell.style.underline {
                    Attribute::Underlined
                } else {
                    Attribute::NoUnderline
                };
                execute!(self.stdout, SetAttribute(attr))?;
            }
            last_style = cell.style;

            write!(self.stdout, "{}", cell.ch)?;
            last_x = x;
            last_y = y;
            last_w = char_width(cell.ch).max(1) as u16;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.previous = buffer.clone();
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
