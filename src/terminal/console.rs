use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::{Print, SetForegroundColor},
    terminal::{self, disable_raw_mode, enable_raw_mode},
};
use ratatui::style::Color;

use super::{Key, Terminal};
use crate::error::Result;

/// The process's real terminal, driven through crossterm.
///
/// Raw mode is enabled on construction and disabled again on drop, so key
/// presses arrive one at a time without echo. crossterm can't query the
/// foreground color, so the caller states it up front; it is what the menu
/// restores after highlighting and what drop leaves behind.
pub struct ConsoleTerminal<W: Write = Stdout> {
    out: W,
    fg: Color,
    raw_mode: bool,
}

impl ConsoleTerminal<Stdout> {
    /// Terminal whose current foreground is the default color
    pub fn new() -> Result<Self> {
        Self::with_color(Color::Reset)
    }

    /// Terminal whose caller already switched the foreground to `initial`
    pub fn with_color(initial: Color) -> Result<Self> {
        enable_raw_mode()?;
        tracing::debug!("Raw mode enabled");
        Ok(Self {
            out: io::stdout(),
            fg: initial,
            raw_mode: true,
        })
    }
}

impl<W: Write> ConsoleTerminal<W> {
    /// Send output to `out` instead of stdout; the tty mode is left alone.
    /// Key reads and size queries still go to the process's terminal.
    pub fn from_writer(out: W, initial: Color) -> Self {
        Self {
            out,
            fg: initial,
            raw_mode: false,
        }
    }
}

impl<W: Write> Drop for ConsoleTerminal<W> {
    fn drop(&mut self) {
        // Best effort: leave the shell usable even if we're unwinding
        let _ = queue!(self.out, SetForegroundColor(self.fg.into()));
        let _ = self.out.flush();
        if self.raw_mode {
            if let Err(e) = disable_raw_mode() {
                tracing::warn!("Failed to disable raw mode: {}", e);
            }
        }
    }
}

impl<W: Write> Terminal for ConsoleTerminal<W> {
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.out, MoveTo(x, y))?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text))?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        self.out.flush()?;

        loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e.into()),
            };

            // Ignore resize, focus, paste and key release/repeat events
            let Event::Key(key) = event else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Ctrl+D is end of input, same as a closed pipe
            if key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(None);
            }

            return Ok(Some(Key::from(key.code)));
        }
    }

    fn color(&self) -> Color {
        self.fg
    }

    fn set_color(&mut self, color: Color) -> Result<()> {
        queue!(self.out, SetForegroundColor(color.into()))?;
        self.fg = color;
        Ok(())
    }

    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        // The position query goes through the terminal, so pending moves must land first
        self.out.flush()?;
        Ok(cursor::position()?)
    }

    fn viewport_width(&mut self) -> Result<u16> {
        let (width, _) = terminal::size()?;
        Ok(width)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Enter => Key::Enter,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        }
    }
}
