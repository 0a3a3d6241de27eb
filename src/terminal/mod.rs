//! Terminal capability consumed by the menu
//!
//! The menu never touches stdout directly. It drives whatever implements
//! [`Terminal`]: the crossterm-backed [`ConsoleTerminal`] for real sessions or
//! the in-memory [`BufferTerminal`] for tests and off-screen rendering.

pub mod buffer;
pub mod console;

use ratatui::style::Color;

use crate::error::Result;

pub use buffer::BufferTerminal;
pub use console::ConsoleTerminal;

/// A single key press, reduced to what the menu cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Char(char),
    Other,
}

/// Primitive terminal operations. Coordinates are absolute, zero-based
/// `(column, row)` screen positions.
pub trait Terminal {
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Write text at the cursor and advance it
    fn write(&mut self, text: &str) -> Result<()>;

    /// Block for the next key press. `None` means input is exhausted.
    fn read_key(&mut self) -> Result<Option<Key>>;

    /// Current foreground color
    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color) -> Result<()>;

    fn cursor_position(&mut self) -> Result<(u16, u16)>;

    fn viewport_width(&mut self) -> Result<u16>;

    /// Push buffered output to the device
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
