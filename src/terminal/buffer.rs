use std::collections::VecDeque;

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use super::{Key, Terminal};
use crate::error::Result;

/// In-memory terminal backed by a ratatui [`Buffer`].
///
/// Writes land in the buffer (clipped at its edges) and key presses come from
/// a scripted queue; once the queue runs dry `read_key` reports end of input.
#[derive(Debug, Clone)]
pub struct BufferTerminal {
    buffer: Buffer,
    cursor: (u16, u16),
    fg: Color,
    keys: VecDeque<Key>,
    keys_read: usize,
}

impl BufferTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, width, height)),
            cursor: (0, 0),
            fg: Color::Reset,
            keys: VecDeque::new(),
            keys_read: 0,
        }
    }

    /// Queue key presses to be returned by `read_key`
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Number of keys handed out so far
    pub fn keys_read(&self) -> usize {
        self.keys_read
    }

    /// All characters of row `y`, trailing blanks included
    pub fn row_text(&self, y: u16) -> String {
        let area = self.buffer.area;
        (area.x..area.x + area.width)
            .map(|x| {
                self.buffer
                    .cell((x, y))
                    .and_then(|cell| cell.symbol().chars().next())
                    .unwrap_or(' ')
            })
            .collect()
    }

    /// Whole screen, rows joined by newlines
    pub fn text(&self) -> String {
        let area = self.buffer.area;
        (area.y..area.y + area.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Foreground color of one cell
    pub fn fg_at(&self, x: u16, y: u16) -> Option<Color> {
        self.buffer.cell((x, y)).map(|cell| cell.fg)
    }

    /// True when nothing but default-colored spaces is on screen
    pub fn is_blank(&self) -> bool {
        self.buffer
            .content()
            .iter()
            .all(|cell| cell.symbol() == " " && cell.fg == Color::Reset)
    }

    /// Pre-set the cursor, as if some earlier output had left it there
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }
}

impl Terminal for BufferTerminal {
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            let (x, y) = self.cursor;
            if let Some(cell) = self.buffer.cell_mut((x, y)) {
                cell.set_char(ch).set_fg(self.fg);
            }
            self.cursor.0 = x.saturating_add(1);
        }
        Ok(())
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        let key = self.keys.pop_front();
        if key.is_some() {
            self.keys_read += 1;
        }
        Ok(key)
    }

    fn color(&self) -> Color {
        self.fg
    }

    fn set_color(&mut self, color: Color) -> Result<()> {
        self.fg = color;
        Ok(())
    }

    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        Ok(self.cursor)
    }

    fn viewport_width(&mut self) -> Result<u16> {
        Ok(self.buffer.area.width)
    }
}
