/// Arrow key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Highlighted item of a grid. Always in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    columns: usize,
    len: usize,
}

impl Cursor {
    /// Cursor on the first item. `columns` and `len` must be positive,
    /// which `MenuSpec` guarantees.
    pub fn new(columns: usize, len: usize) -> Self {
        Self { index: 0, columns, len }
    }

    /// Cursor at `index`, clamped into range
    pub fn at(index: usize, columns: usize, len: usize) -> Self {
        Self {
            index: index.min(len.saturating_sub(1)),
            columns,
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    /// Move one cell. Returns false when the move hits an edge or a hole in
    /// the last row; the cursor then stays put.
    pub fn step(&mut self, dir: Direction) -> bool {
        let before = self.index;
        match dir {
            Direction::Up => {
                if self.index >= self.columns {
                    self.index -= self.columns;
                }
            }
            Direction::Down => {
                if self.index / self.columns < self.rows() - 1
                    && self.index + self.columns < self.len
                {
                    self.index += self.columns;
                }
            }
            Direction::Left => {
                if !self.index.is_multiple_of(self.columns) {
                    self.index -= 1;
                }
            }
            Direction::Right => {
                if self.index % self.columns < self.columns - 1 && self.index < self.len - 1 {
                    self.index += 1;
                }
            }
        }
        before != self.index
    }
}
