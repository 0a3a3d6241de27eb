//! Menu configuration and grid geometry
//!
//! Everything here is a pure function of the `MenuSpec`: cell positions, row count
//! and the screen footprint are derived on demand and never cached.

pub mod cursor;

use ratatui::style::Color;

use crate::error::{MenuError, Result};

pub use cursor::{Cursor, Direction};

/// Default color of the highlighted item
pub const DEFAULT_HIGHLIGHT: Color = Color::DarkGray;

/// Default cancel key (matched case-insensitively)
pub const DEFAULT_CANCEL_KEY: char = 'c';

/// Immutable description of a grid menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSpec {
    title: String,
    items: Vec<String>,
    columns: usize,
    cell_width: usize,
    highlight: Color,
    cancel_key: char,
}

impl MenuSpec {
    /// Validate and build a spec. Fails on an empty item list, zero columns
    /// or a zero cell width.
    pub fn new<T, I, S>(title: T, items: I, columns: usize, cell_width: usize) -> Result<Self>
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();

        if items.is_empty() {
            return Err(MenuError::InvalidConfiguration(
                "menu needs at least one item".to_string(),
            ));
        }
        if columns == 0 {
            return Err(MenuError::InvalidConfiguration(
                "column count must be positive".to_string(),
            ));
        }
        if cell_width == 0 {
            return Err(MenuError::InvalidConfiguration(
                "cell width must be positive".to_string(),
            ));
        }

        Ok(Self {
            title: title.into(),
            items,
            columns,
            cell_width,
            highlight: DEFAULT_HIGHLIGHT,
            cancel_key: DEFAULT_CANCEL_KEY,
        })
    }

    pub fn with_highlight(mut self, color: Color) -> Self {
        self.highlight = color;
        self
    }

    pub fn with_cancel_key(mut self, key: char) -> Self {
        self.cancel_key = key;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    pub fn highlight(&self) -> Color {
        self.highlight
    }

    pub fn cancel_key(&self) -> char {
        self.cancel_key
    }

    /// Number of grid rows, `ceil(items / columns)`
    pub fn rows(&self) -> usize {
        rows_for(self.items.len(), self.columns)
    }

    /// Size `(width, height)` of everything the menu draws, title included
    pub fn footprint(&self) -> (usize, usize) {
        // "<title>" may stick out past the grid
        let title_width = self.title.chars().count() + 2;
        (
            grid_width(self.columns, self.cell_width).max(title_width),
            self.rows() * 2 + 2,
        )
    }
}

/// `ceil(count / columns)`
pub fn rows_for(count: usize, columns: usize) -> usize {
    count.div_ceil(columns)
}

/// Logical `(column, row)` of an item
pub fn cell_of(index: usize, columns: usize) -> (usize, usize) {
    (index % columns, index / columns)
}

/// Horizontal distance between two cell borders
pub fn cell_stride(cell_width: usize) -> usize {
    // border + padding + label + padding
    cell_width + 3
}

/// Width of the bordered grid (closing border included)
pub fn grid_width(columns: usize, cell_width: usize) -> usize {
    columns * cell_stride(cell_width) + 1
}

/// Position of an item's label relative to the grid's top-left corner
pub fn label_origin(index: usize, columns: usize, cell_width: usize) -> (usize, usize) {
    let (col, row) = cell_of(index, columns);
    (col * cell_stride(cell_width) + 2, row * 2 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<&'static str> {
        vec!["Hello", "World", "my", "name", "is", "Jörn"]
    }

    #[test]
    fn test_rows_round_up() {
        let spec = MenuSpec::new("test", sample_items(), 4, 20).unwrap();
        assert_eq!(spec.rows(), 2);
        assert_eq!(rows_for(8, 4), 2);
        assert_eq!(rows_for(9, 4), 3);
        assert_eq!(rows_for(1, 7), 1);
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(
            MenuSpec::new("t", empty, 4, 20),
            Err(MenuError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            MenuSpec::new("t", sample_items(), 0, 20),
            Err(MenuError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            MenuSpec::new("t", sample_items(), 4, 0),
            Err(MenuError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_defaults_and_builders() {
        let spec = MenuSpec::new("t", sample_items(), 4, 20).unwrap();
        assert_eq!(spec.highlight(), Color::DarkGray);
        assert_eq!(spec.cancel_key(), 'c');

        let spec = spec.with_highlight(Color::Cyan).with_cancel_key('q');
        assert_eq!(spec.highlight(), Color::Cyan);
        assert_eq!(spec.cancel_key(), 'q');
    }

    #[test]
    fn test_cell_positions() {
        assert_eq!(cell_of(0, 4), (0, 0));
        assert_eq!(cell_of(3, 4), (3, 0));
        assert_eq!(cell_of(5, 4), (1, 1));

        // stride 8 for a cell width of 5
        assert_eq!(label_origin(0, 4, 5), (2, 1));
        assert_eq!(label_origin(1, 4, 5), (10, 1));
        assert_eq!(label_origin(5, 4, 5), (10, 3));
    }

    #[test]
    fn test_footprint_covers_long_title() {
        let spec = MenuSpec::new("a very long menu title", ["x"], 1, 1).unwrap();
        assert_eq!(spec.footprint(), (24, 4));
    }

    #[test]
    fn test_footprint_fits_conservative_bound() {
        for columns in 1..6 {
            for cell_width in 1..12 {
                for count in 1..15 {
                    let items: Vec<String> = (0..count).map(|i| i.to_string()).collect();
                    let spec = MenuSpec::new("t", items, columns, cell_width).unwrap();
                    let (w, h) = spec.footprint();
                    assert!(w <= columns * (cell_width + 6));
                    assert!(h <= spec.rows() * 2 + 3);
                }
            }
        }
    }
}
