//! Line builders for the menu frame
//!
//! Pure string helpers; positioning and color live in the parent module.

use crate::grid::{cell_stride, grid_width};

/// Prefix marking the highlighted item
pub const CURSOR_PREFIX: &str = "> ";

/// Hard-truncate to at most `width` characters (no ellipsis)
pub fn truncate_label(label: &str, width: usize) -> String {
    label.chars().take(width).collect()
}

/// Highlighted form of a label; the prefix eats two columns of the cell
pub fn cursor_label(label: &str, cell_width: usize) -> String {
    let room = cell_width.saturating_sub(CURSOR_PREFIX.len());
    format!("{}{}", CURSOR_PREFIX, truncate_label(label, room))
}

pub fn title_line(title: &str) -> String {
    format!("<{}>", title)
}

/// Every line of the bordered grid, top to bottom.
///
/// Rows alternate between a blank content row and a divider; the first and
/// last dividers get rounded-off corners.
pub fn grid_lines(columns: usize, cell_width: usize, rows: usize) -> Vec<String> {
    let width = grid_width(columns, cell_width);
    let inner = "-".repeat(width.saturating_sub(2));

    let blank_cell = " ".repeat(cell_stride(cell_width) - 1);
    let content_row = format!("|{}", format!("{}|", blank_cell).repeat(columns));
    let divider = "-".repeat(width);

    let mut lines = Vec::with_capacity(rows * 2 + 1);
    lines.push(format!("/{}\\", inner));
    for row in 0..rows {
        lines.push(content_row.clone());
        if row + 1 < rows {
            lines.push(divider.clone());
        }
    }
    lines.push(format!("\\{}/", inner));
    lines
}
