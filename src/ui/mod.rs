mod components;

pub use components::{cursor_label, grid_lines, title_line, truncate_label, CURSOR_PREFIX};

use crate::error::Result;
use crate::grid::{label_origin, MenuSpec};
use crate::terminal::Terminal;

/// Screen coordinate from layout arithmetic. Placement outside the viewport is
/// the caller's problem, so this only guards against overflow.
fn coord(base: u16, offset: usize) -> u16 {
    u16::try_from(usize::from(base) + offset).unwrap_or(u16::MAX)
}

/// Run a draw step and put the cursor back where it was
fn preserving_cursor<T, F>(term: &mut T, step: F) -> Result<()>
where
    T: Terminal + ?Sized,
    F: FnOnce(&mut T) -> Result<()>,
{
    let (x, y) = term.cursor_position()?;
    step(term)?;
    term.move_cursor(x, y)
}

/// Draw the whole menu with its top-left corner (the title) at `(x, y)`
pub fn draw<T>(term: &mut T, spec: &MenuSpec, cursor: usize, x: u16, y: u16) -> Result<()>
where
    T: Terminal + ?Sized,
{
    preserving_cursor(term, |term| {
        draw_title(term, spec, x, y)?;

        // The grid starts one line below the title
        let grid_y = coord(y, 1);
        draw_table(term, spec, x, grid_y)?;
        draw_items(term, spec, x, grid_y)?;
        draw_cursor_item(term, spec, cursor, x, grid_y)
    })?;
    term.flush()
}

fn draw_title<T: Terminal + ?Sized>(term: &mut T, spec: &MenuSpec, x: u16, y: u16) -> Result<()> {
    preserving_cursor(term, |term| {
        term.move_cursor(x, y)?;
        term.write(&title_line(spec.title()))
    })
}

/// Border pass: outline and blank cells
fn draw_table<T: Terminal + ?Sized>(term: &mut T, spec: &MenuSpec, x: u16, y: u16) -> Result<()> {
    preserving_cursor(term, |term| {
        let lines = grid_lines(spec.columns(), spec.cell_width(), spec.rows());
        for (i, line) in lines.iter().enumerate() {
            term.move_cursor(x, coord(y, i))?;
            term.write(line)?;
        }
        Ok(())
    })
}

/// Content pass: every label, truncated to the cell width
fn draw_items<T: Terminal + ?Sized>(term: &mut T, spec: &MenuSpec, x: u16, y: u16) -> Result<()> {
    preserving_cursor(term, |term| {
        for (index, label) in spec.items().iter().enumerate() {
            let (dx, dy) = label_origin(index, spec.columns(), spec.cell_width());
            term.move_cursor(coord(x, dx), coord(y, dy))?;
            term.write(&truncate_label(label, spec.cell_width()))?;
        }
        Ok(())
    })
}

/// Cursor pass: redraw the highlighted label with prefix and color
fn draw_cursor_item<T: Terminal + ?Sized>(
    term: &mut T,
    spec: &MenuSpec,
    cursor: usize,
    x: u16,
    y: u16,
) -> Result<()> {
    let Some(label) = spec.items().get(cursor) else {
        return Ok(());
    };

    preserving_cursor(term, |term| {
        let (dx, dy) = label_origin(cursor, spec.columns(), spec.cell_width());
        term.move_cursor(coord(x, dx), coord(y, dy))?;

        let previous = term.color();
        term.set_color(spec.highlight())?;
        let written = term.write(&cursor_label(label, spec.cell_width()));
        // Restore the color even if the write failed
        term.set_color(previous)?;
        written
    })
}

/// Blank out the menu footprint at `(x, y)`, clipped to the viewport width
pub fn clear<T>(term: &mut T, spec: &MenuSpec, x: u16, y: u16) -> Result<()>
where
    T: Terminal + ?Sized,
{
    let (width, height) = spec.footprint();
    let available = usize::from(term.viewport_width()?.saturating_sub(x));
    let blank = " ".repeat(width.min(available));

    preserving_cursor(term, |term| {
        for row in 0..height {
            term.move_cursor(x, coord(y, row))?;
            term.write(&blank)?;
        }
        Ok(())
    })?;
    term.flush()
}
