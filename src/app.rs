use crate::error::Result;
use crate::grid::{Cursor, Direction, MenuSpec};
use crate::terminal::{Key, Terminal};
use crate::ui;

/// Where an interaction session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Menu is on screen, waiting for a key
    Displaying,
    /// Session is over, the drawn region still needs clearing
    Finalizing(Option<usize>),
    /// Region cleared; carries the outcome
    Done(Option<usize>),
}

/// Interactive grid menu
pub struct GridMenu {
    spec: MenuSpec,
    cursor: Cursor,
}

impl GridMenu {
    pub fn new(spec: MenuSpec) -> Self {
        let cursor = Cursor::new(spec.columns(), spec.item_count());
        Self { spec, cursor }
    }

    pub fn spec(&self) -> &MenuSpec {
        &self.spec
    }

    /// Index of the highlighted item
    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    /// Label of the item at `index`, if any
    pub fn item(&self, index: usize) -> Option<&str> {
        self.spec.items().get(index).map(String::as_str)
    }

    /// Show the menu with its top-left corner at `(offset_x, offset_y)` and
    /// block until the user confirms (`Some(index)`) or cancels (`None`).
    ///
    /// The menu's region is blank again when this returns successfully.
    /// Terminal failures propagate as they happen.
    pub fn run<T>(&mut self, term: &mut T, offset_x: u16, offset_y: u16) -> Result<Option<usize>>
    where
        T: Terminal + ?Sized,
    {
        self.cursor = Cursor::new(self.spec.columns(), self.spec.item_count());
        tracing::debug!(
            "Showing menu {:?}: {} items, {}x{} grid at ({}, {})",
            self.spec.title(),
            self.spec.item_count(),
            self.spec.columns(),
            self.spec.rows(),
            offset_x,
            offset_y
        );

        let mut state = State::Displaying;
        loop {
            state = match state {
                State::Displaying => {
                    ui::draw(term, &self.spec, self.cursor.index(), offset_x, offset_y)?;
                    match term.read_key()? {
                        Some(key) => self.handle_key(key),
                        None => {
                            tracing::debug!("Input exhausted, cancelling menu");
                            State::Finalizing(None)
                        }
                    }
                }
                State::Finalizing(outcome) => {
                    ui::clear(term, &self.spec, offset_x, offset_y)?;
                    State::Done(outcome)
                }
                State::Done(outcome) => {
                    match outcome {
                        Some(index) => tracing::info!("Menu confirmed: item {}", index),
                        None => tracing::info!("Menu cancelled"),
                    }
                    return Ok(outcome);
                }
            };
        }
    }

    /// Apply one key press to the cursor and return the next state
    pub fn handle_key(&mut self, key: Key) -> State {
        let direction = match key {
            Key::Enter => return State::Finalizing(Some(self.cursor.index())),
            Key::Char(c) if c.eq_ignore_ascii_case(&self.spec.cancel_key()) => {
                return State::Finalizing(None)
            }
            Key::Up => Direction::Up,
            Key::Down => Direction::Down,
            Key::Left => Direction::Left,
            Key::Right => Direction::Right,
            // Anything else just redraws
            Key::Char(_) | Key::Other => return State::Displaying,
        };

        if self.cursor.step(direction) {
            tracing::debug!("Cursor moved {:?} to {}", direction, self.cursor.index());
        } else {
            tracing::debug!("Cursor blocked moving {:?} at {}", direction, self.cursor.index());
        }
        State::Displaying
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::BufferTerminal;

    fn sample_menu() -> GridMenu {
        let spec = MenuSpec::new("test", ["Hello", "World", "my", "name", "is", "Jörn"], 4, 20)
            .unwrap();
        GridMenu::new(spec)
    }

    fn screen() -> BufferTerminal {
        BufferTerminal::new(120, 12)
    }

    #[test]
    fn test_down_right_enter_selects_last_item() {
        let mut menu = sample_menu();
        let mut term = screen().with_keys([Key::Down, Key::Right, Key::Enter]);

        assert_eq!(menu.run(&mut term, 0, 0).unwrap(), Some(5));
        assert_eq!(menu.item(5), Some("Jörn"));
        assert!(term.is_blank());
    }

    #[test]
    fn test_enter_immediately_selects_first_item() {
        let mut menu = sample_menu();
        let mut term = screen().with_keys([Key::Enter]);
        assert_eq!(menu.run(&mut term, 3, 2).unwrap(), Some(0));
    }

    #[test]
    fn test_cancel_returns_none_and_clears() {
        for moves in [vec![], vec![Key::Right], vec![Key::Down, Key::Right], vec![Key::Right; 3]] {
            let mut menu = sample_menu();
            let mut keys = moves;
            keys.push(Key::Char('C'));
            let mut term = screen().with_keys(keys);

            assert_eq!(menu.run(&mut term, 2, 1).unwrap(), None);
            assert!(term.is_blank());
        }
    }

    #[test]
    fn test_lowercase_cancel_key() {
        let mut menu = sample_menu();
        let mut term = screen().with_keys([Key::Char('c')]);
        assert_eq!(menu.run(&mut term, 0, 0).unwrap(), None);
    }

    #[test]
    fn test_custom_cancel_key() {
        let spec = MenuSpec::new("t", ["a", "b"], 2, 4).unwrap().with_cancel_key('q');
        let mut menu = GridMenu::new(spec);

        // 'c' is an ordinary key now
        let mut term = screen().with_keys([Key::Char('c'), Key::Right, Key::Char('Q')]);
        assert_eq!(menu.run(&mut term, 0, 0).unwrap(), None);
        assert_eq!(term.keys_read(), 3);
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut menu = sample_menu();
        let mut term = screen().with_keys([Key::Right, Key::Down]);

        assert_eq!(menu.run(&mut term, 0, 0).unwrap(), None);
        assert!(term.is_blank());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut menu = sample_menu();
        let mut term = screen().with_keys([
            Key::Other,
            Key::Char('x'),
            Key::Right,
            Key::Other,
            Key::Enter,
        ]);
        assert_eq!(menu.run(&mut term, 0, 0).unwrap(), Some(1));
    }

    #[test]
    fn test_edges_are_noops() {
        let mut menu = sample_menu();
        // Right x5 stops at 3, Down is blocked (7 is out of range), Up is blocked
        let mut keys = vec![Key::Right; 5];
        keys.extend([Key::Down, Key::Up, Key::Enter]);
        let mut term = screen().with_keys(keys);
        assert_eq!(menu.run(&mut term, 0, 0).unwrap(), Some(3));
    }

    #[test]
    fn test_cursor_resets_between_runs() {
        let mut menu = sample_menu();
        let mut term = screen().with_keys([Key::Right, Key::Enter]);
        assert_eq!(menu.run(&mut term, 0, 0).unwrap(), Some(1));

        term.push_key(Key::Enter);
        assert_eq!(menu.run(&mut term, 0, 0).unwrap(), Some(0));
    }

    #[test]
    fn test_run_restores_terminal_state() {
        let mut menu = sample_menu();
        let mut term = screen().with_keys([Key::Down, Key::Enter]);
        term.set_cursor(11, 11);

        menu.run(&mut term, 1, 1).unwrap();
        assert_eq!(term.cursor_position().unwrap(), (11, 11));
        assert_eq!(term.color(), ratatui::style::Color::Reset);
    }

    #[test]
    fn test_run_through_trait_object() {
        let mut menu = sample_menu();
        let mut term = screen().with_keys([Key::Right, Key::Right, Key::Enter]);
        let dyn_term: &mut dyn Terminal = &mut term;
        assert_eq!(menu.run(dyn_term, 0, 0).unwrap(), Some(2));
    }

    /// Terminal whose writes always fail
    struct BrokenTerminal;

    impl Terminal for BrokenTerminal {
        fn move_cursor(&mut self, _x: u16, _y: u16) -> Result<()> {
            Ok(())
        }
        fn write(&mut self, _text: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into())
        }
        fn read_key(&mut self) -> Result<Option<Key>> {
            Ok(Some(Key::Enter))
        }
        fn color(&self) -> ratatui::style::Color {
            ratatui::style::Color::Reset
        }
        fn set_color(&mut self, _color: ratatui::style::Color) -> Result<()> {
            Ok(())
        }
        fn cursor_position(&mut self) -> Result<(u16, u16)> {
            Ok((0, 0))
        }
        fn viewport_width(&mut self) -> Result<u16> {
            Ok(80)
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut menu = sample_menu();
        let err = menu.run(&mut BrokenTerminal, 0, 0).unwrap_err();
        assert!(matches!(err, crate::error::MenuError::TerminalIo(_)));
    }

    #[test]
    fn test_handle_key_transitions() {
        let mut menu = sample_menu();
        assert_eq!(menu.handle_key(Key::Down), State::Displaying);
        assert_eq!(menu.cursor(), 4);
        assert_eq!(menu.handle_key(Key::Enter), State::Finalizing(Some(4)));
        assert_eq!(menu.handle_key(Key::Char('C')), State::Finalizing(None));
        assert_eq!(menu.handle_key(Key::Other), State::Displaying);
        assert_eq!(menu.cursor(), 4);
    }

    #[test]
    fn test_menu_is_visible_while_waiting() {
        let mut menu = sample_menu();
        let mut term = screen();
        ui::draw(&mut term, menu.spec(), menu.cursor(), 0, 0).unwrap();
        assert!(term.row_text(2).contains("> Hello"));
        assert!(term.row_text(4).contains("Jörn"));

        menu.handle_key(Key::Down);
        ui::draw(&mut term, menu.spec(), menu.cursor(), 0, 0).unwrap();
        assert!(term.row_text(2).contains("| Hello"));
        assert!(term.row_text(4).contains("> is"));
    }
}
