//! Keyboard-driven grid selection menu for text terminals.
//!
//! Build a [`MenuSpec`], wrap it in a [`GridMenu`] and [`run`](GridMenu::run)
//! it against any [`Terminal`]: arrow keys move the highlight, Enter confirms,
//! `C` cancels.

pub mod app;
pub mod config;
pub mod error;
pub mod grid;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use app::{GridMenu, State};
pub use config::MenuConfig;
pub use error::{MenuError, Result};
pub use grid::{Cursor, Direction, MenuSpec};
pub use terminal::{BufferTerminal, ConsoleTerminal, Key, Terminal};
