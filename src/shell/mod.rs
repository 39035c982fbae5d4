//! Shell module: line-oriented console interface.
//!
//! Provides the login prompt and the numbered patient menu over any
//! `BufRead` / `Write` pair.

mod app;
mod console;
mod menu;

pub use app::{Shell, ShellState};
pub use console::{format_amount, Console};
pub use menu::MenuChoice;
