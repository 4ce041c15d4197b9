//! Reusable TUI widgets.

pub mod dialogs;
pub mod footer;
pub mod header;
pub mod select;
pub mod spinner;
