//! Reusable TUI widgets.

pub mod dialogs;
pub mod footer;
pub mod header;
pub mod input;
pub mod multi_input;
pub mod spinner;
pub mod table;
