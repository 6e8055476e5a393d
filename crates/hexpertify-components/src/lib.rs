//! Shared TUI components for Hexpertify.
//!
//! This crate provides reusable UI components, widgets, and utilities
//! for building the Hexpertify terminal front-end.
//!
//! # Architecture
//!
//! The crate is organized into:
//! - `widgets` - Reusable ratatui widgets (data table, chip input, text fields, dialogs, header, footer, spinner)
//! - `theme` - Colors, styles, and visual constants
//! - `utils` - Text truncation and formatting utilities
//!
//! # Usage
//!
//! Components are data-agnostic. Tables read any [`RowRecord`] through
//! column descriptors; inputs report changes as return values instead of
//! owning the parent's data.
//!
//! [`RowRecord`]: hexpertify_core::RowRecord

pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;
pub use utils::{format_duration, truncate};
pub use widgets::dialogs::{centered_rect, InputDialog};
pub use widgets::footer::Footer;
pub use widgets::header::{Header, StatusIndicator};
pub use widgets::input::{InputField, TextBuffer};
pub use widgets::multi_input::{InputOutcome, MultiInput, MultiInputState, DEFAULT_PLACEHOLDER};
pub use widgets::spinner::Spinner;
pub use widgets::table::{
    CellRenderFn, DataTable, TableBody, TableCell, TableColumn, TableHover, TableModel,
    NO_DATA, NOT_AVAILABLE,
};
