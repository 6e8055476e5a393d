//! Rendering.

mod render;

pub use render::{render, services_table_area};
