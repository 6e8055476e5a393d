//! Hexpertify Core Domain Types
//!
//! This crate contains the domain types shared by the Hexpertify front-end
//! with no dependencies on:
//! - Terminal rendering
//! - Network transport
//!
//! Row records and cell values feed the table widget; the profile, banner
//! and data service types back the profile views.

pub mod api;
pub mod banner;
pub mod error;
pub mod nav;
pub mod profile;
pub mod record;

// Re-export commonly used types
pub use api::{Fixture, MemoryProfileApi, ProfileApi};
pub use banner::Banner;
pub use error::CoreError;
pub use nav::{LinkKind, SidebarLink, SIDEBAR_LINKS, SIDEBAR_TITLE};
pub use profile::{Field, Profile, ProfileUpdate, ValidationErrors};
pub use record::{CellValue, RowRecord};
