//! Event types for communication between the backend and the UI.

use std::path::PathBuf;

use serde_json::{Map, Value};

use hexpertify_core::{Profile, ProfileUpdate, ValidationErrors};

/// Events sent from the backend to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    /// The profile finished loading.
    ProfileLoaded(Profile),

    /// The profile could not be loaded.
    ProfileLoadFailed(String),

    /// Profile edits were stored.
    ProfileSaved(Profile),

    /// Profile edits failed validation on the service side.
    ProfileRejected(ValidationErrors),

    /// Profile edits could not be stored.
    ProfileUpdateFailed(String),

    /// A new banner was stored.
    BannerSaved(Profile),

    /// The banner could not be read or stored.
    BannerFailed(String),

    /// Rows for the services table.
    ServicesLoaded(Vec<Map<String, Value>>),

    /// Any other backend failure.
    Error(String),
}

/// Commands sent from the UI to the backend.
#[derive(Debug)]
pub enum BackendCommand {
    /// Fetch the profile.
    LoadProfile,

    /// Store profile edits.
    UpdateProfile(ProfileUpdate),

    /// Read, encode and store a banner image.
    UploadBanner(PathBuf),

    /// Fetch the services table.
    LoadServices,

    /// Quit the backend.
    Quit,
}
