//! Banner image encoding.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::profile::{Field, ValidationErrors};

/// A banner image ready to be stored, encoded as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub banner_base64: String,
}

impl Banner {
    /// Encode raw image bytes with the given mime type.
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Self {
        Self {
            banner_base64: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        }
    }

    /// Read an image from disk and encode it.
    ///
    /// An empty path is reported as a validation failure on the banner
    /// field rather than an I/O error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            let mut errors = ValidationErrors::default();
            errors.insert(Field::Banner, "Image is required");
            return Err(CoreError::Validation(errors));
        }

        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes, mime_for(path)))
    }

    /// The mime type recorded in the data URL.
    pub fn mime(&self) -> Option<&str> {
        self.banner_base64
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime, _)| mime)
    }

    /// Decode the payload back into bytes.
    pub fn decode(&self) -> Result<Vec<u8>, CoreError> {
        let payload = self
            .banner_base64
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .ok_or_else(|| CoreError::InvalidInput("banner is not a base64 data URL".into()))?;
        STANDARD
            .decode(payload)
            .map_err(|e| CoreError::InvalidInput(format!("banner payload: {}", e)))
    }
}

/// Guess an image mime type from the file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
