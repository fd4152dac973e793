//! Captured image assets.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// An opaque encoded image supplied by the operator (file or camera frame).
///
/// The payload is a data URL (`data:<mime>;base64,<body>`), the representation
/// produced by capture/file-picker collaborators. Never mutated once created;
/// the workflow replaces or clears whole assets on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub data_url: String,
    pub mime_type: String,
}

impl ImageAsset {
    /// Wrap an already-encoded data URL.
    pub fn new(data_url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Encode raw image bytes into a data-URL asset.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        let body = STANDARD.encode(bytes);
        Self {
            data_url: format!("data:{mime_type};base64,{body}"),
            mime_type: mime_type.to_string(),
        }
    }
}
