//! Media capture and share adapters.
//!
//! The core never touches cameras, file pickers or clipboards directly.
//! Those capabilities live behind [`MediaCapture`] and [`ShareSink`]; the
//! core only validates what comes back and treats images as opaque
//! [`MediaHandle`]s.

use crate::catalog::CatalogItem;
use crate::config::UploadConfig;
use crate::error::{Result, StylrError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const INVALID_IMAGE_MESSAGE: &str = "Please select a valid image file (JPG, PNG, WebP)";
pub const IMAGE_TOO_LARGE_MESSAGE: &str = "Image size must be less than 10MB";

/// Opaque reference to an image (a data URI or a blob reference).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaHandle(String);

impl MediaHandle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validates a `data:<mime>;base64,<payload>` URI and wraps it.
    ///
    /// The MIME type and decoded size are checked with [`validate_upload`].
    pub fn from_data_uri(uri: &str, limits: &UploadConfig) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| StylrError::invalid_input(INVALID_IMAGE_MESSAGE))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| StylrError::invalid_input(INVALID_IMAGE_MESSAGE))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| StylrError::invalid_input(INVALID_IMAGE_MESSAGE))?;

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|_| StylrError::invalid_input(INVALID_IMAGE_MESSAGE))?;

        validate_upload(mime_type, bytes.len() as u64, limits)?;
        Ok(Self(uri.to_string()))
    }
}

/// Checks a selected file against the upload limits.
///
/// Rejections carry the exact text shown inline to the user.
pub fn validate_upload(mime_type: &str, size_bytes: u64, limits: &UploadConfig) -> Result<()> {
    if !mime_type.starts_with(&limits.accepted_mime_prefix) {
        tracing::warn!(mime_type, "Rejected upload: not an image");
        return Err(StylrError::invalid_input(INVALID_IMAGE_MESSAGE));
    }
    if size_bytes > limits.max_bytes {
        tracing::warn!(size_bytes, max = limits.max_bytes, "Rejected upload: too large");
        return Err(StylrError::invalid_input(IMAGE_TOO_LARGE_MESSAGE));
    }
    Ok(())
}

/// Camera or file-picker capability provided by the host UI.
#[async_trait::async_trait]
pub trait MediaCapture: Send + Sync {
    /// Lets the user take or pick a photo.
    ///
    /// # Returns
    ///
    /// - `Ok(MediaHandle)`: The captured image
    /// - `Err(StylrError::MediaCapture)`: Permission denied, cancelled, ...
    async fn capture_or_select_image(&self) -> Result<MediaHandle>;
}

/// What a share action hands to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShareTarget {
    Item { item: Arc<CatalogItem> },
    Text { text: String },
}

/// Clipboard / native share capability. Fire-and-forget.
pub trait ShareSink: Send + Sync {
    fn share(&self, target: ShareTarget);
}
