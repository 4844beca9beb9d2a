//! vitrans-types: Request, mode and validation types shared across the workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ──────────────────── User-facing Strings ────────────────────

/// Fixed Vietnamese strings shown to the end user.
pub mod messages {
    /// Validation message when the text input is blank.
    pub const ENTER_TEXT: &str = "Vui lòng nhập văn bản cần dịch.";
    /// Validation message when no image has been chosen.
    pub const CHOOSE_IMAGE: &str = "Vui lòng chọn một ảnh để dịch.";
    /// Generic failure message for the text mode.
    pub const TEXT_FAILED: &str = "Đã xảy ra lỗi khi dịch văn bản. Vui lòng thử lại.";
    /// Generic failure message for the image mode.
    pub const IMAGE_FAILED: &str = "Đã xảy ra lỗi khi dịch ảnh. Vui lòng thử lại.";
    /// Returned by the model when an image contains no text.
    pub const NO_TEXT_FOUND: &str = "Không tìm thấy văn bản nào trong ảnh.";
}

// ──────────────────── Mode Types ────────────────────

/// Which translator the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationMode {
    /// Landing selector, no translator open.
    #[default]
    Select,
    /// Freeform text translation.
    Text,
    /// Text extraction and translation from an image.
    Image,
}

impl TranslationMode {
    /// Validation message for a submit with nothing to translate.
    pub fn validation_message(&self) -> Option<&'static str> {
        match self {
            Self::Select => None,
            Self::Text => Some(messages::ENTER_TEXT),
            Self::Image => Some(messages::CHOOSE_IMAGE),
        }
    }

    /// Generic failure message shown instead of the underlying error.
    pub fn failure_message(&self) -> Option<&'static str> {
        match self {
            Self::Select => None,
            Self::Text => Some(messages::TEXT_FAILED),
            Self::Image => Some(messages::IMAGE_FAILED),
        }
    }
}

// ──────────────────── Validation ────────────────────

/// Input rejected locally, before any remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", messages::ENTER_TEXT)]
    EmptyText,
    #[error("{}", messages::CHOOSE_IMAGE)]
    NoImage,
}

// ──────────────────── Request Types ────────────────────

/// One unit of content to translate into Vietnamese.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranslationRequest {
    Text {
        source_text: String,
    },
    Image {
        /// Base64 payload of the full image.
        encoded_bytes: String,
        /// MIME type taken from the file, e.g. "image/png".
        media_type: String,
    },
}

impl TranslationRequest {
    /// Build a text request, rejecting input that is blank after trimming.
    pub fn text(source_text: impl Into<String>) -> Result<Self, ValidationError> {
        let source_text = source_text.into();
        if source_text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(Self::Text { source_text })
    }

    /// Build an image request from an already-encoded payload.
    pub fn image(
        encoded_bytes: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let encoded_bytes = encoded_bytes.into();
        let media_type = media_type.into();
        if encoded_bytes.is_empty() || media_type.trim().is_empty() {
            return Err(ValidationError::NoImage);
        }
        Ok(Self::Image {
            encoded_bytes,
            media_type,
        })
    }

    pub fn mode(&self) -> TranslationMode {
        match self {
            Self::Text { .. } => TranslationMode::Text,
            Self::Image { .. } => TranslationMode::Image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_rejects_blank() {
        assert_eq!(
            TranslationRequest::text("   \n\t"),
            Err(ValidationError::EmptyText)
        );
        assert_eq!(TranslationRequest::text(""), Err(ValidationError::EmptyText));
    }

    #[test]
    fn test_text_request_keeps_original_text() {
        let req = TranslationRequest::text("  Hello world ").unwrap();
        assert_eq!(
            req,
            TranslationRequest::Text {
                source_text: "  Hello world ".into()
            }
        );
        assert_eq!(req.mode(), TranslationMode::Text);
    }

    #[test]
    fn test_image_request_requires_media_type() {
        assert_eq!(
            TranslationRequest::image("aGVsbG8=", ""),
            Err(ValidationError::NoImage)
        );
        assert_eq!(
            TranslationRequest::image("", "image/png"),
            Err(ValidationError::NoImage)
        );
        let req = TranslationRequest::image("aGVsbG8=", "image/png").unwrap();
        assert_eq!(req.mode(), TranslationMode::Image);
    }

    #[test]
    fn test_validation_error_display_is_user_message() {
        assert_eq!(ValidationError::EmptyText.to_string(), messages::ENTER_TEXT);
        assert_eq!(ValidationError::NoImage.to_string(), messages::CHOOSE_IMAGE);
    }

    #[test]
    fn test_mode_messages() {
        assert_eq!(TranslationMode::default(), TranslationMode::Select);
        assert_eq!(TranslationMode::Select.failure_message(), None);
        assert_eq!(
            TranslationMode::Image.failure_message(),
            Some(messages::IMAGE_FAILED)
        );
        assert_eq!(
            TranslationMode::Text.validation_message(),
            Some(messages::ENTER_TEXT)
        );
    }

    #[test]
    fn test_request_serde_tag() {
        let req = TranslationRequest::text("hi").unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["source_text"], "hi");
    }

    #[test]
    fn test_request_mode_is_never_select() {
        let text = TranslationRequest::text("hi").unwrap();
        let image = TranslationRequest::image("aGk=", "image/png").unwrap();
        assert_ne!(text.mode(), TranslationMode::Select);
        assert_ne!(image.mode(), TranslationMode::Select);
        assert!(image.mode().validation_message().is_some());
    }
}
