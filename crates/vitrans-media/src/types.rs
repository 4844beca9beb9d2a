//! Encoder input, output and error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A local image file the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    path: PathBuf,
}

impl SelectedImage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Image content ready to be sent inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Standard base64 of the full file content.
    pub encoded_bytes: String,
    /// MIME type (e.g. "image/png").
    pub media_type: String,
}

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("Failed to read image file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not determine the media type of {0}")]
    UnknownMediaType(PathBuf),
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("Failed to parse file data: {0}")]
    MalformedEnvelope(&'static str),
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}
