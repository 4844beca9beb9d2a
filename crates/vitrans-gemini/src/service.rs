//! The generate-content boundary and its error type.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Part;

/// Prompt contents: a bare text prompt or an ordered list of parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    Prompt(String),
    Parts(Vec<Part>),
}

impl Contents {
    /// Contents as wire parts, in order.
    pub fn into_parts(self) -> Vec<Part> {
        match self {
            Self::Prompt(text) => vec![Part::text(text)],
            Self::Parts(parts) => parts,
        }
    }
}

/// One "generate content" call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Model ID (e.g. "gemini-2.5-flash").
    pub model: String,
    pub contents: Contents,
    /// Requested response MIME type, e.g. "text/plain".
    pub response_mime_type: Option<String>,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Prompt blocked: {0}")]
    Blocked(String),
    #[error("Response contained no text (finish reason: {})", .finish_reason.as_deref().unwrap_or("unknown"))]
    EmptyResponse { finish_reason: Option<String> },
    #[error("Response parse failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A remote service that turns a prompt into a single text payload.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Provider identifier, used in logs.
    fn id(&self) -> &str;
    /// Issue one request and return the response text.
    async fn generate_content(&self, req: GenerateRequest) -> Result<String, ServiceError>;
}
