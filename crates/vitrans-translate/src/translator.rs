//! Translation client.

use std::sync::Arc;

use thiserror::Error;

use vitrans_config::AppConfig;
use vitrans_gemini::{Contents, GeminiService, GenerateRequest, GenerativeService, Part};
use vitrans_types::TranslationRequest;

use crate::normalize::clean_translation;
use crate::prompt::{IMAGE_INSTRUCTION, RESPONSE_MIME_TYPE, text_prompt};

/// The remote call did not succeed. Details are logged, not carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to get translation from API.")]
pub struct TranslationFailure;

/// Translates one unit of content per call through a [`GenerativeService`].
pub struct Translator {
    service: Arc<dyn GenerativeService>,
    model: String,
}

impl Translator {
    pub fn new(service: Arc<dyn GenerativeService>, model: impl Into<String>) -> Self {
        Self {
            service,
            model: model.into(),
        }
    }

    /// Translator backed by the Gemini REST API.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(GeminiService::new(config)), config.model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Translate freeform text. Blank input returns `""` without a remote call.
    pub async fn translate_text(&self, source_text: &str) -> Result<String, TranslationFailure> {
        if source_text.trim().is_empty() {
            return Ok(String::new());
        }
        self.generate("text", Contents::Prompt(text_prompt(source_text)))
            .await
    }

    /// Extract and translate any text visible in a base64-encoded image.
    pub async fn translate_image(
        &self,
        encoded_bytes: &str,
        media_type: &str,
    ) -> Result<String, TranslationFailure> {
        let parts = vec![
            Part::inline(media_type, encoded_bytes),
            Part::text(IMAGE_INSTRUCTION.as_str()),
        ];
        self.generate("image", Contents::Parts(parts)).await
    }

    pub async fn translate(&self, req: &TranslationRequest) -> Result<String, TranslationFailure> {
        match req {
            TranslationRequest::Text { source_text } => self.translate_text(source_text).await,
            TranslationRequest::Image {
                encoded_bytes,
                media_type,
            } => self.translate_image(encoded_bytes, media_type).await,
        }
    }

    async fn generate(
        &self,
        kind: &'static str,
        contents: Contents,
    ) -> Result<String, TranslationFailure> {
        let req = GenerateRequest {
            model: self.model.clone(),
            contents,
            response_mime_type: Some(RESPONSE_MIME_TYPE.to_string()),
        };

        match self.service.generate_content(req).await {
            Ok(raw) => {
                let cleaned = clean_translation(&raw);
                tracing::debug!(
                    provider = self.service.id(),
                    model = %self.model,
                    kind,
                    chars = cleaned.chars().count(),
                    "Translation received"
                );
                Ok(cleaned)
            }
            Err(e) => {
                tracing::error!(
                    provider = self.service.id(),
                    model = %self.model,
                    kind,
                    "Error translating {kind}: {e}"
                );
                Err(TranslationFailure)
            }
        }
    }
}
