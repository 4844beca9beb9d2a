//! Gemini REST client.

use async_trait::async_trait;
use reqwest::Client;

use vitrans_config::{ApiKey, AppConfig};

use crate::service::{GenerateRequest, GenerativeService, ServiceError};
use crate::types::{
    ApiErrorEnvelope, GenerateContentBody, GenerateContentResponse, GenerationConfig,
    RequestContent,
};

/// Google Gemini `generateContent` provider.
pub struct GeminiService {
    api_key: ApiKey,
    base_url: String,
    client: Client,
}

impl GeminiService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &AppConfig, client: Client) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }
}

#[async_trait]
impl GenerativeService for GeminiService {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn generate_content(&self, req: GenerateRequest) -> Result<String, ServiceError> {
        let body = GenerateContentBody {
            contents: vec![RequestContent {
                role: "user",
                parts: req.contents.into_parts(),
            }],
            generation_config: req
                .response_mime_type
                .map(|response_mime_type| GenerationConfig { response_mime_type }),
        };

        let resp = self
            .client
            .post(self.endpoint(&req.model))
            .header("x-goog-api-key", self.api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(model = %req.model, %status, bytes = text.len(), "Gemini response");

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorEnvelope>(&text) {
                Ok(envelope) => match envelope.error.status {
                    Some(s) => format!("{s}: {}", envelope.error.message),
                    None => envelope.error.message,
                },
                Err(_) if text.is_empty() => "Unknown error".to_string(),
                Err(_) => text.chars().take(200).collect(),
            };
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        if let Some(text) = parsed.text() {
            return Ok(text);
        }

        if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
            tracing::debug!(model = %req.model, %reason, "Prompt blocked");
            return Err(ServiceError::Blocked(reason));
        }
        let finish_reason = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.finish_reason);
        tracing::debug!(model = %req.model, ?finish_reason, "No text in response");
        Err(ServiceError::EmptyResponse { finish_reason })
    }
}
