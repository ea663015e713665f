//! OpenAI Images API provider.
//!
//! Generation goes through `images/generations` (JSON), editing through the
//! multipart `images/edits` endpoint. Images are requested as b64_json and
//! decoded to raw bytes before returning.

use super::{ImageProvider, ProviderError};
use crate::config::OpenAiConfig;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct OpenAiImageProvider {
    config: OpenAiConfig,
    client: Client,
}

#[derive(Serialize)]
struct GenerationsRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    n: u32,
}

#[derive(Deserialize)]
struct ImagesResponse {
    data: Vec<ImagePayload>,
}

#[derive(Deserialize)]
struct ImagePayload {
    b64_json: Option<String>,
}

impl OpenAiImageProvider {
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base.trim_end_matches('/'), path)
    }

    fn ensure_configured(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }
        Ok(())
    }

    /// Extract the first image from a provider response, decoded to bytes.
    async fn read_image_bytes(response: reqwest::Response) -> Result<Vec<u8>, ProviderError> {
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "OpenAI API error {}: {}",
                status, error_text
            )));
        }

        let body: ImagesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let encoded = body
            .data
            .into_iter()
            .next()
            .and_then(|img| img.b64_json)
            .ok_or_else(|| {
                ProviderError::InvalidResponse("no image payload in response".to_string())
            })?;

        BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| ProviderError::InvalidResponse(format!("bad base64 payload: {}", e)))
    }
}

#[async_trait]
impl ImageProvider for OpenAiImageProvider {
    async fn create_image(&self, prompt: &str, size: &str) -> Result<Vec<u8>, ProviderError> {
        self.ensure_configured()?;

        let request = GenerationsRequest {
            model: &self.config.image_model,
            prompt,
            size,
            n: 1,
        };

        tracing::debug!(
            model = %self.config.image_model,
            size = %size,
            prompt_len = prompt.len(),
            "Sending image generation request"
        );

        let response = self
            .client
            .post(self.api_url("images/generations"))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Self::read_image_bytes(response).await
    }

    async fn edit_image(&self, prompt: &str, image: &[u8]) -> Result<Vec<u8>, ProviderError> {
        self.ensure_configured()?;

        let part = Part::bytes(image.to_vec())
            .file_name("image.png")
            .mime_str("image/png")
            .map_err(|e| ProviderError::InvalidResponse(format!("image part: {}", e)))?;

        let form = Form::new()
            .text("model", self.config.edit_model.clone())
            .text("prompt", prompt.to_string())
            .part("image", part);

        tracing::debug!(
            model = %self.config.edit_model,
            image_len = image.len(),
            prompt_len = prompt.len(),
            "Sending image edit request"
        );

        let response = self
            .client
            .post(self.api_url("images/edits"))
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Self::read_image_bytes(response).await
    }
}
