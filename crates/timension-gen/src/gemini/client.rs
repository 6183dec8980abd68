// Gemini-specific client implementation (HTTP direct, no SDK)

use crate::credentials::CredentialStore;
use crate::gemini::wire::GenerateContentResponse;
use crate::structured::parse_structured;
use crate::traits::GenerativeService;
use crate::types::{EncodedImage, ImageRequest, Shaping, TextRequest, TEXT_MODEL};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Prompt used by the connectivity probe; the reply is discarded.
const CONNECTIVITY_PROMPT: &str = "Reply with the single word: ok";

/// The sole component issuing network calls to the generative service.
///
/// The credential store is threaded in at construction and consulted per
/// request, so an operator can supply a token mid-session without
/// rebuilding the client.
pub struct GeminiClient {
    http_client: reqwest::Client,
    base_url: String,
    credentials: CredentialStore,
}

impl GeminiClient {
    pub fn new(credentials: CredentialStore) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: GEMINI_API_BASE.to_string(),
            credentials,
        })
    }

    /// Override the service endpoint (tests, regional proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Generate a payload constrained to `schema` and decode it into `T`.
    /// Absent if no credential resolves, if the request fails, or if the
    /// returned payload does not conform.
    pub async fn generate_structured<T: DeserializeOwned>(
        &self,
        prompt: impl Into<String>,
        schema: Value,
    ) -> Option<T> {
        let request = TextRequest::new(prompt).with_schema(schema);
        let raw = self.generate_text(request).await?;
        parse_structured(&raw)
    }

    /// Build a `generateContent` payload for a text request.
    fn build_text_payload(&self, request: &TextRequest) -> Value {
        let mut payload = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }],
            }],
        });

        let obj = payload.as_object_mut().unwrap();

        match &request.shaping {
            Shaping::Free => {}
            Shaping::Schema(schema) => {
                obj.insert(
                    "generationConfig".to_string(),
                    serde_json::json!({
                        "responseMimeType": "application/json",
                        "responseSchema": schema,
                    }),
                );
            }
            Shaping::Grounded => {
                obj.insert(
                    "tools".to_string(),
                    serde_json::json!([{ "google_search": {} }]),
                );
            }
        }

        payload
    }

    /// Build a `generateContent` payload for an image request.
    fn build_image_payload(&self, request: &ImageRequest) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }],
            }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
                "imageConfig": { "aspectRatio": request.aspect_ratio.as_str() },
            },
        })
    }

    async fn post_generate(
        &self,
        model: &str,
        credential: &str,
        payload: &Value,
    ) -> Result<GenerateContentResponse> {
        let response = self
            .http_client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, model
            ))
            .header("x-goog-api-key", credential)
            .json(payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, error_text);
        }

        response.json().await.context("Failed to parse response")
    }
}

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn generate_text(&self, request: TextRequest) -> Option<String> {
        let Some(credential) = self.credentials.resolve() else {
            tracing::debug!("no credential resolved, skipping text generation");
            return None;
        };

        let payload = self.build_text_payload(&request);
        match self.post_generate(&request.model, &credential, &payload).await {
            Ok(response) => {
                let text = response.text();
                if text.is_none() {
                    tracing::warn!(model = %request.model, "response carried no text part");
                }
                text
            }
            Err(e) => {
                tracing::warn!(model = %request.model, error = %e, "text generation failed");
                None
            }
        }
    }

    async fn generate_image(&self, request: ImageRequest) -> Option<EncodedImage> {
        let Some(credential) = self.credentials.resolve() else {
            tracing::debug!("no credential resolved, skipping image generation");
            return None;
        };

        let payload = self.build_image_payload(&request);
        match self.post_generate(&request.model, &credential, &payload).await {
            Ok(response) => {
                let image = response.inline_image();
                if image.is_none() {
                    tracing::warn!(model = %request.model, "response carried no inline image");
                }
                image
            }
            Err(e) => {
                tracing::warn!(model = %request.model, error = %e, "image generation failed");
                None
            }
        }
    }

    async fn test_connectivity(&self) -> bool {
        let Some(credential) = self.credentials.resolve() else {
            return false;
        };

        let payload = self.build_text_payload(&TextRequest::new(CONNECTIVITY_PROMPT));
        match self.post_generate(TEXT_MODEL, &credential, &payload).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "connectivity test failed");
                false
            }
        }
    }

    fn has_credential(&self) -> bool {
        self.credentials.has_credential()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new(CredentialStore::new(None)).unwrap()
    }

    #[test]
    fn test_text_payload_free_form() {
        let payload = client().build_text_payload(&TextRequest::new("Hello"));
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "Hello");
        assert!(payload.get("generationConfig").is_none());
        assert!(payload.get("tools").is_none());
    }

    #[test]
    fn test_text_payload_schema_shaping() {
        let request =
            TextRequest::new("Hello").with_schema(serde_json::json!({"type": "OBJECT"}));
        let payload = client().build_text_payload(&request);
        assert_eq!(
            payload["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(payload["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!(payload.get("tools").is_none());
    }

    #[test]
    fn test_text_payload_grounding() {
        let payload = client().build_text_payload(&TextRequest::new("Hello").grounded());
        assert!(payload["tools"][0].get("google_search").is_some());
        assert!(payload.get("generationConfig").is_none());
    }

    #[test]
    fn test_image_payload_aspect_ratio() {
        use crate::types::AspectRatio;
        let request = ImageRequest::new("A map").with_aspect_ratio(AspectRatio::Square);
        let payload = client().build_image_payload(&request);
        assert_eq!(payload["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
    }
}
