use crate::config::Config;
use crate::gemini::error::GenerationError;
use crate::gemini::traits::GenerationClient;
use crate::gemini::types::{
    ApiErrorBody, GenerateContentRequest, GenerateContentResponse, GenerationOptions,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Gemini `generateContent` client over HTTPS
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiClient {
    /// Create a client from loaded configuration
    pub fn new(config: &Config) -> Result<Self> {
        // No request timeout: callers impose their own deadline.
        let client = Client::builder()
            .user_agent(concat!("housing-oracle/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

/// Best human-readable message for a failed call
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status.canonical_reason().unwrap_or_default().to_string(),
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        model: &str,
        options: GenerationOptions,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let url = self.endpoint(model);
        debug!("POST {} ({} byte prompt)", url, prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::new(prompt, options))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Generation service returned status: {}", status);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: api_error_message(status, &body),
            });
        }

        debug!("Received {} bytes from generation service", body.len());

        serde_json::from_str(&body).map_err(|e| GenerationError::Decode(e.to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "Gemini"
    }
}
