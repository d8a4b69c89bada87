//! Fallible HTTP client for the Gemini `generateContent` endpoint

use super::wire::{self, GeminiErrorResponse, GeminiResponse};
use crate::config::GeminiConfig;
use parlor_application::ports::reply_generator::GeneratorError;
use parlor_domain::{HostPersona, Transcript};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// One request/response exchange per call, no retries, no streaming.
///
/// Holds only the injected persona and connection settings; nothing is
/// remembered across calls beyond what the caller supplies in the
/// transcript.
pub struct GeminiClient {
    client: Client,
    url: String,
    api_key: String,
    persona: HostPersona,
}

impl GeminiClient {
    pub fn new(
        config: &GeminiConfig,
        api_key: String,
        persona: HostPersona,
    ) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeneratorError::ConnectionError(e.to_string()))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        info!(model = %config.model, "Gemini backend initialized");

        Ok(Self {
            client,
            url,
            api_key,
            persona,
        })
    }

    pub fn persona(&self) -> &HostPersona {
        &self.persona
    }

    /// Request one host reply for the transcript so far.
    pub async fn generate_content(
        &self,
        transcript: &Transcript,
    ) -> Result<String, GeneratorError> {
        let request = wire::build_request(&self.persona, transcript);

        debug!(turns = transcript.len(), "Requesting host reply");

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout
                } else if e.is_connect() {
                    GeneratorError::ConnectionError(e.to_string())
                } else {
                    GeneratorError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeneratorError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GeneratorError::RequestFailed(format!(
                "HTTP {}: {}",
                status, message
            )));
        }

        let decoded: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            GeneratorError::MalformedResponse(format!("{}: {}", e, preview))
        })?;

        wire::extract_text(decoded)
            .ok_or_else(|| GeneratorError::MalformedResponse("no text in candidates".to_string()))
    }
}
