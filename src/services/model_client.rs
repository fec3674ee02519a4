//! Generative text model client
//!
//! Wraps a text-generation inference endpoint behind the
//! `TextGenerator` trait so the pipeline can run against a mock in
//! tests. The HTTP implementation speaks the common inference-server
//! shape: POST `{"inputs": ..., "parameters": {...}}`, receiving a list
//! of `{"generated_text": ...}` candidates.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = "survey-processor/0.1.0";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Model client errors
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Model API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Model returned no generated sequences")]
    EmptyResponse,
}

/// Fixed generation parameters for one invocation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerationParams {
    /// Cap on total output length in tokens
    pub max_length: u32,
    /// Number of continuations to generate
    pub num_return_sequences: u32,
    /// Truncate the input to the model context window
    pub truncation: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 150,
            num_return_sequences: 1,
            truncation: true,
        }
    }
}

/// A generative text model producing bounded-length continuations
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate continuation candidates for `input_text`
    async fn generate(
        &self,
        input_text: &str,
        params: GenerationParams,
    ) -> Result<Vec<String>, GeneratorError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParams,
}

#[derive(Debug, Deserialize)]
struct GeneratedSequence {
    generated_text: String,
}

/// HTTP client for a text-generation inference endpoint
pub struct HttpTextGenerator {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpTextGenerator {
    pub fn new(endpoint: String) -> Result<Self, GeneratorError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| GeneratorError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(
        &self,
        input_text: &str,
        params: GenerationParams,
    ) -> Result<Vec<String>, GeneratorError> {
        tracing::debug!(
            input_chars = input_text.len(),
            max_length = params.max_length,
            "Invoking text generation model"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&GenerateRequest {
                inputs: input_text,
                parameters: params,
            })
            .send()
            .await
            .map_err(|e| GeneratorError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ApiError(status.as_u16(), error_text));
        }

        let sequences: Vec<GeneratedSequence> = response
            .json()
            .await
            .map_err(|e| GeneratorError::ParseError(e.to_string()))?;

        if sequences.is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }

        Ok(sequences.into_iter().map(|s| s.generated_text).collect())
    }
}
