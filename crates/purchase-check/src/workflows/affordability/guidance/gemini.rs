//! Gemini implementation of the advisory generator.
//!
//! Sends the rendered prompt to the `generateContent` REST endpoint and returns
//! the concatenated text parts of the first candidate. The API key and model
//! come from [`AdvisorConfig`] at construction time.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::advisor::{AdvisorError, AdvisoryGenerator};
use super::prompt::PromptContext;
use crate::config::AdvisorConfig;

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Advisory generator backed by Google's Gemini API.
pub struct GeminiAdvisor {
    api_key: Secret<String>,
    model: String,
    base_url: String,
    temperature: f32,
    timeout: Duration,
    client: Client,
}

impl GeminiAdvisor {
    /// Builds the client. Fails with `NotConfigured` when no API key is set.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(AdvisorError::NotConfigured)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AdvisorError::Transport(err.to_string()))?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            timeout: config.timeout,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn request_body(&self, prompt: String) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }
}

#[async_trait]
impl AdvisoryGenerator for GeminiAdvisor {
    async fn generate(&self, context: &PromptContext) -> Result<String, AdvisorError> {
        let body = self.request_body(context.render_prompt());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AdvisorError::Timeout {
                        timeout_secs: self.timeout.as_secs(),
                    }
                } else {
                    AdvisorError::Transport(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AdvisorError::Decode(err.to_string()))?;

        payload.into_text().ok_or(AdvisorError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");
        (!text.trim().is_empty()).then_some(text)
    }
}
