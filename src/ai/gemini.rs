//! Gemini client for the Generative Language REST API
//!
//! Calls `models/{model}:generateContent` with an API key and the stage's
//! sampling settings. The same `reqwest::Client` is reused for every call.

use crate::ai::client::{CompletionRequest, ModelClient, SamplingConfig};
use crate::core::config::GeminiConfig;
use crate::core::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

// =============================================================================
// REQUEST/RESPONSE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl From<SamplingConfig> for GenerationConfig {
    fn from(sampling: SamplingConfig) -> Self {
        Self {
            temperature: sampling.temperature,
            top_k: sampling.top_k,
            top_p: sampling.top_p,
            max_output_tokens: sampling.max_output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated
    fn into_text(self) -> Option<String> {
        let content = self.candidates?.into_iter().next()?.content?;
        if content.parts.is_empty() {
            return None;
        }
        Some(content.parts.into_iter().map(|p| p.text).collect())
    }
}

// =============================================================================
// GEMINI CLIENT
// =============================================================================

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Build a client from config, reading the key from `config.api_key_env`
    ///
    /// A missing key is not an error here: every call will fail with
    /// `ModelInvocation` and expansion falls back per stage.
    pub fn from_config(config: &GeminiConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!(
                env = %config.api_key_env,
                "Gemini API key not set, model calls will fall back"
            );
        }
        Self::new(
            &config.base_url,
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    fn invocation_error(model: &str, message: impl Into<String>) -> Error {
        Error::ModelInvocation {
            model: model.to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        let model = request.model;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Self::invocation_error(model, "API key not configured"))?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            generation_config: request.sampling.into(),
        };

        debug!(model, prompt_chars = request.prompt.chars().count(), "Calling Gemini");

        let res = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::invocation_error(model, format!("API request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Self::invocation_error(
                model,
                format!("Gemini API error {}: {}", status, text),
            ));
        }

        let response: GenerateContentResponse = res.json().await.map_err(|e| {
            Self::invocation_error(model, format!("Failed to parse response: {}", e))
        })?;

        response
            .into_text()
            .ok_or_else(|| Self::invocation_error(model, "Response contained no candidate text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: "질문" }],
            }],
            generation_config: SamplingConfig::SIMILAR_QUESTIONS.into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "질문");
        let config = &json["generationConfig"];
        assert_eq!(config["topK"], 10);
        assert_eq!(config["maxOutputTokens"], 500);
        assert!((config["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((config["topP"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"관세 환급\n"},{"text":"가산세"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().as_deref(), Some("관세 환급\n가산세"));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(response.into_text().is_none());

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#).unwrap();
        assert!(response.into_text().is_none());
    }

    #[test]
    fn test_endpoint_trims_slash() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/v1beta/",
            None,
            Duration::from_secs(5),
        );
        assert_eq!(
            client.endpoint("gemini-2.0-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let client = GeminiClient::new("http://127.0.0.1:9", None, Duration::from_secs(1));
        let request = CompletionRequest {
            model: "gemini-2.0-flash",
            prompt: "질문",
            sampling: SamplingConfig::KEY_TERMS,
        };
        let err = client.complete(&request).await.unwrap_err();
        assert!(matches!(err, Error::ModelInvocation { ref model, .. } if model == "gemini-2.0-flash"));
    }
}
