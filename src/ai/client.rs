//! Model client abstraction
//!
//! Query expansion only needs "text completion with sampling controls" from a
//! hosted model. Everything above this module talks to [`ModelClient`], so the
//! parsing and orchestration logic can run against a fake in tests.

use crate::core::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Model used to paraphrase the user question
pub const SIMILAR_QUESTIONS_MODEL: &str = "gemini-2.0-flash";

/// Model used to pick key legal terms
pub const KEY_TERMS_MODEL: &str = "gemini-2.0-flash-exp";

/// Sampling controls passed through to the hosted model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl SamplingConfig {
    /// Sampling for paraphrase generation (more diverse)
    pub const SIMILAR_QUESTIONS: SamplingConfig = SamplingConfig {
        temperature: 0.7,
        top_k: 10,
        top_p: 0.9,
        max_output_tokens: 500,
    };

    /// Sampling for key-term extraction (near-deterministic)
    pub const KEY_TERMS: SamplingConfig = SamplingConfig {
        temperature: 0.3,
        top_k: 5,
        top_p: 0.8,
        max_output_tokens: 300,
    };
}

/// Model variant plus sampling for one expansion stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub model: String,
    #[serde(flatten)]
    pub sampling: SamplingConfig,
}

impl StageConfig {
    pub fn similar_questions() -> Self {
        Self {
            model: SIMILAR_QUESTIONS_MODEL.to_string(),
            sampling: SamplingConfig::SIMILAR_QUESTIONS,
        }
    }

    pub fn key_terms() -> Self {
        Self {
            model: KEY_TERMS_MODEL.to_string(),
            sampling: SamplingConfig::KEY_TERMS,
        }
    }

    /// Borrow this stage as a request for `prompt`
    pub fn request<'a>(&'a self, prompt: &'a str) -> CompletionRequest<'a> {
        CompletionRequest {
            model: &self.model,
            prompt,
            sampling: self.sampling,
        }
    }
}

/// A single completion call
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub sampling: SamplingConfig,
}

/// Hosted text-generation service
///
/// Implementations return the raw generated text. Transport, auth, quota and
/// decoding failures all surface as [`crate::Error::ModelInvocation`]; there
/// is no retry at this layer.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String>;
}
