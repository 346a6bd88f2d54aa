//! Hosted model access and prompt templates

pub mod client;
pub mod gemini;
pub mod prompts;

pub use client::{CompletionRequest, ModelClient, SamplingConfig, StageConfig};
pub use gemini::GeminiClient;
