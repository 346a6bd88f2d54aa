//! Two-stage query expansion
//!
//! 1. Paraphrase the question (exactly three results, padded with the query)
//! 2. Pick key legal terms (at most five, possibly none)
//!
//! The stages run one after the other and fail independently: each one has a
//! fixed fallback, so `expand` always returns a well-formed result.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::parser::{
    normalize_key_terms, normalize_similar_questions, parse_lines, SIMILAR_QUESTION_COUNT,
};
use crate::ai::client::{ModelClient, StageConfig};
use crate::ai::prompts::{build_key_terms_prompt, build_similar_questions_prompt};
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::dictionary::TermDictionary;

/// Raw responses are logged up to this many characters
const RAW_PREVIEW_CHARS: usize = 500;

/// A user question to expand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionRequest {
    pub original_query: String,
}

impl ExpansionRequest {
    pub fn new(original_query: impl Into<String>) -> Self {
        Self {
            original_query: original_query.into(),
        }
    }
}

/// Expanded query: original + 3 similar questions + up to 5 key terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpansionResult {
    original_query: String,
    similar_questions: [String; SIMILAR_QUESTION_COUNT],
    key_terms: Vec<String>,
    /// `[original_query] + similar_questions + key_terms`
    keyword_group: Vec<String>,
}

impl ExpansionResult {
    pub fn new(
        original_query: String,
        similar_questions: [String; SIMILAR_QUESTION_COUNT],
        key_terms: Vec<String>,
    ) -> Self {
        let key_terms = normalize_key_terms(key_terms);
        let keyword_group = std::iter::once(original_query.clone())
            .chain(similar_questions.iter().cloned())
            .chain(key_terms.iter().cloned())
            .collect();

        Self {
            original_query,
            similar_questions,
            key_terms,
            keyword_group,
        }
    }

    pub fn original_query(&self) -> &str {
        &self.original_query
    }

    pub fn similar_questions(&self) -> &[String] {
        &self.similar_questions
    }

    pub fn key_terms(&self) -> &[String] {
        &self.key_terms
    }

    pub fn keyword_group(&self) -> &[String] {
        &self.keyword_group
    }
}

/// Runs both expansion stages against a [`ModelClient`]
pub struct QueryExpander<C> {
    client: C,
    similar_questions: StageConfig,
    key_terms: StageConfig,
}

impl<C: ModelClient> QueryExpander<C> {
    /// Create an expander with the default models and sampling
    pub fn new(client: C) -> Self {
        Self::with_stages(client, StageConfig::similar_questions(), StageConfig::key_terms())
    }

    pub fn with_stages(client: C, similar_questions: StageConfig, key_terms: StageConfig) -> Self {
        Self {
            client,
            similar_questions,
            key_terms,
        }
    }

    pub fn from_config(client: C, config: &Config) -> Self {
        Self::with_stages(
            client,
            config.similar_questions.clone(),
            config.key_terms.clone(),
        )
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Expand `query` against `dictionary`
    pub async fn expand(&self, query: &str, dictionary: &TermDictionary) -> ExpansionResult {
        info!("Expanding query: {}", query);

        let similar_questions = self.generate_similar_questions(query, dictionary).await;
        let key_terms = self.extract_key_terms(query, dictionary).await;

        let result = ExpansionResult::new(query.to_string(), similar_questions, key_terms);

        info!(
            total = result.keyword_group().len(),
            similar_questions = result.similar_questions().len(),
            key_terms = result.key_terms().len(),
            "Query expansion complete"
        );

        result
    }

    pub async fn expand_request(
        &self,
        request: &ExpansionRequest,
        dictionary: &TermDictionary,
    ) -> ExpansionResult {
        self.expand(&request.original_query, dictionary).await
    }

    /// Stage 1: three paraphrases, falling back to the query itself
    pub async fn generate_similar_questions(
        &self,
        query: &str,
        dictionary: &TermDictionary,
    ) -> [String; SIMILAR_QUESTION_COUNT] {
        let prompt = build_similar_questions_prompt(query, dictionary.terms());

        let parsed = match self.complete_lines(&self.similar_questions, &prompt).await {
            Ok(lines) => lines,
            Err(e) => {
                log_stage_failure("similar questions", &e);
                Vec::new()
            }
        };

        let questions = normalize_similar_questions(parsed, query);
        info!(?questions, "Similar questions generated");
        questions
    }

    /// Stage 2: up to five key terms, empty on failure
    pub async fn extract_key_terms(&self, query: &str, dictionary: &TermDictionary) -> Vec<String> {
        let prompt = build_key_terms_prompt(query, dictionary.terms());

        let terms = match self.complete_lines(&self.key_terms, &prompt).await {
            Ok(lines) => normalize_key_terms(lines),
            Err(e) => {
                log_stage_failure("key terms", &e);
                Vec::new()
            }
        };

        info!(?terms, "Key terms extracted");
        terms
    }

    async fn complete_lines(&self, stage: &StageConfig, prompt: &str) -> Result<Vec<String>> {
        let raw = self.client.complete(&stage.request(prompt)).await?;

        debug!(
            model = %stage.model,
            provider = self.client.name(),
            "Raw model response: {}",
            preview(&raw)
        );
        debug!(lines = raw.trim().split('\n').count(), "Lines before parsing");

        let lines = parse_lines(&raw);
        if lines.is_empty() {
            return Err(Error::EmptyResponse {
                model: stage.model.clone(),
            });
        }
        Ok(lines)
    }
}

fn log_stage_failure(stage: &str, err: &Error) {
    match err {
        Error::EmptyResponse { .. } => warn!(stage, "{}, using fallback", err),
        _ => error!(stage, "{}, using fallback", err),
    }
}

fn preview(raw: &str) -> String {
    raw.chars().take(RAW_PREVIEW_CHARS).collect()
}
