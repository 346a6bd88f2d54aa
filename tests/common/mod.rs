//! Shared test utilities for the expansion harnesses.
//!
//! `FakeModelClient` stands in for the hosted model: responses and failures
//! are scripted per model name, and every prompt it receives is recorded.

use async_trait::async_trait;
use customs_expand::ai::{CompletionRequest, ModelClient};
use customs_expand::Error;
use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

pub const SIMILAR_MODEL: &str = "gemini-2.0-flash";
pub const KEY_TERMS_MODEL: &str = "gemini-2.0-flash-exp";

enum Scripted {
    Text(String),
    Fail(String),
}

/// A recorded call to the fake client
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub prompt: String,
}

#[derive(Default)]
pub struct FakeModelClient {
    scripts: HashMap<String, Scripted>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeModelClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer calls to `model` with `text`
    pub fn with_response(mut self, model: &str, text: &str) -> Self {
        self.scripts
            .insert(model.to_string(), Scripted::Text(text.to_string()));
        self
    }

    /// Fail calls to `model` with a model invocation error
    pub fn with_failure(mut self, model: &str, message: &str) -> Self {
        self.scripts
            .insert(model.to_string(), Scripted::Fail(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for FakeModelClient {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn complete(&self, request: &CompletionRequest<'_>) -> customs_expand::Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: request.model.to_string(),
            prompt: request.prompt.to_string(),
        });

        match self.scripts.get(request.model) {
            Some(Scripted::Text(text)) => Ok(text.clone()),
            Some(Scripted::Fail(message)) => Err(Error::ModelInvocation {
                model: request.model.to_string(),
                message: message.clone(),
            }),
            None => Err(Error::ModelInvocation {
                model: request.model.to_string(),
                message: "no scripted response".to_string(),
            }),
        }
    }
}

/// Write a dictionary file in the extraction-script layout
pub fn dictionary_file(terms: &[&str]) -> NamedTempFile {
    let body = serde_json::json!({
        "메타데이터": {
            "생성일시": "2025-01-15 10:30:00",
            "원본파일": "customs_investigation.json",
            "고유_용어수": terms.len(),
        },
        "용어_목록": terms,
    });
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.to_string().as_bytes()).unwrap();
    file
}
