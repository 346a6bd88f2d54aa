//! Dictionary file loading
//!
//! File layout:
//! ```json
//! {
//!   "메타데이터": { "생성일시": "2025-01-15 10:00:00", "고유_용어수": 812, ... },
//!   "용어_목록": ["가산세", "과다환급관세의 징수", ...]
//! }
//! ```

use super::TermDictionary;
use crate::core::config::DEFAULT_TERMS_KEY;
use crate::core::error::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{error, info, warn};

const METADATA_KEY: &str = "메타데이터";
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Extraction statistics written alongside the term list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryMetadata {
    #[serde(rename = "생성일시", default)]
    pub created_at: Option<String>,
    #[serde(rename = "원본파일", default)]
    pub source_file: Option<String>,
    #[serde(rename = "총_조문수", default)]
    pub article_count: Option<u64>,
    #[serde(rename = "총_용어수_중복포함", default)]
    pub total_terms: Option<u64>,
    #[serde(rename = "고유_용어수", default)]
    pub unique_terms: Option<u64>,
    #[serde(rename = "추출방식", default)]
    pub extraction_method: Option<String>,
}

impl DictionaryMetadata {
    /// Parsed creation time, if present and well-formed
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
            .as_deref()
            .and_then(|s| NaiveDateTime::parse_from_str(s, CREATED_AT_FORMAT).ok())
    }
}

/// Load the dictionary stored under the default key, never failing
pub fn load(path: &Path) -> TermDictionary {
    load_with_key(path, DEFAULT_TERMS_KEY)
}

/// Load the dictionary stored under `key`, never failing
///
/// Any failure is logged and yields an empty dictionary.
pub fn load_with_key(path: &Path, key: &str) -> TermDictionary {
    match try_load(path, key) {
        Ok(dictionary) => {
            info!(
                path = %path.display(),
                terms = dictionary.len(),
                "Loaded term dictionary"
            );
            dictionary
        }
        Err(e) => {
            error!("{}", e);
            TermDictionary::default()
        }
    }
}

/// Load the dictionary stored under `key`
///
/// A file without `key` is an empty dictionary, not an error.
pub fn try_load(path: &Path, key: &str) -> Result<TermDictionary> {
    let mut root = read_object(path)?;

    match root.remove(key) {
        Some(value) => serde_json::from_value::<Vec<String>>(value)
            .map(TermDictionary::from)
            .map_err(|e| load_error(path, format!("\"{}\" is not a list of strings: {}", key, e))),
        None => {
            warn!(path = %path.display(), key, "Dictionary has no term list");
            Ok(TermDictionary::default())
        }
    }
}

/// Read the optional metadata block
pub fn load_metadata(path: &Path) -> Result<Option<DictionaryMetadata>> {
    let mut root = read_object(path)?;

    root.remove(METADATA_KEY)
        .map(|value| {
            serde_json::from_value(value)
                .map_err(|e| load_error(path, format!("invalid metadata: {}", e)))
        })
        .transpose()
}

fn read_object(path: &Path) -> Result<serde_json::Map<String, serde_json::Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| load_error(path, e.to_string()))?;

    match serde_json::from_str::<serde_json::Value>(&content).map_err(|e| load_error(path, e.to_string()))? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(load_error(path, "expected a JSON object at the top level")),
    }
}

fn load_error(path: &Path, message: impl Into<String>) -> Error {
    Error::DictionaryLoad {
        path: path.to_path_buf(),
        message: message.into(),
    }
}
