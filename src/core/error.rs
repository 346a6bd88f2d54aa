//! Error types for customs-expand

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// customs-expand error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load term dictionary {}: {message}", .path.display())]
    DictionaryLoad { path: PathBuf, message: String },

    #[error("Model {model} invocation failed: {message}")]
    ModelInvocation { model: String, message: String },

    #[error("Model {model} returned no usable lines")]
    EmptyResponse { model: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
