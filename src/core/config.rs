//! Configuration management

use crate::ai::client::StageConfig;
use crate::core::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Key holding the term array in dictionary files
pub const DEFAULT_TERMS_KEY: &str = "용어_목록";

/// Dictionary file looked up relative to the working directory
pub const DEFAULT_DICTIONARY_FILE: &str = "law_terms_dictionary.json";

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub gemini: GeminiConfig,
    #[serde(default = "StageConfig::similar_questions")]
    pub similar_questions: StageConfig,
    #[serde(default = "StageConfig::key_terms")]
    pub key_terms: StageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path to the term dictionary JSON
    pub path: PathBuf,
    /// Top-level key holding the term array
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// API base URL (without trailing `/models`)
    pub base_url: String,
    /// Per-request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            gemini: GeminiConfig::default(),
            similar_questions: StageConfig::similar_questions(),
            key_terms: StageConfig::key_terms(),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_FILE),
            key: DEFAULT_TERMS_KEY.to_string(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::home()?.join("config.toml"))
    }

    /// Get the customs-expand home directory
    pub fn home() -> Result<PathBuf> {
        resolve_home(std::env::var("CUSTOMS_EXPAND_HOME").ok())
    }

    fn validate(&self) -> Result<()> {
        for stage in [&self.similar_questions, &self.key_terms] {
            if stage.model.trim().is_empty() {
                return Err(Error::ConfigError {
                    message: "model name must not be empty".to_string(),
                });
            }
            if !(0.0..=1.0).contains(&stage.sampling.top_p) {
                return Err(Error::ConfigError {
                    message: format!("top_p for {} must be within 0..=1", stage.model),
                });
            }
        }
        if self.dictionary.key.is_empty() {
            return Err(Error::ConfigError {
                message: "dictionary.key must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Explicit override first, then the platform data dir
fn resolve_home(override_dir: Option<String>) -> Result<PathBuf> {
    if let Some(home) = override_dir {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("dev", "customs-expand", "customs-expand")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| Error::ConfigError {
            message: "Could not determine customs-expand home directory".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::SamplingConfig;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dictionary.path, PathBuf::from("law_terms_dictionary.json"));
        assert_eq!(config.dictionary.key, "용어_목록");
        assert_eq!(config.gemini.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(config.similar_questions.sampling, SamplingConfig::SIMILAR_QUESTIONS);
        assert_eq!(config.key_terms.sampling, SamplingConfig::KEY_TERMS);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[dictionary]
path = "/data/law_terms_dictionary.json"

[gemini]
timeout_secs = 5
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(
            config.dictionary.path,
            PathBuf::from("/data/law_terms_dictionary.json")
        );
        assert_eq!(config.dictionary.key, "용어_목록");
        assert_eq!(config.gemini.timeout_secs, 5);
        assert_eq!(config.gemini.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(config.key_terms.model, "gemini-2.0-flash-exp");
    }

    #[test]
    fn test_stage_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[key_terms]
model = "gemini-1.5-flash"
temperature = 0.2
top_k = 4
top_p = 0.5
max_output_tokens = 200
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.key_terms.model, "gemini-1.5-flash");
        assert_eq!(config.key_terms.sampling.top_k, 4);
        assert_eq!(config.similar_questions.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_invalid_top_p_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[similar_questions]
model = "gemini-2.0-flash"
temperature = 0.7
top_k = 10
top_p = 1.5
max_output_tokens = 500
"#
        )
        .unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigError { .. }));
    }

    #[test]
    fn test_home_override() {
        assert_eq!(
            resolve_home(Some("/srv/customs".to_string())).unwrap(),
            PathBuf::from("/srv/customs")
        );
    }

    #[test]
    fn test_home_is_platform_data_dir() {
        // No resolvable user home in some sandboxes
        if let Some(dirs) = ProjectDirs::from("dev", "customs-expand", "customs-expand") {
            let home = resolve_home(None).unwrap();
            assert_eq!(home, dirs.data_dir());
            if dirs.config_dir() != dirs.data_dir() {
                assert_ne!(home, dirs.config_dir());
            }
        }
    }

    #[test]
    fn test_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gemini\ntimeout_secs = ").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(Error::TomlParse(_))
        ));
    }
}
