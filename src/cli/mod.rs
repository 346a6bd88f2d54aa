//! CLI command definitions and handlers

pub mod expand;
pub mod prompt;
pub mod terms;

use crate::core::config::Config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

const LONG_ABOUT: &str = r#"
Legal-term grounded query expansion for Korean customs-law retrieval.

Each question is expanded into a keyword group:
    original question + 3 similar questions + up to 5 key legal terms

QUICK START:
    1. export GOOGLE_API_KEY=...         Gemini API key
    2. customs-expand terms               Check the term dictionary loads
    3. customs-expand expand "<질문>"      Expand a question

CONFIGURATION:
    ~/.local/share/customs-expand/config.toml on Linux (or $CUSTOMS_EXPAND_HOME/config.toml)
    Logging is controlled by CUSTOMS_EXPAND_LOG (e.g. CUSTOMS_EXPAND_LOG=debug)

EXAMPLES:
    customs-expand expand "가산세 면제에 대해 논의한 판례"
    customs-expand expand "관세 환급 절차" --json
    customs-expand terms -n 30
    customs-expand prompt "관세 환급 절차" --kind key-terms
"#;

/// Legal-term grounded query expansion
#[derive(Parser, Debug)]
#[command(name = "customs-expand")]
#[command(author, version)]
#[command(about = "Legal-term grounded query expansion for customs-law retrieval")]
#[command(long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: <data dir>/customs-expand/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (raw model responses)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand a question into similar questions and key terms
    #[command(visible_alias = "e")]
    Expand(ExpandArgs),

    /// Show the loaded term dictionary
    #[command(visible_alias = "t")]
    Terms(TermsArgs),

    /// Print a rendered prompt without calling the model
    Prompt(PromptArgs),
}

/// Arguments for the expand command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:
    customs-expand expand \"관세 환급을 받으려면 어떻게 해야 하나요?\"
    customs-expand expand \"가산세 면제\" --json
    customs-expand expand \"가산세 면제\" -d ./law_terms_dictionary.json")]
pub struct ExpandArgs {
    /// Question to expand
    pub query: String,

    /// Term dictionary file (default: from config)
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// JSON output
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the terms command
#[derive(Parser, Debug)]
pub struct TermsArgs {
    /// Term dictionary file (default: from config)
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Number of terms to show
    #[arg(short = 'n', long, default_value = "5")]
    pub limit: usize,

    /// JSON output
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the prompt command
#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Question to render into the prompt
    pub query: String,

    /// Which prompt to render
    #[arg(short, long, value_enum, default_value_t = PromptKind::Similar)]
    pub kind: PromptKind,

    /// Term dictionary file (default: from config)
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Similar-questions prompt
    Similar,
    /// Key-terms prompt
    KeyTerms,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Load config from an explicit path, or the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

/// Dictionary path from the CLI flag, falling back to config
pub fn dictionary_path(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| config.dictionary.path.clone())
}
