//! Prompt command implementation

use crate::ai::prompts::{build_key_terms_prompt, build_similar_questions_prompt};
use crate::cli::{dictionary_path, load_config, PromptArgs, PromptKind};
use crate::dictionary;
use anyhow::Result;
use std::path::Path;

/// Print the prompt that `expand` would send
pub fn run(args: PromptArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let path = dictionary_path(args.dictionary, &config);
    let terms = dictionary::load_with_key(&path, &config.dictionary.key);

    let prompt = match args.kind {
        PromptKind::Similar => build_similar_questions_prompt(&args.query, terms.terms()),
        PromptKind::KeyTerms => build_key_terms_prompt(&args.query, terms.terms()),
    };
    println!("{}", prompt);

    Ok(())
}
