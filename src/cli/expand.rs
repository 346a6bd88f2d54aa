//! Expand command implementation

use crate::ai::GeminiClient;
use crate::cli::{dictionary_path, load_config, ExpandArgs, OutputFormat};
use crate::dictionary;
use crate::expand::{ExpansionRequest, QueryExpander};
use crate::output::format_result;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Run the expand command
pub async fn run(args: ExpandArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    let path = dictionary_path(args.dictionary, &config);
    let terms = dictionary::load_with_key(&path, &config.dictionary.key);
    info!(path = %path.display(), terms = terms.len(), "Using term dictionary");

    let client = GeminiClient::from_config(&config.gemini);
    let expander = QueryExpander::from_config(client, &config);

    let request = ExpansionRequest::new(args.query);
    let result = expander.expand_request(&request, &terms).await;

    print!(
        "{}",
        format_result(&result, OutputFormat::from_json_flag(args.json))
    );
    if args.json {
        println!();
    }

    Ok(())
}
