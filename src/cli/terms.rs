//! Terms command implementation

use crate::cli::{dictionary_path, load_config, OutputFormat, TermsArgs};
use crate::dictionary::{self, DictionaryMetadata};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Run the terms command
pub fn run(args: TermsArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let path = dictionary_path(args.dictionary, &config);

    let terms = dictionary::try_load(&path, &config.dictionary.key)
        .with_context(|| format!("Cannot read term dictionary {}", path.display()))?;
    // Metadata is informational; a broken block should not hide the terms
    let metadata = dictionary::load_metadata(&path).ok().flatten();

    let summary = DictionarySummary {
        path: path.display().to_string(),
        total_terms: terms.len(),
        metadata,
        terms: terms.iter().take(args.limit).cloned().collect(),
    };

    match OutputFormat::from_json_flag(args.json) {
        OutputFormat::Human => print!("{}", format_summary(&summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

#[derive(Serialize)]
struct DictionarySummary {
    path: String,
    total_terms: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<DictionaryMetadata>,
    terms: Vec<String>,
}

fn format_summary(summary: &DictionarySummary) -> String {
    let mut output = format!(
        "법률 용어 사전: {}\n  총 용어 수: {}개\n",
        summary.path, summary.total_terms
    );

    if let Some(meta) = &summary.metadata {
        if let Some(created) = meta.created_at() {
            output.push_str(&format!("  생성일시: {}\n", created.format("%Y-%m-%d %H:%M:%S")));
        }
        if let Some(source) = &meta.source_file {
            output.push_str(&format!("  원본파일: {}\n", source));
        }
        if let Some(articles) = meta.article_count {
            output.push_str(&format!("  총 조문수: {}\n", articles));
        }
    }

    if !summary.terms.is_empty() {
        output.push_str(&format!("  처음 {}개 용어:\n", summary.terms.len()));
        for (i, term) in summary.terms.iter().enumerate() {
            output.push_str(&format!("    {}. {}\n", i + 1, term));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let summary = DictionarySummary {
            path: "law_terms_dictionary.json".to_string(),
            total_terms: 812,
            metadata: Some(DictionaryMetadata {
                created_at: Some("2025-01-15 10:30:00".to_string()),
                article_count: Some(330),
                ..Default::default()
            }),
            terms: vec!["가산세".to_string(), "가격신고".to_string()],
        };
        let text = format_summary(&summary);
        assert!(text.contains("총 용어 수: 812개"));
        assert!(text.contains("생성일시: 2025-01-15 10:30:00"));
        assert!(text.contains("총 조문수: 330"));
        assert!(text.contains("    2. 가격신고\n"));
    }
}
