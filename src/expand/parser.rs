//! Model response parsing
//!
//! Models are asked for one item per line without numbering, but routinely
//! answer with `1. ...`, `- ...` or markdown headings anyway. Parsing keeps
//! the order of the remaining lines and strips the enumeration prefix.

/// Number of similar questions in every result
pub const SIMILAR_QUESTION_COUNT: usize = 3;

/// Upper bound on extracted key terms
pub const MAX_KEY_TERMS: usize = 5;

const COMMENT_MARKER: char = '#';

/// Leading characters treated as enumeration or bullets
fn is_enumeration_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | ')') || c.is_whitespace()
}

/// Split raw model text into cleaned, non-empty lines
///
/// Lines that are blank or start with `#` are dropped, both before and after
/// the enumeration prefix is removed, so the output is stable under
/// re-parsing.
pub fn parse_lines(raw_text: &str) -> Vec<String> {
    raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(|line| line.trim_start_matches(is_enumeration_char).trim_end())
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}

/// Keep the first three questions, padding with `query` when short
pub fn normalize_similar_questions(parsed: Vec<String>, query: &str) -> [String; SIMILAR_QUESTION_COUNT] {
    let mut questions = parsed.into_iter();
    std::array::from_fn(|_| questions.next().unwrap_or_else(|| query.to_string()))
}

/// Keep at most the first five terms
pub fn normalize_key_terms(mut parsed: Vec<String>) -> Vec<String> {
    parsed.truncate(MAX_KEY_TERMS);
    parsed
}
