//! Dictionary-grounded query expansion
//!
//! Turns one user question into a keyword group for downstream retrieval:
//! the question itself, three paraphrases, and up to five key legal terms.

mod orchestrator;
mod parser;

pub use orchestrator::{ExpansionRequest, ExpansionResult, QueryExpander};
pub use parser::{
    normalize_key_terms, normalize_similar_questions, parse_lines, MAX_KEY_TERMS,
    SIMILAR_QUESTION_COUNT,
};
