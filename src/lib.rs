//! customs-expand - legal-term grounded query expansion
//!
//! Expands a Korean customs-law question into a keyword group (the question,
//! three paraphrases and up to five key legal terms) using a hosted Gemini
//! model grounded in a term dictionary extracted from article titles.

pub mod ai;
pub mod cli;
pub mod core;
pub mod dictionary;
pub mod expand;
pub mod output;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, Result};
pub use crate::dictionary::TermDictionary;
pub use crate::expand::{ExpansionRequest, ExpansionResult, QueryExpander};
