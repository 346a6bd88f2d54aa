//! Legal term dictionary
//!
//! Terms are extracted offline from customs-law article titles and stored as a
//! JSON array. The dictionary is loaded once and passed by reference into each
//! expansion; it is never mutated afterwards.

mod loader;

pub use loader::{load, load_metadata, load_with_key, try_load, DictionaryMetadata};

use serde::Serialize;

/// Ordered, read-only list of legal terms
///
/// Uniqueness is not checked; the extraction step already deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermDictionary {
    terms: Vec<String>,
}

impl TermDictionary {
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }
}

impl From<Vec<String>> for TermDictionary {
    fn from(terms: Vec<String>) -> Self {
        Self::new(terms)
    }
}

impl FromIterator<String> for TermDictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TermDictionary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
