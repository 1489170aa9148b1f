use once_cell::sync::Lazy;
use regex::Regex;

use crate::stop_words::is_stop_word;

// Runs of two or more word characters
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Word-level tokenizer shared by fit and transform
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercase `text`, split it into terms and drop English stop words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|term| !is_stop_word(term))
            .map(str::to_string)
            .collect()
    }
}
