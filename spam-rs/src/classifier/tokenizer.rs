use regex::Regex;

/// Message tokenizer
///
/// Splits raw text into normalized word tokens: lower-cased, separated on
/// any run of characters outside `[a-z0-9-'$]`, with empty fragments and
/// purely numeric tokens discarded. No stemming, no stop-word removal.
pub struct Tokenizer {
    separator: Regex,
}

impl Tokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        Self {
            // Token characters are lowercase letters, digits, hyphen,
            // apostrophe and dollar sign; everything else separates.
            separator: Regex::new(r"[^a-z0-9'$-]+").expect("separator pattern is valid"),
        }
    }

    /// Tokenize a message into normalized tokens, in message order.
    ///
    /// The result is fresh on every call; repeated tokens appear once per
    /// occurrence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.separator
            .split(&lowered)
            .filter(|token| !token.is_empty() && !token.chars().all(char::is_numeric))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
