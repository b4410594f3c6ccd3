use std::collections::HashMap;

use tracing::debug;

use super::tokenizer::Tokenizer;
use crate::config::ClassifierConfig;
use crate::corpus::Corpus;

// Tokens seen in only one corpus get a hard confident prior instead of the
// frequency-ratio estimate.
const ONLY_NONSPAM_PROBABILITY: f64 = 0.01;
const ONLY_SPAM_PROBABILITY: f64 = 0.99;

/// Token to spam-probability mapping with a default fallback.
///
/// Lookup never fails: tokens absent from the mapping resolve to the
/// configured default probability. The table is rebuilt in full from the
/// corpora on every build, never patched incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    probabilities: HashMap<String, f64>,
    default_probability: f64,
}

impl ProbabilityTable {
    fn new(default_probability: f64) -> Self {
        Self {
            probabilities: HashMap::new(),
            default_probability,
        }
    }

    /// Spam probability for a token, falling back to the default for
    /// tokens not present in the mapping.
    pub fn lookup(&self, token: &str) -> f64 {
        self.probabilities
            .get(token)
            .copied()
            .unwrap_or(self.default_probability)
    }

    /// Number of tokens with a derived (non-default) probability.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Derive a fresh table from the two corpora.
    ///
    /// Counts token occurrences over each corpus independently, then for
    /// every token seen in either corpus:
    ///
    /// - weighted counts below `word_occurance_threshold` leave the token
    ///   at the default probability;
    /// - tokens in both corpora get the frequency-ratio estimate
    ///   `p / (p + n)` with per-corpus rates capped at 1.0;
    /// - tokens in exactly one corpus get a hard prior (0.01 non-spam,
    ///   0.99 spam).
    pub(crate) fn build(
        tokenizer: &Tokenizer,
        nonspam_corpus: &Corpus,
        spam_corpus: &Corpus,
        config: &ClassifierConfig,
    ) -> Self {
        let good = count_occurrences(tokenizer.tokenize(&nonspam_corpus.joined()));
        let bad = count_occurrences(tokenizer.tokenize(&spam_corpus.joined()));

        // Corpus sizes are message counts, not token counts.
        let nonspam_messages = nonspam_corpus.len() as f64;
        let spam_messages = spam_corpus.len() as f64;

        let mut table = Self::new(config.default_probability);

        let tokens = good
            .keys()
            .chain(bad.keys().filter(|token| !good.contains_key(*token)));

        for token in tokens {
            let g = good.get(token).copied().unwrap_or(0) as f64
                * config.nonspam_importance_ratio;
            let b = bad.get(token).copied().unwrap_or(0) as f64;

            if g + b < config.word_occurance_threshold {
                continue;
            }

            let probability = if good.contains_key(token) && bad.contains_key(token) {
                let p = (b / spam_messages).min(1.0);
                let n = (g / nonspam_messages).min(1.0);
                // The threshold guard keeps both counts above zero, but p
                // and n can individually round to zero for small corpora.
                if p + n == 0.0 {
                    0.5
                } else {
                    p / (p + n)
                }
            } else if good.contains_key(token) {
                ONLY_NONSPAM_PROBABILITY
            } else {
                ONLY_SPAM_PROBABILITY
            };

            table.probabilities.insert(token.clone(), probability);
        }

        debug!(
            derived_tokens = table.len(),
            nonspam_messages = nonspam_corpus.len(),
            spam_messages = spam_corpus.len(),
            "Probability table rebuilt"
        );

        table
    }
}

fn count_occurrences(tokens: Vec<String>) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
