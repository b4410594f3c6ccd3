//! Spam scoring engine
//!
//! Combines per-token spam probabilities from the probability table into a
//! single verdict, retraining from the corpora before every scoring call.

use std::collections::HashSet;

use tracing::debug;

use super::table::ProbabilityTable;
use super::tokenizer::Tokenizer;
use super::types::{ClassifierStats, ScoreResult, TokenScore};
use crate::config::ClassifierConfig;
use crate::corpus::Corpus;

/// At most this many tokens participate in the odds combination.
const MAX_SCORED_TOKENS: usize = 15;

/// Naive-Bayes-style spam classifier
///
/// Holds shared handles to the two caller-owned corpora and a probability
/// table derived from them. The table is rebuilt from the corpora before
/// every scoring call, so corpus growth (the caller's or the classifier's
/// own learning appends) is always reflected; there is no caching across
/// calls. All scoring and learning operations take `&mut self`, which keeps
/// one instance's corpora and table a single unit of mutual exclusion.
pub struct SpamClassifier {
    nonspam_corpus: Corpus,
    spam_corpus: Corpus,
    config: ClassifierConfig,
    tokenizer: Tokenizer,
    probabilities: ProbabilityTable,
}

impl SpamClassifier {
    /// Create a classifier over the two corpora.
    ///
    /// The probability table is built immediately, so a fresh instance is
    /// ready to score.
    pub fn new(nonspam_corpus: Corpus, spam_corpus: Corpus, config: ClassifierConfig) -> Self {
        let tokenizer = Tokenizer::new();
        let probabilities =
            ProbabilityTable::build(&tokenizer, &nonspam_corpus, &spam_corpus, &config);

        Self {
            nonspam_corpus,
            spam_corpus,
            config,
            tokenizer,
            probabilities,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Current probability table.
    pub fn probabilities(&self) -> &ProbabilityTable {
        &self.probabilities
    }

    /// Rebuild the probability table from the current corpora.
    ///
    /// Idempotent: with no corpus mutation in between, repeated calls
    /// derive an identical table.
    pub fn update(&mut self) {
        self.probabilities = ProbabilityTable::build(
            &self.tokenizer,
            &self.nonspam_corpus,
            &self.spam_corpus,
            &self.config,
        );
    }

    /// Classify a message as spam or non-spam.
    ///
    /// Rebuilds the probability table first. With learning enabled, the
    /// message is appended to the corpus matching the verdict and the
    /// table is rebuilt again; see [`Corpus::push`].
    pub fn is_spam(&mut self, message: &str) -> bool {
        self.score(message).is_spam
    }

    /// Score a message, returning the verdict together with the combined
    /// probability and the tokens that produced it.
    ///
    /// Same contract and side effects as [`is_spam`](Self::is_spam).
    pub fn score(&mut self, message: &str) -> ScoreResult {
        self.update();

        let mut tokens = self.tokenizer.tokenize(message);
        if self.config.unique_tokens {
            tokens = dedup_preserving_order(tokens);
        }

        // Most interesting first: distance of the token's probability from
        // the neutral 0.5. The sort is stable, so equal scores keep the
        // message's token order.
        tokens.sort_by(|a, b| {
            self.interestingness(b)
                .total_cmp(&self.interestingness(a))
        });
        tokens.truncate(MAX_SCORED_TOKENS);

        let scored: Vec<TokenScore> = tokens
            .into_iter()
            .map(|token| {
                let probability = self.probabilities.lookup(&token);
                TokenScore { token, probability }
            })
            .collect();

        // Naive-Bayes odds combination. Both products are 1.0 over an
        // empty token set, yielding a neutral 0.5.
        let spam_product: f64 = scored.iter().map(|t| t.probability).product();
        let nonspam_product: f64 = scored.iter().map(|t| 1.0 - t.probability).product();
        let combined = spam_product / (spam_product + nonspam_product);

        let is_spam = combined >= self.config.probability_threshold;

        debug!(
            combined,
            is_spam,
            scored_tokens = scored.len(),
            "Message scored"
        );

        if self.config.learning {
            let corpus = if is_spam {
                &self.spam_corpus
            } else {
                &self.nonspam_corpus
            };
            corpus.push(message);
            self.update();
        }

        ScoreResult {
            combined,
            is_spam,
            tokens: scored,
        }
    }

    /// Add a message to the spam corpus and retrain.
    pub fn learn_spam(&mut self, message: &str) {
        self.spam_corpus.push(message);
        self.update();
    }

    /// Add a message to the non-spam corpus and retrain.
    pub fn learn_nonspam(&mut self, message: &str) {
        self.nonspam_corpus.push(message);
        self.update();
    }

    /// Corpus sizes and probability-table size.
    pub fn stats(&self) -> ClassifierStats {
        ClassifierStats {
            nonspam_messages: self.nonspam_corpus.len(),
            spam_messages: self.spam_corpus.len(),
            scored_tokens: self.probabilities.len(),
        }
    }

    fn interestingness(&self, token: &str) -> f64 {
        (self.probabilities.lookup(token) - 0.5).abs()
    }
}

fn dedup_preserving_order(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
