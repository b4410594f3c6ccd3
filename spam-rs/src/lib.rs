//! spam-rs: Naive-Bayes spam classifier
//!
//! Classifies text messages as spam or non-spam using a token scoring
//! model trained from two example corpora.
//!
//! # How it works
//!
//! - **Tokenizer**: splits raw text into normalized word tokens
//! - **Probability table**: maps each token seen in the corpora to a spam
//!   probability, with a configurable default for unknown tokens
//! - **Scorer**: ranks a message's tokens by how far their probability
//!   sits from neutral, keeps the most informative ones, and combines them
//!   into a single verdict via the naive-Bayes odds formula
//!
//! The model is recomputed from the current corpora before every scoring
//! call, so corpus growth is always reflected and no trained state ever
//! goes stale. With learning enabled, scored messages are appended back
//! into the corpus matching their verdict.
//!
//! # Example
//!
//! ```rust
//! use spam_rs::{ClassifierConfig, Corpus, SpamClassifier};
//!
//! let nonspam = Corpus::from_messages(["Do I like green eggs and ham?", "I do."]);
//! let spam = Corpus::from_messages(["I am spam, spam I am.", "I do not like that Spamiam."]);
//!
//! let config = ClassifierConfig {
//!     word_occurance_threshold: 1.0,
//!     ..ClassifierConfig::default()
//! };
//!
//! let mut classifier = SpamClassifier::new(nonspam, spam, config);
//! assert!(classifier.is_spam("do ham like spam do spam"));
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: tokenizer, probability table and scorer
//! - [`config`]: configuration management
//! - [`corpus`]: caller-owned training corpora
//! - [`error`]: error types and handling

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;

// Re-export commonly used types
pub use classifier::{ClassifierStats, ScoreResult, SpamClassifier, TokenScore};
pub use config::ClassifierConfig;
pub use corpus::Corpus;
pub use error::{Result, SpamError};
