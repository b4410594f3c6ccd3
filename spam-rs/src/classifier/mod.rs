//! Naive-Bayes spam classification
//!
//! Tokenization, probability-table derivation from the two training
//! corpora, and odds-combination scoring.

pub mod scorer;
pub mod table;
pub mod tokenizer;
pub mod types;

pub use scorer::SpamClassifier;
pub use table::ProbabilityTable;
pub use tokenizer::Tokenizer;
pub use types::*;
