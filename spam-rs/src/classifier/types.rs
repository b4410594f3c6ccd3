//! Classifier result types

use serde::{Deserialize, Serialize};

/// Detailed scoring result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Combined spam probability of the scored tokens
    pub combined: f64,
    /// Is this message spam (combined >= probability threshold)
    pub is_spam: bool,
    /// Tokens that participated in the combination, most informative first
    pub tokens: Vec<TokenScore>,
}

/// A token that participated in scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenScore {
    /// Normalized token
    pub token: String,
    /// Spam probability looked up for the token
    pub probability: f64,
}

/// Classifier statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct ClassifierStats {
    /// Messages in the non-spam corpus
    pub nonspam_messages: usize,
    /// Messages in the spam corpus
    pub spam_messages: usize,
    /// Tokens holding a derived probability in the current table
    pub scored_tokens: usize,
}
