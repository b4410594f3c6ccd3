use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Classifier configuration
///
/// Fixed per classifier instance: merge any overrides before construction,
/// the classifier never mutates it. Numeric options other than
/// `default_probability` must be strictly positive and
/// `default_probability` must lie in [0, 1]; the classifier does not
/// validate these, the arithmetic simply follows whatever it is given.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum weighted occurrence count for a token to get a derived
    /// (non-default) probability
    pub word_occurance_threshold: f64,
    /// Probability assigned to tokens never meeting the threshold
    pub default_probability: f64,
    /// Combined-score cutoff for a spam verdict
    pub probability_threshold: f64,
    /// Multiplier applied to non-spam occurrence counts before
    /// threshold/derivation
    pub nonspam_importance_ratio: f64,
    /// Deduplicate message tokens before ranking
    pub unique_tokens: bool,
    /// Append scored messages back into the relevant corpus and retrain
    pub learning: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            word_occurance_threshold: 5.0,
            default_probability: 0.4,
            probability_threshold: 0.9,
            nonspam_importance_ratio: 2.0,
            unique_tokens: false,
            learning: false,
        }
    }
}

impl ClassifierConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        toml::from_str(&content).map_err(|e| crate::error::SpamError::Config(e.to_string()))
    }
}
