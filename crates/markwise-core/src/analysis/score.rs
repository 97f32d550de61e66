//! Composite quality score.
//!
//! Starts at 100 and subtracts penalties for excess adverbs and passive
//! constructions, the share of hard and very hard words, and each complex
//! sentence. Independent of the Flesch score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables;

use super::report::{Issue, IssueType};

/// Thresholds and weights for the quality score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyWeights {
    /// Adverbs allowed before penalties start.
    pub adverb_allowance: usize,
    /// Points per adverb beyond the allowance.
    pub adverb_weight: f64,
    /// Passive constructions allowed before penalties start.
    pub passive_allowance: usize,
    /// Points per passive construction beyond the allowance.
    pub passive_weight: f64,
    /// Multiplier on the fraction of words with 3+ syllables.
    pub hard_word_weight: f64,
    /// Multiplier on the fraction of words with 4+ syllables.
    pub very_hard_word_weight: f64,
    /// Points per complex sentence.
    pub complex_weight: f64,
}

/// The fixed weights used by [`quality_score`].
pub const PENALTY_WEIGHTS: PenaltyWeights = PenaltyWeights {
    adverb_allowance: 2,
    adverb_weight: 2.0,
    passive_allowance: 4,
    passive_weight: 2.0,
    hard_word_weight: 15.0,
    very_hard_word_weight: 25.0,
    complex_weight: 1.0,
};

/// Per-signal breakdown of the points subtracted from 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualityPenalties {
    /// Excess adverbs.
    pub adverbs: f64,
    /// Excess passive constructions.
    pub passive: f64,
    /// Share of hard words.
    pub hard_words: f64,
    /// Share of very hard words.
    pub very_hard_words: f64,
    /// Complex sentences.
    pub complex: f64,
}

impl QualityPenalties {
    /// Compute the breakdown for a document's issues and words.
    pub fn compute(issues: &[Issue], words: &[&str]) -> Self {
        let w = &PENALTY_WEIGHTS;
        let count = |t: IssueType| issues.iter().filter(|i| i.issue_type == t).count();

        let mut hard = 0usize;
        let mut very_hard = 0usize;
        for word in words {
            let n = syllables::estimate(word);
            if n >= 3 {
                hard += 1;
            }
            if n >= 4 {
                very_hard += 1;
            }
        }
        let denominator = words.len().max(1) as f64;

        Self {
            adverbs: count(IssueType::Adverb).saturating_sub(w.adverb_allowance) as f64
                * w.adverb_weight,
            passive: count(IssueType::Passive).saturating_sub(w.passive_allowance) as f64
                * w.passive_weight,
            hard_words: hard as f64 / denominator * w.hard_word_weight,
            very_hard_words: very_hard as f64 / denominator * w.very_hard_word_weight,
            complex: count(IssueType::Complex) as f64 * w.complex_weight,
        }
    }

    /// Sum of all penalties.
    pub fn total(&self) -> f64 {
        self.adverbs + self.passive + self.hard_words + self.very_hard_words + self.complex
    }

    /// `100 - total`, floored at 0.
    pub fn score(&self) -> f64 {
        (100.0 - self.total()).max(0.0)
    }
}

/// Overall quality score in `[0, 100]`.
pub fn quality_score(issues: &[Issue], words: &[&str]) -> f64 {
    QualityPenalties::compute(issues, words).score()
}
