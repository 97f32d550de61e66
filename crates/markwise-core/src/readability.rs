//! Readability scoring: Flesch Reading Ease and a grade-level estimate.
//!
//! Flesch Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`,
//! floored at 0. Higher = easier.
//!
//! Grade level: `4.71 * (letters/words) + 0.5 * (words/sentences) - 21.43`,
//! rounded to the nearest integer. Very short, simple text can go negative.
//!
//! Syllables come from the [`syllables`] heuristic.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables;

/// Readability figures for a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityScores {
    /// Flesch Reading Ease, never below 0.
    pub flesch_score: f64,
    /// Rounded U.S. grade level estimate.
    pub grade_level: i64,
    /// Mean words per sentence (0 without sentences).
    pub avg_words_per_sentence: f64,
    /// Mean estimated syllables per word (0 without words).
    pub avg_syllables_per_word: f64,
}

/// Score the readability of `text` given its word and sentence segmentation.
#[tracing::instrument(skip_all, fields(words = words.len(), sentences = sentence_count))]
pub fn score(text: &str, words: &[&str], sentence_count: usize) -> ReadabilityScores {
    let word_count = words.len();
    let total_syllables: usize = words.iter().map(|w| syllables::estimate(w)).sum();
    let letters = count_letters(text);

    let scores = ReadabilityScores {
        flesch_score: flesch_reading_ease(word_count, sentence_count, total_syllables),
        grade_level: grade_level(letters, word_count, sentence_count),
        avg_words_per_sentence: ratio(word_count, sentence_count),
        avg_syllables_per_word: ratio(total_syllables, word_count),
    };
    tracing::debug!(
        flesch = scores.flesch_score,
        grade = scores.grade_level,
        "readability scored"
    );
    scores
}

/// Flesch Reading Ease, floored at 0. Returns 0 when either count is zero.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let words_per_sentence = ratio(words, sentences);
    let syllables_per_word = ratio(syllables, words);
    (206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word).max(0.0)
}

/// Grade level estimate from letter, word and sentence counts.
///
/// Returns 0 when either words or sentences is zero. Halves round up
/// (toward positive infinity), so -2.5 becomes -2.
pub fn grade_level(letters: usize, words: usize, sentences: usize) -> i64 {
    if words == 0 || sentences == 0 {
        return 0;
    }
    let raw = 4.71 * ratio(letters, words) + 0.5 * ratio(words, sentences) - 21.43;
    round_half_up(raw) as i64
}

/// Count ASCII letters in the whole text.
pub fn count_letters(text: &str) -> usize {
    text.bytes().filter(u8::is_ascii_alphabetic).count()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Reading difficulty band derived from the Flesch score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// 90 and above.
    VeryEasy,
    /// 80 to 90.
    Easy,
    /// 70 to 80.
    FairlyEasy,
    /// 60 to 70.
    Standard,
    /// 50 to 60.
    FairlyDifficult,
    /// 30 to 50.
    Difficult,
    /// 10 to 30.
    VeryDifficult,
    /// Below 10.
    ExtremelyDifficult,
}

impl Difficulty {
    /// Human-readable note for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very difficult",
            Self::ExtremelyDifficult => "Extremely difficult",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds for each band, checked top to bottom.
pub const DIFFICULTY_BANDS: &[(f64, Difficulty)] = &[
    (90.0, Difficulty::VeryEasy),
    (80.0, Difficulty::Easy),
    (70.0, Difficulty::FairlyEasy),
    (60.0, Difficulty::Standard),
    (50.0, Difficulty::FairlyDifficult),
    (30.0, Difficulty::Difficult),
    (10.0, Difficulty::VeryDifficult),
];

/// Map a Flesch score to its difficulty band.
pub fn difficulty(flesch_score: f64) -> Difficulty {
    DIFFICULTY_BANDS
        .iter()
        .find(|(floor, _)| flesch_score >= *floor)
        .map_or(Difficulty::ExtremelyDifficult, |(_, band)| *band)
}
