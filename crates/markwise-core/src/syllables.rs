//! Heuristic syllable estimation.
//!
//! A vowel-group counter with a few suffix and prefix adjustments. It is not
//! linguistic syllabification, but readability and hard-word scores are
//! calibrated against exactly this heuristic, so the steps must not drift:
//!
//! 1. Lower-case and keep only `a-z`.
//! 2. Words of three letters or fewer count as one syllable.
//! 3. Drop one silent ending: consonant + "es", "ed", or consonant + "e"
//!    (where "l" does not count as a consonant, so "-le" survives).
//! 4. Drop one leading "y".
//! 5. Count vowel groups of one or two letters from `aeiouy`.

use std::sync::LazyLock;

use regex::Regex;

static SILENT_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid regex"));

static LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").expect("valid regex"));

static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Estimate the number of syllables in `word`. Always at least 1.
pub fn estimate(word: &str) -> usize {
    let cleaned: String = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect();

    if cleaned.len() <= 3 {
        return 1;
    }

    let trimmed = SILENT_ENDING.replace(&cleaned, "");
    let trimmed = LEADING_Y.replace(&trimmed, "");

    match VOWEL_GROUP.find_iter(&trimmed).count() {
        0 => 1,
        n => n,
    }
}

/// Whether `word` counts as hard (three or more syllables).
pub fn is_hard(word: &str) -> bool {
    estimate(word) >= 3
}

/// Whether `word` counts as very hard (four or more syllables).
pub fn is_very_hard(word: &str) -> bool {
    estimate(word) >= 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_floor_to_one() {
        assert_eq!(estimate("cat"), 1);
        assert_eq!(estimate("a"), 1);
        assert_eq!(estimate("the"), 1);
        assert_eq!(estimate(""), 1);
    }

    #[test]
    fn long_words_count_vowel_groups() {
        assert_eq!(estimate("readability"), 5);
        assert_eq!(estimate("running"), 2);
        assert_eq!(estimate("carefully"), 4);
    }

    #[test]
    fn silent_endings_are_dropped() {
        // "makes" -> "ma"
        assert_eq!(estimate("makes"), 1);
        // "created" -> "creat"
        assert_eq!(estimate("created"), 1);
    }

    #[test]
    fn le_ending_is_kept() {
        assert_eq!(estimate("table"), 2);
    }

    #[test]
    fn leading_y_is_dropped() {
        assert_eq!(estimate("yellow"), 2);
    }

    #[test]
    fn y_alone_is_a_vowel() {
        assert_eq!(estimate("rhythm"), 1);
    }

    #[test]
    fn non_letters_are_stripped() {
        assert_eq!(estimate("Hello!!"), 2);
        // "abc" after cleaning, so the floor rule applies
        assert_eq!(estimate("ABC123"), 1);
    }

    #[test]
    fn hard_word_thresholds() {
        assert!(is_hard("readability"));
        assert!(is_very_hard("readability"));
        assert!(!is_hard("cat"));
        assert!(is_very_hard("carefully"));
    }
}
