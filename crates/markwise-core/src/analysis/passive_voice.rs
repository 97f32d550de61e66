//! Passive voice detection.
//!
//! A "to be" auxiliary followed by whitespace and a word ending in "-ed" or
//! "-en". The second word is not checked against a participle list, so
//! "is open" is missed and "was golden" is flagged.

use std::sync::LazyLock;

use regex::Regex;

use crate::text;
use crate::word_lists::{PARTICIPLE_ENDINGS, PASSIVE_AUXILIARIES};

use super::report::{Issue, IssueType};

static PASSIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let auxiliaries = PASSIVE_AUXILIARIES.join("|");
    let participles = PARTICIPLE_ENDINGS
        .iter()
        .map(|ending| format!(r"\w+{ending}"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?i-u:\b(?:{auxiliaries}))\s+(?i-u:(?:{participles})\b)"
    ))
    .expect("valid regex")
});

/// Flag every auxiliary + participle pair, in document order.
#[tracing::instrument(skip_all)]
pub fn find_passive_voice(input: &str) -> Vec<Issue> {
    let mut cursor = text::CharCursor::new(input);
    PASSIVE_RE
        .find_iter(input)
        .map(|m| {
            Issue::new(
                IssueType::Passive,
                m.as_str(),
                cursor.char_offset(m.start()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_simple_passive() {
        let issues = find_passive_voice("The report was written by the team.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "was written");
        assert_eq!(issues[0].position, 11);
    }

    #[test]
    fn detects_ed_participles() {
        let issues = find_passive_voice("The bug is fixed. The tests were updated.");
        let texts: Vec<_> = issues.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["is fixed", "were updated"]);
    }

    #[test]
    fn case_insensitive_and_multi_space() {
        let issues = find_passive_voice("It WAS   Finished.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "WAS   Finished");
    }

    #[test]
    fn requires_whole_auxiliary() {
        // "this" ends in "is" but is not an auxiliary
        assert!(find_passive_voice("this tested").is_empty());
    }

    #[test]
    fn active_voice_not_flagged() {
        assert!(find_passive_voice("The team wrote the report.").is_empty());
        assert!(find_passive_voice("She is happy.").is_empty());
    }

    #[test]
    fn heuristic_false_positive_kept() {
        assert_eq!(find_passive_voice("The ring was golden.").len(), 1);
    }

    #[test]
    fn empty_text_returns_empty() {
        assert!(find_passive_voice("").is_empty());
    }
}
