//! Qualifier detection: hedging and intensifying phrases.

use std::sync::LazyLock;

use regex::Regex;

use crate::text;
use crate::word_lists::QUALIFIER_PHRASES;

use super::report::{Issue, IssueType};

/// One whole-phrase, case-insensitive pattern per qualifier phrase.
static QUALIFIER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    QUALIFIER_PHRASES
        .iter()
        .map(|phrase| {
            Regex::new(&format!(r"(?i-u:\b{}\b)", regex::escape(phrase))).expect("valid regex")
        })
        .collect()
});

/// Flag qualifier phrases.
///
/// Phrases are scanned one at a time in [`QUALIFIER_PHRASES`] order, so the
/// result is grouped by phrase, not sorted by position.
#[tracing::instrument(skip_all)]
pub fn find_qualifiers(input: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    for re in QUALIFIER_PATTERNS.iter() {
        // each phrase restarts at the top of the document
        let mut cursor = text::CharCursor::new(input);
        issues.extend(re.find_iter(input).map(|m| {
            Issue::new(
                IssueType::Qualifier,
                m.as_str(),
                cursor.char_offset(m.start()),
            )
        }));
    }
    issues
}
