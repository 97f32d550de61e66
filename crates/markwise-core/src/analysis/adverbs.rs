//! Adverb detection: any word ending in "-ly".
//!
//! Purely suffix-based, so "only", "family" and "reply" are flagged too.

use std::sync::LazyLock;

use regex::Regex;

use crate::text;

use super::report::{Issue, IssueType};

/// Regex for adverbs: words ending in -ly, case-insensitive.
static ADVERB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u:\b\w+ly\b)").expect("valid regex"));

/// Flag every word ending in "ly", in document order.
#[tracing::instrument(skip_all)]
pub fn find_adverbs(input: &str) -> Vec<Issue> {
    let mut cursor = text::CharCursor::new(input);
    ADVERB_RE
        .find_iter(input)
        .map(|m| {
            Issue::new(
                IssueType::Adverb,
                m.as_str(),
                cursor.char_offset(m.start()),
            )
        })
        .collect()
}
