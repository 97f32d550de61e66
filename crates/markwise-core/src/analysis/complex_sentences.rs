//! Complex sentence detection: sentences with too many tokens.

use std::collections::{HashMap, HashSet};

use aho_corasick::AhoCorasick;

use crate::text;

use super::report::{Issue, IssueType};

/// Sentences with more whitespace-separated tokens than this are complex.
pub const MAX_SENTENCE_TOKENS: usize = 25;

/// Flag sentences longer than [`MAX_SENTENCE_TOKENS`].
///
/// The token count splits the raw fragment on whitespace runs, so the
/// leading space left after a sentence terminator counts as one token.
///
/// The reported position is the first occurrence of the fragment in `input`.
/// When the same sentence appears verbatim more than once, every copy points
/// at the first one.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn find_complex_sentences(input: &str, sentences: &[&str]) -> Vec<Issue> {
    let long: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|s| text::whitespace_token_count(s) > MAX_SENTENCE_TOKENS)
        .collect();
    if long.is_empty() {
        return Vec::new();
    }

    let first = first_occurrences(input, &long);
    let mut cursor = text::CharCursor::new(input);
    long.iter()
        .filter_map(|sentence| {
            let byte = *first.get(sentence)?;
            Some(Issue::new(
                IssueType::Complex,
                sentence.trim(),
                cursor.char_offset(byte),
            ))
        })
        .collect()
}

/// Byte offset of the first occurrence of each distinct fragment.
///
/// All fragments are located in one pass over `input`. Fragments that do
/// not occur are left out.
fn first_occurrences<'a>(input: &str, fragments: &[&'a str]) -> HashMap<&'a str, usize> {
    let mut seen = HashSet::with_capacity(fragments.len());
    let distinct: Vec<&'a str> = fragments
        .iter()
        .copied()
        .filter(|fragment| seen.insert(*fragment))
        .collect();

    let mut first = HashMap::with_capacity(distinct.len());
    match AhoCorasick::new(distinct.iter()) {
        Ok(automaton) => {
            for m in automaton.find_overlapping_iter(input) {
                let start = first
                    .entry(distinct[m.pattern().as_usize()])
                    .or_insert(m.start());
                *start = (*start).min(m.start());
            }
        }
        Err(err) => {
            tracing::debug!(error = %err, "falling back to per-fragment search");
            for fragment in distinct {
                if let Some(byte) = input.find(fragment) {
                    first.insert(fragment, byte);
                }
            }
        }
    }
    first
}
