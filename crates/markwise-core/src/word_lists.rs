//! Fixed phrase tables used by the issue detectors.
//!
//! Kept in one place so the lists can be audited and tested independently
//! of the matching code.

/// Hedging and intensifying phrases flagged as qualifiers.
///
/// Order matters: the qualifier pass scans phrases in this order, so issues
/// are grouped by phrase rather than sorted by position. Multi-word phrases
/// match only with the single space written here.
pub const QUALIFIER_PHRASES: &[&str] = &[
    "I think",
    "we think",
    "I believe",
    "we believe",
    "maybe",
    "perhaps",
    "possibly",
    "probably",
    "I guess",
    "we guess",
    "kind of",
    "sort of",
    "a bit",
    "a little",
    "really",
    "extremely",
    "incredibly",
];

/// Forms of "to be" that introduce a passive construction.
pub const PASSIVE_AUXILIARIES: &[&str] = &["is", "are", "was", "were", "be", "been", "being"];

/// Participle endings accepted after a passive auxiliary.
pub const PARTICIPLE_ENDINGS: &[&str] = &["ed", "en"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifier_list_is_complete() {
        assert_eq!(QUALIFIER_PHRASES.len(), 17);
        assert_eq!(QUALIFIER_PHRASES.first(), Some(&"I think"));
        assert_eq!(QUALIFIER_PHRASES.last(), Some(&"incredibly"));
    }

    #[test]
    fn qualifier_phrases_use_single_spaces() {
        for phrase in QUALIFIER_PHRASES {
            assert!(!phrase.contains("  "), "double space in {phrase:?}");
            assert_eq!(phrase.trim(), *phrase);
        }
    }

    #[test]
    fn passive_auxiliaries_are_lowercase() {
        assert!(
            PASSIVE_AUXILIARIES
                .iter()
                .all(|w| w.chars().all(|c| c.is_ascii_lowercase()))
        );
    }
}
