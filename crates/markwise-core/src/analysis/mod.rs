//! Document analysis: metrics plus stylistic issues.
//!
//! [`analyze`] runs the whole pipeline:
//!
//! 1. Segment the text into words, sentences and paragraphs.
//! 2. Score readability (Flesch Reading Ease and grade level).
//! 3. Run the four issue passes and concatenate them in a fixed order:
//!    adverbs, passive voice, complex sentences, qualifiers.
//! 4. Compute the composite quality score from the issues and words.
//!
//! Every pass is a pure function in its own module and can be called on its
//! own. Nothing is cached between calls.

pub mod adverbs;
pub mod complex_sentences;
pub mod passive_voice;
pub mod qualifiers;
pub mod report;
pub mod score;

pub use report::{AnalysisResult, HighlightSpan, Issue, IssueType};
pub use score::{PENALTY_WEIGHTS, PenaltyWeights, QualityPenalties, quality_score};

use crate::readability;
use crate::text;

/// Reading speed used for the reading time estimate.
pub const WORDS_PER_MINUTE: f64 = 250.0;

/// Analyze `input` and return its metrics and issues.
///
/// Total over all strings: the empty string yields zero counts, a score of
/// 100 and no issues.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn analyze(input: &str) -> AnalysisResult {
    let segments = text::segment(input);
    let scores = readability::score(input, &segments.words, segments.sentence_count());

    let mut issues = adverbs::find_adverbs(input);
    issues.extend(passive_voice::find_passive_voice(input));
    issues.extend(complex_sentences::find_complex_sentences(
        input,
        &segments.sentences,
    ));
    issues.extend(qualifiers::find_qualifiers(input));

    let score = quality_score(&issues, &segments.words);

    tracing::debug!(issues = issues.len(), score, "analysis complete");

    AnalysisResult {
        char_count: segments.char_count,
        word_count: segments.word_count(),
        sentence_count: segments.sentence_count(),
        paragraph_count: segments.paragraph_count(),
        reading_time: segments.word_count() as f64 / WORDS_PER_MINUTE,
        flesch_score: scores.flesch_score,
        score,
        grade_level: scores.grade_level,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "I think the report was written quickly. \
        It is really quite good, and the results were presented clearly.\n\n\
        Maybe we should publish it.";

    #[test]
    fn empty_text_is_all_zero() {
        let result = analyze("");
        assert_eq!(result.char_count, 0);
        assert_eq!(result.word_count, 0);
        assert_eq!(result.sentence_count, 0);
        assert_eq!(result.paragraph_count, 0);
        assert_eq!(result.reading_time, 0.0);
        assert_eq!(result.flesch_score, 0.0);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.grade_level, 0);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn whitespace_only_has_no_content() {
        let result = analyze("   \n\n  \t");
        assert_eq!(result.char_count, 8);
        assert_eq!(result.word_count, 0);
        assert_eq!(result.sentence_count, 0);
        assert_eq!(result.paragraph_count, 0);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn analysis_is_idempotent() {
        assert_eq!(analyze(SAMPLE), analyze(SAMPLE));
    }

    #[test]
    fn positions_lie_within_text() {
        let result = analyze(SAMPLE);
        assert!(!result.issues.is_empty());
        for issue in &result.issues {
            assert!(issue.position < result.char_count, "{issue:?}");
        }
    }

    #[test]
    fn issues_follow_pass_order() {
        let result = analyze(SAMPLE);
        let types: Vec<_> = result.issues.iter().map(|i| i.issue_type).collect();
        let mut sorted = types.clone();
        sorted.sort_by_key(|t| IssueType::ALL.iter().position(|a| a == t));
        assert_eq!(types, sorted);
    }

    #[test]
    fn sample_issues() {
        let result = analyze(SAMPLE);
        let adverbs: Vec<_> = result
            .issues_of(IssueType::Adverb)
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(adverbs, vec!["quickly", "really", "clearly"]);
        let passive: Vec<_> = result
            .issues_of(IssueType::Passive)
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(passive, vec!["was written", "were presented"]);
        let qualifiers: Vec<_> = result
            .issues_of(IssueType::Qualifier)
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(qualifiers, vec!["I think", "Maybe", "really"]);
        assert_eq!(result.count_of(IssueType::Complex), 0);
    }

    #[test]
    fn two_adverbs() {
        let result = analyze("He ran quickly and carefully.");
        assert_eq!(result.count_of(IssueType::Adverb), 2);
        assert_eq!(result.word_count, 5);
        assert_eq!(result.sentence_count, 1);
    }

    #[test]
    fn qualifier_order() {
        let result = analyze("I think this is kind of good.");
        let texts: Vec<_> = result
            .issues_of(IssueType::Qualifier)
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(texts, vec!["I think", "kind of"]);
    }

    #[test]
    fn long_sentence_is_complex() {
        let sentence = (0..26).map(|_| "word").collect::<Vec<_>>().join(" ");
        let result = analyze(&format!("{sentence}."));
        assert_eq!(result.count_of(IssueType::Complex), 1);
        assert_eq!(result.score, 99.0);
    }

    #[test]
    fn flesch_never_negative() {
        let result = analyze("Incomprehensibility institutionalization internationalization.");
        assert_eq!(result.flesch_score, 0.0);
        assert!(result.score >= 0.0 && result.score <= 100.0);
    }

    #[test]
    fn reading_time_uses_250_wpm() {
        let text = vec!["word"; 500].join(" ");
        assert!((analyze(&text).reading_time - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn positions_count_characters() {
        let result = analyze("Ça va? He spoke softly.");
        let adverb = result.issues_of(IssueType::Adverb).next().unwrap();
        assert_eq!(adverb.position, 16);
        assert_eq!(adverb.text, "softly");
    }

    #[test]
    fn large_adverb_dense_document() {
        let repeats = 200_000;
        let input = "é fully ".repeat(repeats);
        let result = analyze(&input);
        assert_eq!(result.char_count, repeats * 8);
        assert_eq!(result.count_of(IssueType::Adverb), repeats);
        let last = result.issues_of(IssueType::Adverb).last().unwrap();
        assert_eq!(last.position, (repeats - 1) * 8 + 2);
        assert_eq!(result.count_of(IssueType::Complex), 1);
    }
}
