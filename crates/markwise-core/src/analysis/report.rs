//! Result types produced by [`super::analyze`].
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use in
//! CLI JSON output and MCP tool responses. Field names serialize in
//! camelCase to match what editor front-ends consume.

use std::ops::Range;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::{self, Difficulty};

/// Category of a detected stylistic issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum IssueType {
    /// A word ending in "-ly".
    Adverb,
    /// A "to be" auxiliary followed by an "-ed"/"-en" word.
    Passive,
    /// A sentence with more than 25 whitespace-separated tokens.
    Complex,
    /// A hedging or intensifying phrase.
    Qualifier,
}

impl IssueType {
    /// Every issue type, in detection pass order.
    pub const ALL: [Self; 4] = [Self::Adverb, Self::Passive, Self::Complex, Self::Qualifier];

    /// Returns the type as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adverb => "adverb",
            Self::Passive => "passive",
            Self::Complex => "complex",
            Self::Qualifier => "qualifier",
        }
    }

    /// Fixed advice attached to every issue of this type.
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::Adverb => "Consider if this adverb is necessary",
            Self::Passive => "Consider active voice",
            Self::Complex => "Break into shorter sentences",
            Self::Qualifier => "Use stronger language",
        }
    }

    /// Overlay colour used when highlighting issues of this type.
    pub const fn highlight_color(&self) -> &'static str {
        match self {
            Self::Adverb => "#DC2626",
            Self::Passive => "#EA580C",
            Self::Complex => "#9333EA",
            Self::Qualifier => "#16A34A",
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected stylistic occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    /// Issue category.
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    /// The matched text. For complex sentences, the trimmed sentence.
    pub text: String,
    /// Zero-based character offset where the match starts.
    ///
    /// Counts Unicode scalar values. JavaScript strings index UTF-16 code
    /// units, so overlays must convert when the text holds characters outside
    /// the Basic Multilingual Plane (most emoji).
    pub position: usize,
    /// Advisory text for the writer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    /// Build an issue carrying its type's standard suggestion.
    pub fn new(issue_type: IssueType, text: impl Into<String>, position: usize) -> Self {
        Self {
            issue_type,
            text: text.into(),
            position,
            suggestion: Some(issue_type.suggestion().to_string()),
        }
    }

    /// Half-open character range covered by this issue.
    pub fn span(&self) -> Range<usize> {
        self.position..self.position + self.text.chars().count()
    }
}

/// A character range to highlight in the editor overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HighlightSpan {
    /// First character of the span.
    pub start: usize,
    /// One past the last character of the span.
    pub end: usize,
    /// Overlay colour for the issue type.
    pub color: String,
    /// The highlighted text.
    pub text: String,
}

/// Readability metrics and issues for one document.
///
/// Recomputed from scratch on every call to [`super::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Raw length of the text in characters.
    pub char_count: usize,
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of paragraphs.
    pub paragraph_count: usize,
    /// Estimated reading time in minutes.
    pub reading_time: f64,
    /// Flesch Reading Ease (0 and up).
    pub flesch_score: f64,
    /// Overall quality score (0 to 100).
    pub score: f64,
    /// Rounded grade level estimate (may be negative).
    pub grade_level: i64,
    /// Issues in detection pass order.
    pub issues: Vec<Issue>,
}

impl AnalysisResult {
    /// Number of issues of the given type.
    pub fn count_of(&self, issue_type: IssueType) -> usize {
        self.issues
            .iter()
            .filter(|i| i.issue_type == issue_type)
            .count()
    }

    /// Issues of the given type, in detection order.
    pub fn issues_of(&self, issue_type: IssueType) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.issue_type == issue_type)
    }

    /// The first `limit` issues plus how many were left out.
    pub fn summary_issues(&self, limit: usize) -> (&[Issue], usize) {
        let shown = self.issues.len().min(limit);
        (&self.issues[..shown], self.issues.len() - shown)
    }

    /// Difficulty band for this document's Flesch score.
    pub fn difficulty(&self) -> Difficulty {
        readability::difficulty(self.flesch_score)
    }

    /// Highlight spans for every issue of the given type.
    pub fn highlight_spans(&self, issue_type: IssueType) -> Vec<HighlightSpan> {
        self.issues_of(issue_type)
            .map(|issue| {
                let span = issue.span();
                HighlightSpan {
                    start: span.start,
                    end: span.end,
                    color: issue_type.highlight_color().to_string(),
                    text: issue.text.clone(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            char_count: 40,
            word_count: 8,
            sentence_count: 1,
            paragraph_count: 1,
            reading_time: 8.0 / 250.0,
            flesch_score: 72.0,
            score: 100.0,
            grade_level: 3,
            issues: vec![
                Issue::new(IssueType::Adverb, "quickly", 7),
                Issue::new(IssueType::Qualifier, "maybe", 20),
                Issue::new(IssueType::Adverb, "slowly", 30),
            ],
        }
    }

    #[test]
    fn issue_carries_standard_suggestion() {
        let issue = Issue::new(IssueType::Passive, "was made", 0);
        assert_eq!(issue.suggestion.as_deref(), Some("Consider active voice"));
    }

    #[test]
    fn span_uses_character_length() {
        let issue = Issue::new(IssueType::Adverb, "naïvely", 4);
        assert_eq!(issue.span(), 4..11);
    }

    #[test]
    fn counts_and_filters_by_type() {
        let result = sample();
        assert_eq!(result.count_of(IssueType::Adverb), 2);
        assert_eq!(result.count_of(IssueType::Complex), 0);
        let texts: Vec<_> = result
            .issues_of(IssueType::Adverb)
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(texts, vec!["quickly", "slowly"]);
    }

    #[test]
    fn summary_truncates() {
        let result = sample();
        let (shown, hidden) = result.summary_issues(2);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 1);
        let (shown, hidden) = result.summary_issues(10);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn highlight_spans_for_type() {
        let spans = sample().highlight_spans(IssueType::Adverb);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start, 7);
        assert_eq!(spans[0].end, 14);
        assert_eq!(spans[0].color, "#DC2626");
        assert_eq!(spans[1].text, "slowly");
    }

    #[test]
    fn difficulty_follows_flesch() {
        assert_eq!(sample().difficulty(), Difficulty::FairlyEasy);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["charCount"], 40);
        assert_eq!(json["gradeLevel"], 3);
        assert_eq!(json["issues"][0]["type"], "adverb");
        assert_eq!(json["issues"][0]["position"], 7);
    }

    #[test]
    fn issue_type_strings() {
        let names: Vec<_> = IssueType::ALL.iter().map(IssueType::as_str).collect();
        assert_eq!(names, vec!["adverb", "passive", "complex", "qualifier"]);
        assert_eq!(IssueType::Complex.to_string(), "complex");
    }
}
