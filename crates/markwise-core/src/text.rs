//! Text segmentation utilities.
//!
//! Splits a document into words, sentences, and paragraphs for the counting
//! and per-sentence checks in [`crate::analysis`].
//!
//! The rules are deliberately simple pattern splits:
//!
//! - Words are maximal runs of ASCII word characters (`[A-Za-z0-9_]`), so
//!   "don't" counts as two words and "well-known" as two.
//! - Sentences end at any run of `.`, `!` or `?`. "Mr. Smith" is two sentences.
//! - Paragraphs are separated by a line break, optional whitespace, and
//!   another line break.

use std::sync::LazyLock;

use regex::Regex;

/// ASCII word runs.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b\w+\b)").expect("valid regex"));

/// Sentence terminator runs.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Blank-line paragraph separators.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A document broken into its countable parts.
///
/// All slices borrow from the analyzed text. Sentence and paragraph
/// fragments are kept exactly as split (untrimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Word tokens in document order.
    pub words: Vec<&'a str>,
    /// Sentence fragments in document order.
    pub sentences: Vec<&'a str>,
    /// Paragraph fragments in document order.
    pub paragraphs: Vec<&'a str>,
    /// Raw length of the text in characters, whitespace included.
    pub char_count: usize,
}

impl Segments<'_> {
    /// Number of words.
    pub const fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of sentences.
    pub const fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of paragraphs.
    pub const fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }
}

/// Segment `text` into words, sentences, and paragraphs.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment(text: &str) -> Segments<'_> {
    let segments = Segments {
        words: extract_words(text),
        sentences: split_sentences(text),
        paragraphs: split_paragraphs(text),
        char_count: char_count(text),
    };
    tracing::debug!(
        words = segments.word_count(),
        sentences = segments.sentence_count(),
        paragraphs = segments.paragraph_count(),
        "segmented text"
    );
    segments
}

/// Extract word tokens: maximal runs of `[A-Za-z0-9_]`.
pub fn extract_words(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split text on runs of `.`, `!`, `?`, dropping whitespace-only fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Split text on blank lines, dropping whitespace-only fragments.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// Length of `text` in characters.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Converts byte offsets within one text into character offsets.
///
/// The cursor remembers the last offset it converted and only counts the
/// characters between that offset and the next one, so converting a run of
/// ascending offsets walks the text once. Offsets behind the cursor are
/// handled by walking back.
#[derive(Debug, Clone)]
pub struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    /// Start a cursor at the beginning of `text`.
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Character offset of `byte`.
    ///
    /// `byte` must lie on a character boundary, which holds for every regex
    /// match start.
    pub fn char_offset(&mut self, byte: usize) -> usize {
        if byte >= self.byte {
            self.chars += self.text[self.byte..byte].chars().count();
        } else {
            self.chars -= self.text[byte..self.byte].chars().count();
        }
        self.byte = byte;
        self.chars
    }
}

/// Count the pieces produced by splitting `fragment` on whitespace runs.
///
/// Leading and trailing whitespace produce empty pieces that are counted,
/// so `" one two"` yields 3.
pub fn whitespace_token_count(fragment: &str) -> usize {
    WHITESPACE_RUN.split(fragment).count()
}
