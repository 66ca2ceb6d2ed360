//! Markup stripping and text segmentation.
//!
//! Every analysis stage works from the same views of the content: plain text
//! with markup removed, whitespace-delimited words, punctuation-delimited
//! sentences, and blank-line-delimited paragraphs of the raw input.
//!
//! Markup stripping is deliberately naive. Anything between `<` and `>` is
//! replaced by a single space; entities are not decoded and an unterminated
//! `<` is left as text.

use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern should compile"));

static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should compile"));

static SENTENCE_BREAK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence break pattern should compile"));

static PARAGRAPH_BREAK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("paragraph break pattern should compile"));

/// Segmented views over a piece of content.
///
/// The plain text is computed once on construction; word and sentence views
/// borrow from it, paragraph views borrow from the raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedText<'a> {
    raw: &'a str,
    plain: String,
}

impl<'a> TokenizedText<'a> {
    /// Tokenizes raw content.
    pub fn new(content: &'a str) -> Self {
        Self { raw: content, plain: strip_markup(content) }
    }

    /// The original content, markup included.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Plain text with markup removed and whitespace collapsed.
    pub fn plain_text(&self) -> &str {
        &self.plain
    }

    pub fn words(&self) -> Vec<&str> {
        split_words(&self.plain)
    }

    pub fn sentences(&self) -> Vec<&str> {
        split_sentences(&self.plain)
    }

    pub fn paragraphs(&self) -> Vec<&'a str> {
        split_paragraphs(self.raw)
    }

    /// Number of characters in the plain text.
    pub fn character_count(&self) -> usize {
        self.plain.chars().count()
    }

    /// Number of non-whitespace characters in the plain text.
    pub fn character_count_no_spaces(&self) -> usize {
        self.plain.chars().filter(|c| !c.is_whitespace()).count()
    }
}

/// Replaces every tag with a space, collapses whitespace runs, and trims.
///
/// # Example
///
/// ```rust
/// use postmetric_core::tokenize::strip_markup;
///
/// assert_eq!(strip_markup("<p>Hello <b>world</b></p>"), "Hello world");
/// ```
pub fn strip_markup(content: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(content, " ");
    WHITESPACE_PATTERN.replace_all(&without_tags, " ").trim().to_string()
}

/// Splits text on whitespace, discarding empty tokens.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Splits text on runs of `.`, `!` or `?`, discarding blank segments.
///
/// Returned segments are trimmed.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Splits raw content on two or more consecutive newlines, discarding blank segments.
pub fn split_paragraphs(content: &str) -> Vec<&str> {
    PARAGRAPH_BREAK_PATTERN
        .split(content)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}
