//! Pattern-based markup scanning.
//!
//! This is not an HTML parser. Each rule is a single regular expression over
//! the raw markup that recognises one kind of opening tag, so malformed markup
//! simply yields fewer matches instead of an error.
//!
//! Rules:
//! - headings: `<h1` .. `<h6`, any attributes
//! - anchors: `<a ... href=...>` with a non-empty value (quoted or bare)
//! - images: `<img ...>`, with alt text when `alt` has a non-empty quoted value
//! - lists: `<ul` and `<ol`
//! - code: `<pre` and `<code`, each counted on its own

use std::sync::LazyLock;

use regex::Regex;

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h([1-6])").expect("heading pattern should compile"));

static ANCHOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s(?:[^>]*?\s)?href\s*=\s*(?:"(?P<double>[^"]*)"|'(?P<single>[^']*)'|(?P<bare>[^\s"'>]+))"#)
        .expect("anchor pattern should compile")
});

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\b[^>]*>").expect("image pattern should compile"));

static ALT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\salt\s*=\s*(?:"(?P<double>[^"]*)"|'(?P<single>[^']*)')"#).expect("alt pattern should compile")
});

static LIST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:ul|ol)\b").expect("list pattern should compile"));

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:pre|code)\b").expect("code pattern should compile"));

/// Where a link points, judged from its href alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOrigin {
    Internal,
    External,
}

/// An `<img>` tag found in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTag<'a> {
    /// The full tag text, `<img` through `>`.
    pub tag: &'a str,
    /// The quoted `alt` value, if the attribute is present.
    pub alt: Option<&'a str>,
}

impl ImageTag<'_> {
    /// True when the image carries a non-empty alt value.
    pub fn has_alt(&self) -> bool {
        self.alt.is_some_and(|alt| !alt.is_empty())
    }
}

/// Counts opening heading tags per level; index 0 is `<h1`.
pub fn heading_levels(content: &str) -> [usize; 6] {
    let mut levels = [0usize; 6];
    for caps in HEADING_PATTERN.captures_iter(content) {
        if let Some(level) = caps.get(1).and_then(|m| m.as_str().parse::<usize>().ok()) {
            levels[level - 1] += 1;
        }
    }
    tracing::trace!(?levels, "scanned headings");
    levels
}

/// Returns the href value of every anchor whose href is non-empty.
pub fn anchor_hrefs(content: &str) -> Vec<&str> {
    ANCHOR_PATTERN
        .captures_iter(content)
        .filter_map(|caps| {
            caps.name("double")
                .or_else(|| caps.name("single"))
                .or_else(|| caps.name("bare"))
                .map(|m| m.as_str())
        })
        .filter(|href| !href.is_empty())
        .collect()
}

/// Classifies an href: anything containing `localhost` or a `/` is internal.
///
/// This is a textual rule, not URL resolution. `https://example.com/page`
/// contains a `/` and is therefore internal.
pub fn classify_href(href: &str) -> LinkOrigin {
    if href.contains("localhost") || href.contains('/') { LinkOrigin::Internal } else { LinkOrigin::External }
}

/// Returns every `<img>` tag along with its alt value.
pub fn image_tags(content: &str) -> Vec<ImageTag<'_>> {
    IMAGE_PATTERN
        .find_iter(content)
        .map(|m| {
            let tag = m.as_str();
            let alt = ALT_PATTERN
                .captures(tag)
                .and_then(|caps| caps.name("double").or_else(|| caps.name("single")))
                .map(|alt| alt.as_str());
            ImageTag { tag, alt }
        })
        .collect()
}

/// Counts `<ul` and `<ol` opening tags.
pub fn count_list_openers(content: &str) -> usize {
    LIST_PATTERN.find_iter(content).count()
}

/// Counts `<pre` and `<code` opening tags independently.
pub fn count_code_openers(content: &str) -> usize {
    CODE_PATTERN.find_iter(content).count()
}
