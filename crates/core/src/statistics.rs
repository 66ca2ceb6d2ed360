//! Structural statistics for post content.
//!
//! [`analyze_structure`] counts words, characters, sentences, paragraphs and
//! the markup elements an editor cares about (headings, links, images, lists,
//! code) and estimates reading and speaking time.

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::scanner::{self, LinkOrigin};
use crate::tokenize::TokenizedText;

/// Opening heading tag counts, one per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

impl HeadingCounts {
    /// Returns the count for `level` (1-6), or 0 for any other level.
    pub fn level(&self, level: u8) -> usize {
        match level {
            1 => self.h1,
            2 => self.h2,
            3 => self.h3,
            4 => self.h4,
            5 => self.h5,
            6 => self.h6,
            _ => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.h1 + self.h2 + self.h3 + self.h4 + self.h5 + self.h6
    }
}

impl From<[usize; 6]> for HeadingCounts {
    fn from(levels: [usize; 6]) -> Self {
        let [h1, h2, h3, h4, h5, h6] = levels;
        Self { h1, h2, h3, h4, h5, h6 }
    }
}

/// Anchor counts by origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
    /// Always 0: links are never fetched, so nothing is known to be broken.
    pub broken: usize,
}

impl LinkCounts {
    /// Internal plus external links.
    pub fn total(&self) -> usize {
        self.internal + self.external
    }
}

/// Image counts split by alt text presence.
///
/// `with_alt + without_alt == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImageCounts {
    pub total: usize,
    pub with_alt: usize,
    pub without_alt: usize,
}

/// Quantitative statistics about a piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentStatistics {
    pub word_count: usize,
    /// Characters of the plain text, not the raw markup.
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub paragraph_count: usize,
    pub sentence_count: usize,
    /// Never less than 1, even for empty content.
    pub reading_time_minutes: usize,
    /// Never less than 1, even for empty content.
    pub speaking_time_minutes: usize,
    pub headings: HeadingCounts,
    pub links: LinkCounts,
    pub images: ImageCounts,
    pub lists: usize,
    pub code_blocks: usize,
}

/// Computes structural statistics with the default reading and speaking rates.
///
/// # Example
///
/// ```rust
/// use postmetric_core::analyze_structure;
///
/// let stats = analyze_structure("<p>Hello world.</p>");
/// assert_eq!(stats.word_count, 2);
/// assert_eq!(stats.sentence_count, 1);
/// assert_eq!(stats.reading_time_minutes, 1);
/// ```
pub fn analyze_structure(content: &str) -> ContentStatistics {
    analyze_structure_with_config(content, &AnalysisConfig::default())
}

/// Computes structural statistics using the rates from `config`.
pub fn analyze_structure_with_config(content: &str, config: &AnalysisConfig) -> ContentStatistics {
    let tokens = TokenizedText::new(content);
    let word_count = tokens.words().len();

    let stats = ContentStatistics {
        word_count,
        character_count: tokens.character_count(),
        character_count_no_spaces: tokens.character_count_no_spaces(),
        paragraph_count: tokens.paragraphs().len(),
        sentence_count: tokens.sentences().len(),
        reading_time_minutes: minutes_for(word_count, config.reading_words_per_minute),
        speaking_time_minutes: minutes_for(word_count, config.speaking_words_per_minute),
        headings: HeadingCounts::from(scanner::heading_levels(content)),
        links: count_links(content),
        images: count_images(content),
        lists: scanner::count_list_openers(content),
        code_blocks: scanner::count_code_openers(content),
    };

    tracing::debug!(
        words = stats.word_count,
        sentences = stats.sentence_count,
        paragraphs = stats.paragraph_count,
        headings = stats.headings.total(),
        links = stats.links.total(),
        images = stats.images.total,
        "analyzed structure"
    );

    stats
}

/// Whole minutes needed at `words_per_minute`, rounded up, with a floor of 1.
fn minutes_for(word_count: usize, words_per_minute: usize) -> usize {
    word_count.div_ceil(words_per_minute.max(1)).max(1)
}

fn count_links(content: &str) -> LinkCounts {
    let mut links = LinkCounts::default();
    for href in scanner::anchor_hrefs(content) {
        match scanner::classify_href(href) {
            LinkOrigin::Internal => links.internal += 1,
            LinkOrigin::External => links.external += 1,
        }
    }
    links
}

fn count_images(content: &str) -> ImageCounts {
    let images = scanner::image_tags(content);
    let with_alt = images.iter().filter(|image| image.has_alt()).count();
    ImageCounts { total: images.len(), with_alt, without_alt: images.len() - with_alt }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        let stats = analyze_structure("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.character_count, 0);
        assert_eq!(stats.character_count_no_spaces, 0);
        assert_eq!(stats.paragraph_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.reading_time_minutes, 1);
        assert_eq!(stats.speaking_time_minutes, 1);
        assert_eq!(stats.headings, HeadingCounts::default());
        assert_eq!(stats.links, LinkCounts::default());
        assert_eq!(stats.images, ImageCounts::default());
        assert_eq!(stats.lists, 0);
        assert_eq!(stats.code_blocks, 0);
    }

    #[test]
    fn test_single_paragraph() {
        let stats = analyze_structure("<p>Hello world.</p>");
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.character_count, 12);
        assert_eq!(stats.character_count_no_spaces, 11);
        assert_eq!(stats.headings.total(), 0);
    }

    #[test]
    fn test_reading_and_speaking_time() {
        let content = "word ".repeat(201);
        let stats = analyze_structure(&content);
        assert_eq!(stats.word_count, 201);
        assert_eq!(stats.reading_time_minutes, 2);
        assert_eq!(stats.speaking_time_minutes, 2);

        let content = "word ".repeat(150);
        let stats = analyze_structure(&content);
        assert_eq!(stats.reading_time_minutes, 1);
        assert_eq!(stats.speaking_time_minutes, 1);

        let content = "word ".repeat(151);
        assert_eq!(analyze_structure(&content).speaking_time_minutes, 2);
    }

    #[test]
    fn test_custom_rates() {
        let config = AnalysisConfig::builder().reading_words_per_minute(100).build();
        let content = "word ".repeat(250);
        let stats = analyze_structure_with_config(&content, &config);
        assert_eq!(stats.reading_time_minutes, 3);
        assert_eq!(stats.speaking_time_minutes, 2);
    }

    #[test]
    fn test_zero_rate_does_not_divide_by_zero() {
        let config = AnalysisConfig::builder().reading_words_per_minute(0).build();
        let stats = analyze_structure_with_config("three small words", &config);
        assert_eq!(stats.reading_time_minutes, 3);
    }

    #[test]
    fn test_headings_lists_and_code() {
        let html = r#"
            <h1>Title</h1>
            <h2>Part one</h2><h2>Part two</h2><h3>Detail</h3>
            <ul><li>a</li></ul><ol><li>b</li></ol>
            <pre><code>let x = 1;</code></pre>
        "#;
        let stats = analyze_structure(html);
        assert_eq!(stats.headings.h1, 1);
        assert_eq!(stats.headings.h2, 2);
        assert_eq!(stats.headings.level(3), 1);
        assert_eq!(stats.headings.level(7), 0);
        assert_eq!(stats.headings.total(), 4);
        assert_eq!(stats.lists, 2);
        assert_eq!(stats.code_blocks, 2);
    }

    #[test]
    fn test_link_classification() {
        let html = r#"
            <a href="/blog/post">internal</a>
            <a href="http://localhost:8080">local</a>
            <a href="https://example.com/">absolute</a>
            <a href="example.com">bare domain</a>
            <a href="">empty</a>
        "#;
        let stats = analyze_structure(html);
        assert_eq!(stats.links.internal, 3);
        assert_eq!(stats.links.external, 1);
        assert_eq!(stats.links.broken, 0);
        assert_eq!(stats.links.total(), 4);
    }

    #[test]
    fn test_image_alt_partition() {
        let html = r#"<img src="a.png" alt="A photo"><img src="b.png">"#;
        let stats = analyze_structure(html);
        assert_eq!(stats.images, ImageCounts { total: 2, with_alt: 1, without_alt: 1 });
    }

    #[test]
    fn test_statistics_serialize_field_names() {
        let stats = analyze_structure("<h2>Hi</h2>");
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["headings"]["h2"], 1);
        assert_eq!(json["links"]["broken"], 0);
        assert_eq!(json["images"]["without_alt"], 0);
        assert_eq!(json["character_count_no_spaces"], 2);
        assert_eq!(json["reading_time_minutes"], 1);
    }
}
