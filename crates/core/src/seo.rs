//! SEO scoring.
//!
//! Seven independent checks, each producing a 0-100 score and a fixed
//! message, plus an overall score that is their rounded mean. Messages are
//! shown to authors verbatim, so their wording is part of the output.

use serde::Serialize;

use crate::statistics::ContentStatistics;

const TITLE_MIN_CHARS: usize = 30;
const TITLE_MAX_CHARS: usize = 60;
const META_DESCRIPTION_MIN_CHARS: usize = 120;
const META_DESCRIPTION_MAX_CHARS: usize = 160;
const KEYWORD_MIN_OCCURRENCES: usize = 3;
const SHORT_CONTENT_WORDS: usize = 300;
const MEDIUM_CONTENT_WORDS: usize = 600;
const LONG_CONTENT_WORDS: usize = 2500;

/// The seven SEO check categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoCategory {
    Title,
    MetaDescription,
    Keywords,
    Headings,
    Images,
    Links,
    Readability,
}

impl SeoCategory {
    pub const ALL: [SeoCategory; 7] = [
        SeoCategory::Title,
        SeoCategory::MetaDescription,
        SeoCategory::Keywords,
        SeoCategory::Headings,
        SeoCategory::Images,
        SeoCategory::Links,
        SeoCategory::Readability,
    ];

    /// The serialized identifier, e.g. `meta_description`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeoCategory::Title => "title",
            SeoCategory::MetaDescription => "meta_description",
            SeoCategory::Keywords => "keywords",
            SeoCategory::Headings => "headings",
            SeoCategory::Images => "images",
            SeoCategory::Links => "links",
            SeoCategory::Readability => "readability",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SeoCategory::Title => "Title",
            SeoCategory::MetaDescription => "Meta description",
            SeoCategory::Keywords => "Keywords",
            SeoCategory::Headings => "Headings",
            SeoCategory::Images => "Images",
            SeoCategory::Links => "Links",
            SeoCategory::Readability => "Readability",
        }
    }
}

/// One scored check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoCheck {
    /// 0-100.
    pub score: u8,
    pub message: String,
}

impl SeoCheck {
    fn new(score: u8, message: impl Into<String>) -> Self {
        Self { score, message: message.into() }
    }
}

/// SEO sub-scores and their mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoReport {
    /// Mean of the seven sub-scores, rounded half up.
    pub overall: u8,
    pub title: SeoCheck,
    pub meta_description: SeoCheck,
    pub keywords: SeoCheck,
    pub headings: SeoCheck,
    pub images: SeoCheck,
    pub links: SeoCheck,
    /// Driven by word count, not by the readability formulas.
    pub readability: SeoCheck,
}

impl SeoReport {
    /// Looks up the check for a category.
    pub fn check(&self, category: SeoCategory) -> &SeoCheck {
        match category {
            SeoCategory::Title => &self.title,
            SeoCategory::MetaDescription => &self.meta_description,
            SeoCategory::Keywords => &self.keywords,
            SeoCategory::Headings => &self.headings,
            SeoCategory::Images => &self.images,
            SeoCategory::Links => &self.links,
            SeoCategory::Readability => &self.readability,
        }
    }

    /// Every check in report order.
    pub fn checks(&self) -> impl Iterator<Item = (SeoCategory, &SeoCheck)> {
        SeoCategory::ALL.into_iter().map(move |category| (category, self.check(category)))
    }
}

/// Scores content for SEO.
///
/// `stats` must be the statistics of the same `content`; the headings,
/// images, links and length checks read from it rather than rescanning.
/// Empty strings for `title`, `meta_description` or `focus_keyword` count as
/// absent.
///
/// # Example
///
/// ```rust
/// use postmetric_core::{analyze_seo, analyze_structure};
///
/// let content = "<h2>Intro</h2><p>Rust makes systems programming approachable.</p>";
/// let stats = analyze_structure(content);
/// let report = analyze_seo(content, Some("Why Rust"), None, Some("rust"), &stats);
/// assert_eq!(report.title.score, 50);
/// assert_eq!(report.meta_description.score, 0);
/// ```
pub fn analyze_seo(
    content: &str, title: Option<&str>, meta_description: Option<&str>, focus_keyword: Option<&str>,
    stats: &ContentStatistics,
) -> SeoReport {
    let title = non_empty(title);
    let meta_description = non_empty(meta_description);
    let focus_keyword = non_empty(focus_keyword);

    let mut report = SeoReport {
        overall: 0,
        title: score_title(title),
        meta_description: score_meta_description(meta_description),
        keywords: score_keywords(content, title, focus_keyword),
        headings: score_headings(stats),
        images: score_images(stats),
        links: score_links(stats),
        readability: score_length(stats),
    };
    report.overall = mean_score(report.checks().map(|(_, check)| check.score));

    tracing::debug!(
        overall = report.overall,
        title = report.title.score,
        meta_description = report.meta_description.score,
        keywords = report.keywords.score,
        "analyzed seo"
    );

    report
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Rounded-half-up integer mean.
fn mean_score(scores: impl Iterator<Item = u8>) -> u8 {
    let (sum, count) = scores.fold((0u32, 0u32), |(sum, count), score| (sum + u32::from(score), count + 1));
    if count == 0 {
        return 0;
    }
    let mean = (2 * sum + count) / (2 * count);
    mean.min(100) as u8
}

fn score_title(title: Option<&str>) -> SeoCheck {
    let Some(title) = title else {
        return SeoCheck::new(0, "Add a title to your post");
    };

    let length = title.chars().count();
    if length < TITLE_MIN_CHARS {
        SeoCheck::new(50, "Title is too short (aim for 30-60 characters)")
    } else if length > TITLE_MAX_CHARS {
        SeoCheck::new(70, "Title is too long (aim for 30-60 characters)")
    } else {
        SeoCheck::new(100, "Title length is optimal")
    }
}

fn score_meta_description(meta_description: Option<&str>) -> SeoCheck {
    let Some(meta_description) = meta_description else {
        return SeoCheck::new(0, "Add a meta description");
    };

    let length = meta_description.chars().count();
    if length < META_DESCRIPTION_MIN_CHARS {
        SeoCheck::new(50, "Meta description is too short (aim for 120-160 characters)")
    } else if length > META_DESCRIPTION_MAX_CHARS {
        SeoCheck::new(70, "Meta description is too long (aim for 120-160 characters)")
    } else {
        SeoCheck::new(100, "Meta description length is optimal")
    }
}

fn score_keywords(content: &str, title: Option<&str>, focus_keyword: Option<&str>) -> SeoCheck {
    let Some(keyword) = focus_keyword else {
        return SeoCheck::new(30, "No focus keyword set, consider adding one");
    };

    let needle = keyword.to_lowercase();
    let in_title = title.is_some_and(|title| title.to_lowercase().contains(&needle));
    let occurrences = content.to_lowercase().matches(needle.as_str()).count();
    let in_content = occurrences > 0;

    tracing::trace!(in_title, occurrences, "focus keyword usage");

    if in_title && in_content && occurrences >= KEYWORD_MIN_OCCURRENCES {
        SeoCheck::new(100, "Focus keyword is used well in the title and content")
    } else if in_content {
        SeoCheck::new(
            70,
            "Focus keyword appears in the content, use it in the title and at least 3 times",
        )
    } else {
        SeoCheck::new(40, "Focus keyword not found in the content")
    }
}

fn score_headings(stats: &ContentStatistics) -> SeoCheck {
    let headings = &stats.headings;
    if headings.total() == 0 {
        SeoCheck::new(30, "Add headings to structure your content")
    } else if headings.h1 > 1 {
        SeoCheck::new(60, "Use only one H1 heading")
    } else if headings.h2 >= 2 {
        SeoCheck::new(100, "Good heading structure")
    } else {
        SeoCheck::new(70, "Add more H2 subheadings to break up the content")
    }
}

fn score_images(stats: &ContentStatistics) -> SeoCheck {
    let images = &stats.images;
    if images.total == 0 {
        SeoCheck::new(40, "Consider adding images to your content")
    } else if images.without_alt > 0 {
        SeoCheck::new(70, format!("{} image(s) missing alt text", images.without_alt))
    } else {
        SeoCheck::new(100, "All images have alt text")
    }
}

fn score_links(stats: &ContentStatistics) -> SeoCheck {
    let links = &stats.links;
    if links.total() == 0 {
        SeoCheck::new(50, "Add internal and external links")
    } else if links.internal == 0 {
        SeoCheck::new(70, "Add internal links to related content")
    } else if links.external == 0 {
        SeoCheck::new(80, "Add external links to authoritative sources")
    } else {
        SeoCheck::new(100, "Good balance of internal and external links")
    }
}

fn score_length(stats: &ContentStatistics) -> SeoCheck {
    let words = stats.word_count;
    if words < SHORT_CONTENT_WORDS {
        SeoCheck::new(50, "Content is too short (aim for at least 300 words)")
    } else if words < MEDIUM_CONTENT_WORDS {
        SeoCheck::new(70, "Content could be longer (aim for 600 words or more)")
    } else if words > LONG_CONTENT_WORDS {
        SeoCheck::new(90, "Content is very long, consider splitting it into several posts")
    } else {
        SeoCheck::new(100, "Content length is good")
    }
}
