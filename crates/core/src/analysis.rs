//! Combined analysis API.
//!
//! [`Analyzer`] runs the whole pipeline (structure, readability, SEO) over one
//! piece of content with a shared [`AnalysisConfig`]. The free functions
//! [`analyze`] and friends use the default configuration.
//!
//! # Example
//!
//! ```rust
//! use postmetric_core::{PostMeta, analyze};
//!
//! let meta = PostMeta::new().title("Getting started with Rust").focus_keyword("rust");
//! let analysis = analyze("<h1>Rust</h1><p>Rust is a systems language.</p>", &meta);
//! assert_eq!(analysis.statistics.headings.h1, 1);
//! assert!(analysis.seo.overall <= 100);
//! ```

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::readability::{ReadabilityReport, analyze_readability};
use crate::seo::{SeoReport, analyze_seo};
use crate::statistics::{ContentStatistics, analyze_structure_with_config};

/// Optional post metadata used by SEO scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostMeta {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub focus_keyword: Option<String>,
}

impl PostMeta {
    /// Creates metadata with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the post title.
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// Sets the meta description.
    pub fn meta_description(mut self, value: impl Into<String>) -> Self {
        self.meta_description = Some(value.into());
        self
    }

    /// Sets the focus keyword.
    pub fn focus_keyword(mut self, value: impl Into<String>) -> Self {
        self.focus_keyword = Some(value.into());
        self
    }
}

/// The full result of analyzing a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentAnalysis {
    pub statistics: ContentStatistics,
    pub readability: ReadabilityReport,
    pub seo: SeoReport,
}

/// Runs content analysis with a fixed configuration.
///
/// An analyzer holds no state besides its configuration, so one instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Creates an analyzer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with a custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use postmetric_core::{AnalysisConfig, Analyzer};
    ///
    /// let config = AnalysisConfig::builder().reading_words_per_minute(100).build();
    /// let analyzer = Analyzer::with_config(config);
    /// let stats = analyzer.analyze_structure(&"word ".repeat(150));
    /// assert_eq!(stats.reading_time_minutes, 2);
    /// ```
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze_structure(&self, content: &str) -> ContentStatistics {
        analyze_structure_with_config(content, &self.config)
    }

    pub fn analyze_readability(&self, content: &str) -> ReadabilityReport {
        analyze_readability(content)
    }

    pub fn analyze_seo(&self, content: &str, meta: &PostMeta, stats: &ContentStatistics) -> SeoReport {
        analyze_seo(
            content,
            meta.title.as_deref(),
            meta.meta_description.as_deref(),
            meta.focus_keyword.as_deref(),
            stats,
        )
    }

    /// Runs all three analyses; SEO scoring reuses the computed statistics.
    pub fn analyze(&self, content: &str, meta: &PostMeta) -> ContentAnalysis {
        let _span = tracing::debug_span!("analyze", bytes = content.len()).entered();

        let statistics = self.analyze_structure(content);
        let readability = self.analyze_readability(content);
        let seo = self.analyze_seo(content, meta, &statistics);

        ContentAnalysis { statistics, readability, seo }
    }
}

/// Convenience function: full analysis with the default configuration.
pub fn analyze(content: &str, meta: &PostMeta) -> ContentAnalysis {
    Analyzer::new().analyze(content, meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readability::Difficulty;

    const POST_HTML: &str = r#"<h1>Writing readable posts</h1>

<p>Short sentences help. Plain words help too. Readers skim, so make it easy.</p>

<h2>Structure</h2>
<p>Use headings. See <a href="/guides/style">our style guide</a> and <a href="example.org">this reference</a>.</p>

<h2>Images</h2>
<p><img src="/img/layout.png" alt="Page layout"></p>"#;

    #[test]
    fn test_post_meta_builder() {
        let meta = PostMeta::new().title("T").meta_description("M").focus_keyword("K");
        assert_eq!(meta.title.as_deref(), Some("T"));
        assert_eq!(meta.meta_description.as_deref(), Some("M"));
        assert_eq!(meta.focus_keyword.as_deref(), Some("K"));
        assert_eq!(PostMeta::new(), PostMeta::default());
    }

    #[test]
    fn test_analyze_full_post() {
        let meta = PostMeta::new().title("How to write readable blog posts for everyone").focus_keyword("readable");
        let analysis = analyze(POST_HTML, &meta);

        assert_eq!(analysis.statistics.headings.h1, 1);
        assert_eq!(analysis.statistics.headings.h2, 2);
        assert_eq!(analysis.statistics.paragraph_count, 4);
        assert_eq!(analysis.statistics.links.internal, 1);
        assert_eq!(analysis.statistics.links.external, 1);
        assert_eq!(analysis.statistics.images.with_alt, 1);

        assert_eq!(analysis.seo.title.score, 100);
        assert_eq!(analysis.seo.headings.score, 100);
        assert_eq!(analysis.seo.links.score, 100);
        assert_eq!(analysis.seo.images.score, 100);
        assert_eq!(analysis.seo.meta_description.score, 0);
        // "readable" appears once in the content
        assert_eq!(analysis.seo.keywords.score, 70);

        assert_ne!(analysis.readability.difficulty, Difficulty::VeryDifficult);
    }

    #[test]
    fn test_analyzer_uses_config() {
        let config = AnalysisConfig::builder().speaking_words_per_minute(10).build();
        let analyzer = Analyzer::with_config(config);
        let analysis = analyzer.analyze(POST_HTML, &PostMeta::new());
        let expected = analysis.statistics.word_count.div_ceil(10);
        assert_eq!(analysis.statistics.speaking_time_minutes, expected);
        assert_eq!(analyzer.config().speaking_words_per_minute, 10);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let meta = PostMeta::new().title("Readable").focus_keyword("posts");
        assert_eq!(analyze(POST_HTML, &meta), analyze(POST_HTML, &meta));
    }

    #[test]
    fn test_analysis_serializes_sections() {
        let analysis = analyze(POST_HTML, &PostMeta::new());
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json["statistics"].is_object());
        assert!(json["readability"]["difficulty"].is_string());
        assert!(json["seo"]["overall"].is_u64());
        assert!(json["seo"]["images"]["message"].is_string());
    }
}
