//! Content analysis for rich-text posts.
//!
//! Three pure, deterministic computations over a content string:
//!
//! - [`analyze_structure`]: word, sentence, paragraph and element counts plus
//!   reading and speaking time estimates
//! - [`analyze_readability`]: five classical readability formulas and a
//!   difficulty band
//! - [`analyze_seo`]: seven SEO sub-scores with author-facing messages and an
//!   overall score
//!
//! None of them fail: any string, including empty or malformed markup,
//! produces a fully populated report.

pub mod analysis;
pub mod config;
pub mod error;
pub mod formatters;
pub mod input;
pub mod readability;
pub mod scanner;
pub mod seo;
pub mod statistics;
pub mod tokenize;

pub use analysis::{Analyzer, ContentAnalysis, PostMeta, analyze};
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use error::{PostmetricError, Result};
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter, TomlFormatter};
pub use formatters::{report_to_json, report_to_text, report_to_toml};
pub use input::{decode_content, read_file, read_stdin};
pub use readability::{Difficulty, ReadabilityReport, analyze_readability};
pub use seo::{SeoCategory, SeoCheck, SeoReport, analyze_seo};
pub use statistics::{
    ContentStatistics, HeadingCounts, ImageCounts, LinkCounts, analyze_structure, analyze_structure_with_config,
};
