use crate::Result;
use crate::analysis::{ContentAnalysis, PostMeta};
use crate::readability::ReadabilityReport;
use crate::seo::SeoReport;
use crate::statistics::ContentStatistics;

/// Width of the label column
const LABEL_WIDTH: usize = 30;

/// Configuration for plain text output
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Include a header with the post title, when one is set
    pub include_header: bool,

    /// Print the message next to each SEO sub-score
    pub include_seo_messages: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { include_header: true, include_seo_messages: true }
    }
}

/// Plain text formatter for analysis reports
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, analysis: &ContentAnalysis, meta: &PostMeta) -> Result<String> {
        report_to_text(analysis, meta, &self.config)
    }
}

/// Render an analysis as a human-readable report
pub fn report_to_text(analysis: &ContentAnalysis, meta: &PostMeta, config: &TextConfig) -> Result<String> {
    let mut output = String::new();

    if config.include_header
        && let Some(title) = meta.title.as_deref().filter(|t| !t.is_empty())
    {
        output.push_str(title);
        output.push('\n');
        output.push_str(&"=".repeat(title.chars().count()));
        output.push_str("\n\n");
    }

    write_statistics(&mut output, &analysis.statistics);
    output.push('\n');
    write_readability(&mut output, &analysis.readability);
    output.push('\n');
    write_seo(&mut output, &analysis.seo, config.include_seo_messages);

    Ok(output.trim_end().to_string())
}

fn push_row(output: &mut String, label: &str, value: impl std::fmt::Display) {
    output.push_str(&format!("  {:<width$}{}\n", format!("{}:", label), value, width = LABEL_WIDTH));
}

fn write_statistics(output: &mut String, stats: &ContentStatistics) {
    output.push_str("Statistics\n");
    push_row(output, "Words", stats.word_count);
    push_row(
        output,
        "Characters",
        format!("{} ({} without spaces)", stats.character_count, stats.character_count_no_spaces),
    );
    push_row(output, "Sentences", stats.sentence_count);
    push_row(output, "Paragraphs", stats.paragraph_count);
    push_row(output, "Reading time", format!("{} min", stats.reading_time_minutes));
    push_row(output, "Speaking time", format!("{} min", stats.speaking_time_minutes));

    let headings =
        (1..=6u8).map(|level| format!("H{} {}", level, stats.headings.level(level))).collect::<Vec<_>>().join(", ");
    push_row(output, "Headings", headings);
    push_row(
        output,
        "Links",
        format!("{} internal, {} external", stats.links.internal, stats.links.external),
    );
    push_row(
        output,
        "Images",
        format!("{} ({} missing alt text)", stats.images.total, stats.images.without_alt),
    );
    push_row(output, "Lists", stats.lists);
    push_row(output, "Code blocks", stats.code_blocks);
}

fn write_readability(output: &mut String, report: &ReadabilityReport) {
    output.push_str(&format!("Readability ({})\n", report.difficulty.label()));
    push_row(output, "Flesch Reading Ease", report.flesch_reading_ease);
    push_row(output, "Flesch-Kincaid Grade", format!("{:.1}", report.flesch_kincaid_grade));
    push_row(output, "Gunning Fog Index", format!("{:.1}", report.gunning_fog_index));
    push_row(output, "Automated Readability Index", format!("{:.1}", report.automated_readability_index));
    push_row(output, "Coleman-Liau Index", format!("{:.1}", report.coleman_liau_index));
    push_row(output, "Words per sentence", format!("{:.1}", report.average_words_per_sentence));
    push_row(output, "Syllables per word", format!("{:.2}", report.average_syllables_per_word));
}

fn write_seo(output: &mut String, report: &SeoReport, include_messages: bool) {
    output.push_str(&format!("SEO score: {}/100\n", report.overall));
    for (category, check) in report.checks() {
        let value = if include_messages {
            format!("{:>3}  {}", check.score, check.message)
        } else {
            format!("{:>3}", check.score)
        };
        push_row(output, category.label(), value);
    }
}
