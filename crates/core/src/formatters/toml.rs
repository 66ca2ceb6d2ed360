use crate::Result;
use crate::analysis::ContentAnalysis;
use crate::statistics::ContentStatistics;

/// Convert an analysis to TOML
///
/// Manual TOML serialization; the report is flat enough that a serializer
/// crate buys nothing
pub fn report_to_toml(analysis: &ContentAnalysis) -> Result<String> {
    let mut toml = String::new();

    write_statistics(&mut toml, &analysis.statistics);

    let readability = &analysis.readability;
    toml.push_str("\n[readability]\n");
    push_float(&mut toml, "flesch_reading_ease", readability.flesch_reading_ease);
    push_float(&mut toml, "flesch_kincaid_grade", readability.flesch_kincaid_grade);
    push_float(&mut toml, "gunning_fog_index", readability.gunning_fog_index);
    push_float(&mut toml, "automated_readability_index", readability.automated_readability_index);
    push_float(&mut toml, "coleman_liau_index", readability.coleman_liau_index);
    push_float(&mut toml, "average_words_per_sentence", readability.average_words_per_sentence);
    push_float(&mut toml, "average_syllables_per_word", readability.average_syllables_per_word);
    toml.push_str(&format!("difficulty = {}\n", toml_escape_string(readability.difficulty.as_str())));

    toml.push_str("\n[seo]\n");
    toml.push_str(&format!("overall = {}\n", analysis.seo.overall));
    for (category, check) in analysis.seo.checks() {
        toml.push_str(&format!("\n[seo.{}]\n", category.as_str()));
        toml.push_str(&format!("score = {}\n", check.score));
        toml.push_str(&format!("message = {}\n", toml_escape_string(&check.message)));
    }

    Ok(toml)
}

fn write_statistics(toml: &mut String, stats: &ContentStatistics) {
    toml.push_str("[statistics]\n");
    toml.push_str(&format!("word_count = {}\n", stats.word_count));
    toml.push_str(&format!("character_count = {}\n", stats.character_count));
    toml.push_str(&format!("character_count_no_spaces = {}\n", stats.character_count_no_spaces));
    toml.push_str(&format!("paragraph_count = {}\n", stats.paragraph_count));
    toml.push_str(&format!("sentence_count = {}\n", stats.sentence_count));
    toml.push_str(&format!("reading_time_minutes = {}\n", stats.reading_time_minutes));
    toml.push_str(&format!("speaking_time_minutes = {}\n", stats.speaking_time_minutes));
    toml.push_str(&format!("lists = {}\n", stats.lists));
    toml.push_str(&format!("code_blocks = {}\n", stats.code_blocks));

    toml.push_str("\n[statistics.headings]\n");
    for level in 1..=6u8 {
        toml.push_str(&format!("h{} = {}\n", level, stats.headings.level(level)));
    }

    toml.push_str("\n[statistics.links]\n");
    toml.push_str(&format!("internal = {}\n", stats.links.internal));
    toml.push_str(&format!("external = {}\n", stats.links.external));
    toml.push_str(&format!("broken = {}\n", stats.links.broken));

    toml.push_str("\n[statistics.images]\n");
    toml.push_str(&format!("total = {}\n", stats.images.total));
    toml.push_str(&format!("with_alt = {}\n", stats.images.with_alt));
    toml.push_str(&format!("without_alt = {}\n", stats.images.without_alt));
}

/// Floats always carry a decimal point so they read back as floats
fn push_float(toml: &mut String, key: &str, value: f64) {
    toml.push_str(&format!("{} = {:?}\n", key, value));
}

/// Escape a string for TOML format
fn toml_escape_string(s: &str) -> String {
    let needs_escape = s.contains('"') || s.contains('\\') || s.contains('\n');
    if needs_escape {
        format!(
            "\"{}\"",
            s.replace('\\', "\\\\").replace('\"', "\\\"").replace('\n', "\\n")
        )
    } else {
        format!("\"{}\"", s)
    }
}

/// TOML formatter for analysis reports
pub struct TomlFormatter;

impl TomlFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, analysis: &ContentAnalysis) -> Result<String> {
        report_to_toml(analysis)
    }
}

impl Default for TomlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
