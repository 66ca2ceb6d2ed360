use crate::Result;
use crate::analysis::ContentAnalysis;
use crate::readability::ReadabilityReport;
use crate::seo::SeoReport;
use crate::statistics::ContentStatistics;
use serde::Serialize;

/// JSON output structure; omitted sections are skipped entirely
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<&'a ContentStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<&'a ReadabilityReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<&'a SeoReport>,
}

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct JsonConfig {
    /// Include the structural statistics section
    pub include_statistics: bool,
    /// Include the readability section
    pub include_readability: bool,
    /// Include the SEO section
    pub include_seo: bool,
    /// Pretty print JSON output
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { include_statistics: true, include_readability: true, include_seo: true, pretty: false }
    }
}

/// Convert an analysis to JSON
pub fn report_to_json(analysis: &ContentAnalysis, config: &JsonConfig) -> Result<String> {
    let output = JsonOutput {
        statistics: config.include_statistics.then_some(&analysis.statistics),
        readability: config.include_readability.then_some(&analysis.readability),
        seo: config.include_seo.then_some(&analysis.seo),
    };

    if config.pretty { Ok(serde_json::to_string_pretty(&output)?) } else { Ok(serde_json::to_string(&output)?) }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, analysis: &ContentAnalysis) -> Result<String> {
        report_to_json(analysis, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{PostMeta, analyze};

    fn sample() -> ContentAnalysis {
        let html = r#"<h2>One</h2><p>Hello world. <img src="a.png"></p>"#;
        analyze(html, &PostMeta::new().title("Hello"))
    }

    #[test]
    fn test_report_to_json_all_sections() {
        let json = report_to_json(&sample(), &JsonConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["statistics"]["word_count"], 3);
        assert_eq!(value["statistics"]["images"]["without_alt"], 1);
        assert_eq!(value["readability"]["difficulty"], "very_easy");
        assert_eq!(value["seo"]["images"]["score"], 70);
        assert_eq!(value["seo"]["images"]["message"], "1 image(s) missing alt text");
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_report_to_json_sections_omitted() {
        let config = JsonConfig { include_statistics: false, include_readability: false, ..Default::default() };
        let json = report_to_json(&sample(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("statistics").is_none());
        assert!(value.get("readability").is_none());
        assert!(value.get("seo").is_some());
    }

    #[test]
    fn test_report_to_json_pretty() {
        let config = JsonConfig { pretty: true, ..Default::default() };
        let json = JsonFormatter::new(config).format(&sample()).unwrap();
        assert!(json.contains("\n  \"statistics\""));
    }
}
