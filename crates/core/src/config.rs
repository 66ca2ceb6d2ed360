//! Analysis configuration.
//!
//! The default configuration reproduces the reference reading and speaking
//! rates. Callers that want different estimates build one with
//! [`AnalysisConfig::builder`].

use crate::{PostmetricError, Result};

/// Default silent reading rate in words per minute.
pub const DEFAULT_READING_WPM: usize = 200;

/// Default speaking rate in words per minute.
pub const DEFAULT_SPEAKING_WPM: usize = 150;

/// Configuration for content analysis.
///
/// # Example
///
/// ```rust
/// use postmetric_core::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .reading_words_per_minute(250)
///     .speaking_words_per_minute(130)
///     .build();
/// assert_eq!(config.reading_words_per_minute, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Words per minute used for `reading_time_minutes` (default: 200).
    pub reading_words_per_minute: usize,

    /// Words per minute used for `speaking_time_minutes` (default: 150).
    pub speaking_words_per_minute: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { reading_words_per_minute: DEFAULT_READING_WPM, speaking_words_per_minute: DEFAULT_SPEAKING_WPM }
    }
}

impl AnalysisConfig {
    /// Creates a new builder for AnalysisConfig.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }

    /// Rejects zero rates. Analysis itself clamps rates to at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.reading_words_per_minute == 0 {
            return Err(PostmetricError::ConfigError(
                "reading_words_per_minute must be at least 1".to_string(),
            ));
        }
        if self.speaking_words_per_minute == 0 {
            return Err(PostmetricError::ConfigError(
                "speaking_words_per_minute must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for AnalysisConfig.
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalysisConfig::default() }
    }

    /// Sets the reading rate.
    pub fn reading_words_per_minute(mut self, value: usize) -> Self {
        self.config.reading_words_per_minute = value;
        self
    }

    /// Sets the speaking rate.
    pub fn speaking_words_per_minute(mut self, value: usize) -> Self {
        self.config.speaking_words_per_minute = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalysisConfig {
        self.config
    }
}

impl Default for AnalysisConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
