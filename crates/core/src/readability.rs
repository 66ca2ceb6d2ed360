//! Readability scoring.
//!
//! Five classical English readability formulas computed over the plain text:
//! Flesch Reading Ease, Flesch-Kincaid Grade, Gunning Fog, the Automated
//! Readability Index and the Coleman-Liau Index.
//!
//! Intermediate arithmetic runs at full precision; rounding and clamping are
//! applied once, when the report is assembled:
//!
//! | field                         | clamp      | rounding   |
//! |-------------------------------|------------|------------|
//! | `flesch_reading_ease`         | `[0, 100]` | integer    |
//! | grade-style indices           | `>= 0`     | 1 decimal  |
//! | `average_words_per_sentence`  | none       | 1 decimal  |
//! | `average_syllables_per_word`  | none       | 2 decimals |
//!
//! # Example
//!
//! ```rust
//! use postmetric_core::{Difficulty, analyze_readability};
//!
//! let report = analyze_readability("<p>The cat sat on the mat.</p>");
//! assert_eq!(report.difficulty, Difficulty::VeryEasy);
//! ```

use serde::Serialize;

use crate::tokenize::TokenizedText;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Words with at least this many syllables count as complex for Gunning Fog.
const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Reading difficulty band derived from Flesch Reading Ease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryDifficult,
}

impl Difficulty {
    /// Classifies a Flesch Reading Ease score; lower bounds are inclusive.
    pub fn from_reading_ease(score: f64) -> Self {
        if score >= 90.0 {
            Difficulty::VeryEasy
        } else if score >= 80.0 {
            Difficulty::Easy
        } else if score >= 70.0 {
            Difficulty::FairlyEasy
        } else if score >= 60.0 {
            Difficulty::Standard
        } else if score >= 50.0 {
            Difficulty::FairlyDifficult
        } else if score >= 30.0 {
            Difficulty::Difficult
        } else {
            Difficulty::VeryDifficult
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "Very Easy",
            Difficulty::Easy => "Easy",
            Difficulty::FairlyEasy => "Fairly Easy",
            Difficulty::Standard => "Standard",
            Difficulty::FairlyDifficult => "Fairly Difficult",
            Difficulty::Difficult => "Difficult",
            Difficulty::VeryDifficult => "Very Difficult",
        }
    }

    /// The serialized identifier, e.g. `fairly_easy`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "very_easy",
            Difficulty::Easy => "easy",
            Difficulty::FairlyEasy => "fairly_easy",
            Difficulty::Standard => "standard",
            Difficulty::FairlyDifficult => "fairly_difficult",
            Difficulty::Difficult => "difficult",
            Difficulty::VeryDifficult => "very_difficult",
        }
    }
}

/// Readability metrics for a piece of content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityReport {
    /// 0-100, whole number. Higher is easier.
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog_index: f64,
    pub automated_readability_index: f64,
    pub coleman_liau_index: f64,
    pub average_words_per_sentence: f64,
    pub average_syllables_per_word: f64,
    pub difficulty: Difficulty,
}

/// Raw counts the formulas are built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TextCounts {
    words: usize,
    sentences: usize,
    syllables: usize,
    complex_words: usize,
    /// Non-whitespace characters of the plain text.
    characters: usize,
}

impl TextCounts {
    fn from_tokens(tokens: &TokenizedText<'_>) -> Self {
        let words = tokens.words();
        let mut counts = TextCounts {
            words: words.len(),
            sentences: tokens.sentences().len(),
            characters: tokens.character_count_no_spaces(),
            ..Default::default()
        };

        for word in &words {
            let syllables = estimate_syllables(word);
            counts.syllables += syllables;
            if syllables >= COMPLEX_WORD_SYLLABLES {
                counts.complex_words += 1;
            }
        }

        counts
    }

    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences.max(1) as f64
    }

    fn syllables_per_word(&self) -> f64 {
        per_word(self.syllables, self.words)
    }
}

/// `numerator / words`, or 0 when there are no words.
fn per_word(numerator: usize, words: usize) -> f64 {
    if words == 0 { 0.0 } else { numerator as f64 / words as f64 }
}

/// Estimates the syllable count of an English word; never returns 0.
///
/// Words of up to three characters are one syllable. Longer words lose a
/// silent trailing `e` (or `es`/`ed`) after a consonant and a leading `y`,
/// then each run of `a e i o u y` counts as one syllable.
///
/// # Example
///
/// ```rust
/// use postmetric_core::readability::estimate_syllables;
///
/// assert_eq!(estimate_syllables("the"), 1);
/// assert_eq!(estimate_syllables("make"), 1);
/// assert_eq!(estimate_syllables("readability"), 5);
/// ```
pub fn estimate_syllables(word: &str) -> usize {
    let lower: Vec<char> = word.to_lowercase().chars().collect();
    if lower.len() <= 3 {
        return 1;
    }

    let stem = strip_silent_suffix(&lower);
    let stem = match stem.first() {
        Some('y') => &stem[1..],
        _ => stem,
    };

    let mut runs = 0;
    let mut in_run = false;
    for c in stem {
        let is_vowel = VOWELS.contains(c);
        if is_vowel && !in_run {
            runs += 1;
        }
        in_run = is_vowel;
    }

    runs.max(1)
}

/// Drops a trailing `es`, `ed` or `e` that follows a consonant.
fn strip_silent_suffix(chars: &[char]) -> &[char] {
    let follows_consonant = |suffix_len: usize| {
        chars.len() > suffix_len && !VOWELS.contains(&chars[chars.len() - suffix_len - 1])
    };

    if (chars.ends_with(&['e', 's']) || chars.ends_with(&['e', 'd'])) && follows_consonant(2) {
        &chars[..chars.len() - 2]
    } else if chars.ends_with(&['e']) && follows_consonant(1) {
        &chars[..chars.len() - 1]
    } else {
        chars
    }
}

/// Rounds half away from zero to `decimals` places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Computes the readability report for raw content.
pub fn analyze_readability(content: &str) -> ReadabilityReport {
    let tokens = TokenizedText::new(content);
    let counts = TextCounts::from_tokens(&tokens);
    let report = build_report(&counts);

    tracing::debug!(
        words = counts.words,
        sentences = counts.sentences,
        syllables = counts.syllables,
        reading_ease = report.flesch_reading_ease,
        difficulty = report.difficulty.as_str(),
        "analyzed readability"
    );

    report
}

fn build_report(counts: &TextCounts) -> ReadabilityReport {
    let words_per_sentence = counts.words_per_sentence();
    let syllables_per_word = counts.syllables_per_word();
    let characters_per_word = per_word(counts.characters, counts.words);

    let reading_ease = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let kincaid_grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;
    let fog = 0.4 * (words_per_sentence + 100.0 * per_word(counts.complex_words, counts.words));
    let ari = 4.71 * characters_per_word + 0.5 * words_per_sentence - 21.43;

    let letters_per_100 = 100.0 * characters_per_word;
    let sentences_per_100 = 100.0 * per_word(counts.sentences, counts.words);
    let coleman_liau = 0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8;

    let flesch_reading_ease = reading_ease.clamp(0.0, 100.0).round();

    ReadabilityReport {
        flesch_reading_ease,
        flesch_kincaid_grade: round_to(kincaid_grade.max(0.0), 1),
        gunning_fog_index: round_to(fog.max(0.0), 1),
        automated_readability_index: round_to(ari.max(0.0), 1),
        coleman_liau_index: round_to(coleman_liau.max(0.0), 1),
        average_words_per_sentence: round_to(words_per_sentence, 1),
        average_syllables_per_word: round_to(syllables_per_word, 2),
        difficulty: Difficulty::from_reading_ease(flesch_reading_ease),
    }
}
