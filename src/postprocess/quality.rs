//! Heuristic quality scoring for extracted text.
//!
//! The three sub-scores are proxies, not validated statistics: each measures
//! distance from a tunable ideal (word length, sentence length, paragraph
//! length) and clamps into [0, 1].

use super::structure::SentenceTokenizer;
use serde::{Deserialize, Serialize};

/// Ideal average word length in characters.
const IDEAL_WORD_LEN: f64 = 5.0;

/// Ideal average sentence length in words.
const IDEAL_SENTENCE_WORDS: f64 = 20.0;

/// Paragraph character length treated as fully complete content.
const IDEAL_PARAGRAPH_CHARS: f64 = 200.0;

/// Quality metrics for a piece of extracted text, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Closeness of the average word length to the ideal.
    pub readability: f64,
    /// Closeness of the average sentence length to the ideal.
    pub coherence: f64,
    /// Content density measured by paragraph length.
    pub completeness: f64,
    /// Unweighted mean of the three sub-scores.
    pub overall: f64,
}

/// Round to two decimal places for reporting.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Assess the quality of extracted text.
///
/// Empty input yields all-zero metrics; every ratio is guarded against a
/// zero divisor, so this never fails.
pub fn assess_quality(text: &str) -> QualityMetrics {
    if text.is_empty() {
        return QualityMetrics::default();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let chars = text.chars().count();

    let readability = if words.is_empty() {
        0.0
    } else {
        let avg_word_len = chars as f64 / words.len() as f64;
        (1.0 - (avg_word_len - IDEAL_WORD_LEN).abs() / 10.0).max(0.0)
    };

    // Coherence is defined against the simple splitter regardless of which
    // tokenizer structuring uses, so the score is comparable across inputs.
    let sentences = SentenceTokenizer::Split.tokenize(text);
    let coherence = if sentences.is_empty() {
        0.0
    } else {
        let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
        let avg_sentence_words = total_words as f64 / sentences.len() as f64;
        (1.0 - (avg_sentence_words - IDEAL_SENTENCE_WORDS).abs() / 50.0).max(0.0)
    };

    let paragraphs: Vec<&str> = text
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .collect();
    let completeness = if paragraphs.is_empty() {
        0.0
    } else {
        let total_chars: usize = paragraphs.iter().map(|p| p.chars().count()).sum();
        let avg_paragraph_chars = total_chars as f64 / paragraphs.len() as f64;
        (avg_paragraph_chars / IDEAL_PARAGRAPH_CHARS).min(1.0)
    };

    QualityMetrics {
        readability: round2(readability),
        coherence: round2(coherence),
        completeness: round2(completeness),
        overall: round2((readability + coherence + completeness) / 3.0),
    }
}
