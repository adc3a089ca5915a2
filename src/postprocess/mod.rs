//! Post-extraction text processing.
//!
//! Cleans artifacts out of extracted text, structures it into sections,
//! paragraphs, and sentences, extracts frequency-based keywords, and scores
//! overall text quality. Every stage is a pure function of its input and
//! tolerates any well-formed string, including the empty one.

mod cleanup;
mod keywords;
mod quality;
mod structure;

pub use cleanup::TextCleaner;
pub use keywords::{KeywordExtractor, StopwordList, DEFAULT_KEYWORD_COUNT};
pub use quality::{assess_quality, QualityMetrics};
pub use structure::{Section, SentenceTokenizer, StructuredText, TextStats, TextStructurer};

use serde::{Deserialize, Serialize};

/// Fully post-processed extraction output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedText {
    /// Cleaned text.
    pub cleaned_text: String,

    /// Structural decomposition of the cleaned text.
    pub structured: StructuredText,

    /// Top keywords of the cleaned text.
    pub keywords: Vec<String>,

    /// Quality metrics of the cleaned text.
    pub quality: QualityMetrics,
}

/// Runs the full post-processing pipeline over extracted text.
///
/// Built once and reused; each stage's patterns are compiled at
/// construction.
pub struct PostProcessor {
    cleaner: TextCleaner,
    structurer: TextStructurer,
    keywords: KeywordExtractor,
}

impl PostProcessor {
    /// Create a post-processor with default stage configuration.
    pub fn new() -> Self {
        Self {
            cleaner: TextCleaner::new(),
            structurer: TextStructurer::new(),
            keywords: KeywordExtractor::new(),
        }
    }

    /// Create a post-processor with explicit capability variants.
    pub fn with_variants(tokenizer: SentenceTokenizer, stopwords: StopwordList) -> Self {
        Self {
            cleaner: TextCleaner::new(),
            structurer: TextStructurer::with_tokenizer(tokenizer),
            keywords: KeywordExtractor::with_stopwords(stopwords),
        }
    }

    /// Clean extracted text. See [`TextCleaner::clean`].
    pub fn clean_text(&self, text: &str) -> String {
        self.cleaner.clean(text)
    }

    /// Structure text into sections, paragraphs, and sentences.
    pub fn structure_text(&self, text: &str) -> StructuredText {
        self.structurer.structure(text)
    }

    /// Extract up to `count` keywords from text.
    pub fn extract_keywords(&self, text: &str, count: usize) -> Vec<String> {
        self.keywords.extract(text, count)
    }

    /// Assess the quality of text.
    pub fn assess_quality(&self, text: &str) -> QualityMetrics {
        quality::assess_quality(text)
    }

    /// Run all stages over extracted markdown content.
    pub fn process(&self, content: &str) -> ProcessedText {
        let cleaned_text = self.cleaner.clean(content);
        let structured = self.structurer.structure(&cleaned_text);
        let keywords = self.keywords.extract(&cleaned_text, DEFAULT_KEYWORD_COUNT);
        let quality = quality::assess_quality(&cleaned_text);

        ProcessedText {
            cleaned_text,
            structured,
            keywords,
            quality,
        }
    }
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self::new()
    }
}
