//! # docroute
//!
//! Classifies PDF documents as containing native (selectable) text or
//! scanned (image-based) content, routes them through a pluggable conversion
//! capability, and post-processes extracted text into cleaned, structured,
//! and quality-scored output.
//!
//! ## Quick Start
//!
//! ```
//! use docroute::{classify_sample, post_process, Verdict};
//! use docroute::inspect::{DocumentSample, PageMeasurements, Rect};
//!
//! // Classify from page measurements
//! let sample = DocumentSample::from_pages(vec![PageMeasurements::new(100.0)
//!     .with_text_block(Rect::new(0.0, 0.0, 12.0, 1.0))
//!     .with_text("Readable body text with ordinary words and spaces.")]);
//! assert_eq!(classify_sample(&sample), Verdict::Native);
//!
//! // Post-process extracted content
//! let processed = post_process("The  extracted   text with artifacts.");
//! assert_eq!(processed.cleaned_text, "The extracted text with artifacts.");
//! ```
//!
//! ## Architecture
//!
//! - **Classifier** ([`classify`]): multi-signal heuristic over sampled page
//!   measurements; never fails, defaults to [`Verdict::Scanned`].
//! - **Post-processor** ([`postprocess`]): cleaning, sectioning, keyword
//!   extraction, and quality scoring; pure functions of the input text.
//! - **Conversion capability** ([`convert`]): trait + registry for the
//!   external document-to-markdown engine; this crate ships no engine.
//! - **Pipeline** ([`pipeline`]): composition root wiring the three together.

pub mod classify;
pub mod convert;
pub mod error;
pub mod inspect;
pub mod pipeline;
pub mod postprocess;

// Re-export commonly used types
pub use classify::{Classifier, Signals, Thresholds, Verdict};
pub use convert::{ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter};
pub use error::{Error, Result};
pub use inspect::{DocumentSample, ImageInfo, PageMeasurements, PageSource, Rect, TextBlock};
pub use pipeline::{Pipeline, PipelineResult};
pub use postprocess::{
    PostProcessor, ProcessedText, QualityMetrics, SentenceTokenizer, StopwordList, StructuredText,
};

/// Classify a document sample with default thresholds.
///
/// # Example
///
/// ```
/// use docroute::{classify_sample, Verdict};
/// use docroute::inspect::DocumentSample;
///
/// // An empty sample has nothing to measure and defaults to scanned
/// assert_eq!(classify_sample(&DocumentSample::new()), Verdict::Scanned);
/// ```
pub fn classify_sample<S: PageSource>(source: &S) -> Verdict {
    Classifier::default().identify_type(source)
}

/// Run the full post-processing pipeline over extracted content with default
/// configuration.
pub fn post_process(content: &str) -> ProcessedText {
    PostProcessor::new().process(content)
}

/// Clean extracted text with the default cleaner.
pub fn clean_text(text: &str) -> String {
    postprocess::TextCleaner::new().clean(text)
}

/// Structure text into sections, paragraphs, and sentences with the default
/// tokenizer.
pub fn structure_text(text: &str) -> StructuredText {
    postprocess::TextStructurer::new().structure(text)
}

/// Extract up to `count` keywords with the default stopword list.
pub fn extract_keywords(text: &str, count: usize) -> Vec<String> {
    postprocess::KeywordExtractor::new().extract(text, count)
}

/// Assess text quality.
pub fn assess_quality(text: &str) -> QualityMetrics {
    postprocess::assess_quality(text)
}

/// Builder for a configured processing pipeline.
///
/// # Example
///
/// ```
/// use docroute::{DocRoute, Thresholds, SentenceTokenizer, StopwordList};
///
/// let pipeline = DocRoute::new()
///     .with_thresholds(Thresholds::default())
///     .with_tokenizer(SentenceTokenizer::Rule)
///     .with_stopwords(StopwordList::Extended)
///     .build();
/// ```
pub struct DocRoute {
    thresholds: Thresholds,
    tokenizer: SentenceTokenizer,
    stopwords: StopwordList,
    convert_options: ConvertOptions,
}

impl DocRoute {
    /// Create a builder with defaults.
    pub fn new() -> Self {
        Self {
            thresholds: Thresholds::default(),
            tokenizer: SentenceTokenizer::default(),
            stopwords: StopwordList::default(),
            convert_options: ConvertOptions::default(),
        }
    }

    /// Set classifier thresholds.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the sentence tokenizer variant.
    pub fn with_tokenizer(mut self, tokenizer: SentenceTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set the stopword list variant.
    pub fn with_stopwords(mut self, stopwords: StopwordList) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Disable OCR in the conversion options.
    pub fn without_ocr(mut self) -> Self {
        self.convert_options = self.convert_options.with_ocr(false);
        self
    }

    /// Set the conversion options.
    pub fn with_convert_options(mut self, options: ConvertOptions) -> Self {
        self.convert_options = options;
        self
    }

    /// Build the pipeline.
    pub fn build(self) -> Pipeline {
        Pipeline::new()
            .with_classifier(Classifier::new(self.thresholds))
            .with_post_processor(PostProcessor::with_variants(self.tokenizer, self.stopwords))
            .with_convert_options(self.convert_options)
    }
}

impl Default for DocRoute {
    fn default() -> Self {
        Self::new()
    }
}
