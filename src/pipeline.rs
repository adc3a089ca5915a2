//! End-to-end document processing pipeline.
//!
//! Composition root tying the classifier, the conversion capability, and the
//! post-processor together. The pipeline owns its converter registry and
//! processing stages; they are constructed once and borrowed per call, so
//! there is no lazily-initialized shared state to guard.

use crate::classify::{Classifier, Signals, Verdict};
use crate::convert::{ConvertOptions, ConverterRegistry, DocumentConverter};
use crate::error::Result;
use crate::inspect::PageSource;
use crate::postprocess::{PostProcessor, ProcessedText};
use log::info;
use std::path::Path;
use std::sync::Arc;

/// Result of running a document through the full pipeline.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Classification verdict. Advisory: both verdicts currently route
    /// through the same conversion call with OCR enabled, so this is
    /// telemetry rather than a branch.
    pub verdict: Verdict,

    /// Signals the verdict was derived from.
    pub signals: Signals,

    /// Markdown produced by the conversion capability.
    pub markdown: String,

    /// Structured document tree from the conversion capability.
    pub tree: serde_json::Value,

    /// Post-processed text, structure, keywords, and quality.
    pub processed: ProcessedText,
}

/// Document processing pipeline.
pub struct Pipeline {
    classifier: Classifier,
    registry: ConverterRegistry,
    post: PostProcessor,
    convert_options: ConvertOptions,
}

impl Pipeline {
    /// Create a pipeline with default stages and an empty registry.
    ///
    /// Register a conversion engine before processing documents.
    pub fn new() -> Self {
        Self {
            classifier: Classifier::default(),
            registry: ConverterRegistry::new(),
            post: PostProcessor::new(),
            convert_options: ConvertOptions::default(),
        }
    }

    /// Set the classifier.
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the conversion options used for every document.
    pub fn with_convert_options(mut self, options: ConvertOptions) -> Self {
        self.convert_options = options;
        self
    }

    /// Set the post-processor.
    pub fn with_post_processor(mut self, post: PostProcessor) -> Self {
        self.post = post;
        self
    }

    /// Register a conversion engine.
    pub fn register_converter(&mut self, converter: Arc<dyn DocumentConverter>) {
        self.registry.register(converter);
    }

    /// The classifier in use.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classify a document without converting it.
    pub fn classify<S: PageSource>(&self, source: &S) -> Verdict {
        self.classifier.identify_type(source)
    }

    /// Process a document end to end: classify, convert, post-process.
    ///
    /// `source` supplies the page measurements for classification and `path`
    /// is handed to the conversion capability. The verdict does not change
    /// which converter runs or its options; OCR stays enabled so scanned
    /// content is always recoverable.
    pub fn process<S: PageSource>(&self, path: &Path, source: &S) -> Result<PipelineResult> {
        let (verdict, signals) = self.classifier.identify_with_signals(source);
        info!("{} classified as {verdict} (advisory)", path.display());

        let converted = self.registry.convert(path, &self.convert_options)?;
        let processed = self.post.process(&converted.markdown);

        Ok(PipelineResult {
            verdict,
            signals,
            markdown: converted.markdown,
            tree: converted.tree,
            processed,
        })
    }

    /// Post-process already-extracted content without conversion.
    pub fn post_process(&self, content: &str) -> ProcessedText {
        self.post.process(content)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
