//! Integration tests for the end-to-end pipeline.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use docroute::convert::{ConvertOptions, ConvertResult, DocumentConverter};
use docroute::inspect::{DocumentSample, PageMeasurements, Rect};
use docroute::{DocRoute, Error, Pipeline, Result, Thresholds, Verdict};

/// Converter that reads the file and wraps its content in markdown,
/// recording the options it was called with.
struct FileEchoConverter;

impl DocumentConverter for FileEchoConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf", "txt"]
    }

    fn name(&self) -> &str {
        "file-echo"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let content = std::fs::read_to_string(path)?;
        Ok(ConvertResult::from_markdown(content).with_tree(serde_json::json!({
            "ocr": options.ocr_enabled,
            "fast": options.fast_mode,
        })))
    }
}

fn native_sample() -> DocumentSample {
    DocumentSample::from_pages(vec![PageMeasurements::new(100.0)
        .with_text_block(Rect::new(0.0, 0.0, 12.0, 1.0))
        .with_text("Perfectly ordinary selectable text with many words on the page")])
}

#[test]
fn pipeline_processes_a_file_end_to_end() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(
        file,
        "SUMMARY\n\nThe document pipeline extracts and scores content."
    )
    .unwrap();

    let mut pipeline = Pipeline::new();
    pipeline.register_converter(Arc::new(FileEchoConverter));

    let result = pipeline.process(file.path(), &native_sample()).unwrap();

    assert_eq!(result.verdict, Verdict::Native);
    assert!(result.markdown.contains("SUMMARY"));
    assert!(result.processed.quality.overall > 0.0);
    assert!(result
        .processed
        .keywords
        .contains(&"pipeline".to_string()));
}

#[test]
fn pipeline_keeps_ocr_enabled_for_both_verdicts() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "scanned page content").unwrap();

    let mut pipeline = Pipeline::new();
    pipeline.register_converter(Arc::new(FileEchoConverter));

    // Scanned verdict (empty sample) and native verdict both convert with
    // the same OCR-enabled options.
    for sample in [DocumentSample::new(), native_sample()] {
        let result = pipeline.process(file.path(), &sample).unwrap();
        assert_eq!(result.tree["ocr"], serde_json::json!(true));
    }
}

#[test]
fn pipeline_surfaces_conversion_errors() {
    let mut pipeline = Pipeline::new();
    pipeline.register_converter(Arc::new(FileEchoConverter));

    // Registered extension but missing file: the converter's I/O error
    // propagates as a single failure
    let err = pipeline
        .process(Path::new("/nonexistent/file.pdf"), &native_sample())
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn builder_configures_the_whole_pipeline() {
    let mut pipeline = DocRoute::new()
        .with_thresholds(Thresholds::new().with_min_density(1.0))
        .without_ocr()
        .build();
    pipeline.register_converter(Arc::new(FileEchoConverter));

    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "body text for the builder test").unwrap();

    let result = pipeline.process(file.path(), &native_sample()).unwrap();
    assert_eq!(result.tree["ocr"], serde_json::json!(false));
}

#[test]
fn classify_only_needs_no_converter() {
    let pipeline = Pipeline::new();
    assert_eq!(pipeline.classify(&native_sample()), Verdict::Native);
}

#[test]
fn post_process_only_needs_no_converter() {
    let pipeline = Pipeline::new();
    let processed = pipeline.post_process("Standalone   text to clean up.");
    assert_eq!(processed.cleaned_text, "Standalone text to clean up.");
}
