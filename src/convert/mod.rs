//! Document conversion capability.
//!
//! The heavy document-to-markdown engine is an external collaborator; this
//! module defines the contract it is consumed through. Converters for
//! different formats register in a [`ConverterRegistry`], which dispatches by
//! file extension.
//!
//! # Example
//!
//! ```no_run
//! use docroute::convert::{ConverterRegistry, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> docroute::Result<()> {
//!     let registry = ConverterRegistry::new();
//!     // registry.register(Arc::new(MyEngineConverter::new()));
//!     let result = registry.convert(Path::new("document.pdf"), &ConvertOptions::default())?;
//!     println!("{}", result.markdown);
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Options passed to the conversion capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Whether the engine should run OCR on image content.
    pub ocr_enabled: bool,

    /// Trade extraction fidelity for speed (reduced image processing,
    /// no table-structure analysis).
    pub fast_mode: bool,
}

impl ConvertOptions {
    /// Create options with the defaults (OCR on, fast mode on).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable OCR.
    pub fn with_ocr(mut self, enabled: bool) -> Self {
        self.ocr_enabled = enabled;
        self
    }

    /// Enable or disable fast mode.
    pub fn with_fast_mode(mut self, fast: bool) -> Self {
        self.fast_mode = fast;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            ocr_enabled: true,
            fast_mode: true,
        }
    }
}

/// Result of a document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Markdown rendition of the document.
    pub markdown: String,

    /// Structured document tree, opaque to this crate.
    pub tree: serde_json::Value,

    /// Tables extracted by the engine, opaque to this crate.
    pub tables: Vec<serde_json::Value>,
}

impl ConvertResult {
    /// Create a result with markdown content and an empty tree.
    pub fn from_markdown(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            tree: serde_json::Value::Null,
            tables: Vec::new(),
        }
    }

    /// Set the document tree.
    pub fn with_tree(mut self, tree: serde_json::Value) -> Self {
        self.tree = tree;
        self
    }

    /// Set the extracted tables.
    pub fn with_tables(mut self, tables: Vec<serde_json::Value>) -> Self {
        self.tables = tables;
        self
    }
}

/// Trait for document converters.
///
/// Implement this trait to plug a conversion engine into the pipeline.
pub trait DocumentConverter: Send + Sync {
    /// Supported file extensions, lowercase without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Name of this converter.
    fn name(&self) -> &str;

    /// Convert the file at `path`.
    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult>;

    /// Check if this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry of document converters, keyed by file extension.
///
/// Built once at the composition root and borrowed per call; registration is
/// not expected after construction, so no interior locking is needed.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn DocumentConverter>>,
}

impl ConverterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a converter for all its supported extensions.
    pub fn register(&mut self, converter: Arc<dyn DocumentConverter>) {
        for ext in converter.supported_extensions() {
            self.converters
                .insert(ext.to_lowercase(), converter.clone());
        }
    }

    /// Get a converter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.converters.get(&ext.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.converters.contains_key(&ext.to_lowercase())
    }

    /// All supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.converters.keys().map(|s| s.as_str()).collect()
    }

    /// Convert a file using the converter registered for its extension.
    pub fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other("File has no extension".into()))?;

        let converter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedExtension(ext.to_string()))?;

        converter.convert(path, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoConverter;

    impl DocumentConverter for EchoConverter {
        fn supported_extensions(&self) -> &[&str] {
            &["pdf"]
        }

        fn name(&self) -> &str {
            "echo"
        }

        fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
            Ok(ConvertResult::from_markdown(format!(
                "# {} (ocr: {})",
                path.display(),
                options.ocr_enabled
            )))
        }
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new().with_ocr(false).with_fast_mode(false);
        assert!(!options.ocr_enabled);
        assert!(!options.fast_mode);

        let defaults = ConvertOptions::default();
        assert!(defaults.ocr_enabled);
        assert!(defaults.fast_mode);
    }

    #[test]
    fn test_registry_dispatch() {
        let mut registry = ConverterRegistry::new();
        registry.register(Arc::new(EchoConverter));

        assert!(registry.supports("pdf"));
        assert!(registry.supports("PDF"));
        assert!(!registry.supports("docx"));

        let result = registry
            .convert(Path::new("doc.pdf"), &ConvertOptions::default())
            .unwrap();
        assert!(result.markdown.contains("doc.pdf"));
    }

    #[test]
    fn test_registry_unknown_extension() {
        let registry = ConverterRegistry::new();
        let err = registry
            .convert(Path::new("doc.docx"), &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension(_)));
    }

    #[test]
    fn test_registry_no_extension() {
        let registry = ConverterRegistry::new();
        let err = registry
            .convert(Path::new("noext"), &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn test_supports_extension_case_insensitive() {
        let converter = EchoConverter;
        assert!(converter.supports_extension("pdf"));
        assert!(converter.supports_extension("PDF"));
        assert!(!converter.supports_extension("png"));
    }
}
