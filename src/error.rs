//! Error types for the docroute library.

use std::io;
use thiserror::Error;

/// Result type alias for docroute operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during classification and post-processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A page or image could not be inspected.
    ///
    /// The classifier catches this internally and falls back to
    /// [`Verdict::Scanned`](crate::classify::Verdict::Scanned); it only
    /// surfaces where a caller inspects pages directly.
    #[error("Document inspection error: {0}")]
    Inspection(String),

    /// Page index is out of range.
    #[error("Page {0} is out of range (sample has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// The conversion capability failed.
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// No converter is registered for the given file extension.
    #[error("No converter for extension: {0}")]
    UnsupportedExtension(String),

    /// Error serializing or deserializing a document sample or result.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedExtension("docx".into());
        assert_eq!(err.to_string(), "No converter for extension: docx");

        let err = Error::PageOutOfRange(7, 3);
        assert_eq!(
            err.to_string(),
            "Page 7 is out of range (sample has 3 pages)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
