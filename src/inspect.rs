//! Page-level measurement types and the document inspection capability.
//!
//! Low-level PDF introspection (opening files, enumerating pages, extracting
//! text blocks and embedded images) is an external capability. This module
//! defines the measurements the classifier consumes and the [`PageSource`]
//! trait that inspection backends implement. [`DocumentSample`] is the
//! in-memory implementation, serializable so measurements can be captured
//! once and replayed offline.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in device units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    /// Create a rectangle from corner coordinates.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Area of the rectangle; degenerate rectangles yield 0.
    pub fn area(&self) -> f64 {
        let w = (self.x1 - self.x0).max(0.0);
        let h = (self.y1 - self.y0).max(0.0);
        w * h
    }
}

/// Kind of content block on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Selectable text content.
    Text,
    /// Raster image content.
    Image,
}

/// A content block with its bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Bounding box of the block.
    pub rect: Rect,
    /// Block kind; only [`BlockKind::Text`] blocks count toward text density.
    pub kind: BlockKind,
}

impl TextBlock {
    /// Create a text block.
    pub fn text(rect: Rect) -> Self {
        Self {
            rect,
            kind: BlockKind::Text,
        }
    }

    /// Create an image block.
    pub fn image(rect: Rect) -> Self {
        Self {
            rect,
            kind: BlockKind::Image,
        }
    }
}

/// Descriptor of an embedded image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Bounding box on the page, when the backend can determine it.
    ///
    /// `None` means the box is unobtainable; the classifier estimates the
    /// image at 50% of the page area in that case.
    pub bbox: Option<Rect>,
}

impl ImageInfo {
    /// Image with a known bounding box.
    pub fn with_bbox(rect: Rect) -> Self {
        Self { bbox: Some(rect) }
    }

    /// Image whose bounding box could not be determined.
    pub fn unknown_bbox() -> Self {
        Self { bbox: None }
    }
}

/// Measurements taken from a single page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeasurements {
    /// Total page area in device units squared.
    pub area: f64,

    /// Content blocks with bounding boxes.
    pub text_blocks: Vec<TextBlock>,

    /// Embedded images on the page.
    pub images: Vec<ImageInfo>,

    /// Raw text content of the page.
    pub raw_text: String,
}

impl PageMeasurements {
    /// Create measurements for a page of the given area.
    pub fn new(area: f64) -> Self {
        Self {
            area,
            ..Default::default()
        }
    }

    /// Add a text block.
    pub fn with_text_block(mut self, rect: Rect) -> Self {
        self.text_blocks.push(TextBlock::text(rect));
        self
    }

    /// Add an image.
    pub fn with_image(mut self, image: ImageInfo) -> Self {
        self.images.push(image);
        self
    }

    /// Set the raw text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.raw_text = text.into();
        self
    }

    /// Sum of text-block areas, counting only [`BlockKind::Text`] blocks.
    pub fn text_area(&self) -> f64 {
        self.text_blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Text)
            .map(|b| b.rect.area())
            .sum()
    }
}

/// A source of page measurements for classification.
///
/// Implemented by [`DocumentSample`] for in-memory measurements and by
/// inspection backends that read pages on demand. Backends are fallible;
/// the classifier maps any error to the scanned verdict.
pub trait PageSource {
    /// Number of pages available.
    fn page_count(&self) -> usize;

    /// Measurements for the page at `index` (0-based).
    fn page(&self, index: usize) -> Result<PageMeasurements>;
}

/// An ordered, in-memory sequence of page measurements.
///
/// Serializable, so a host with real PDF introspection can dump measurements
/// to JSON and the heuristic can be evaluated or tuned offline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSample {
    /// Page measurements, in document order.
    pub pages: Vec<PageMeasurements>,
}

impl DocumentSample {
    /// Create an empty sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sample from pages.
    pub fn from_pages(pages: Vec<PageMeasurements>) -> Self {
        Self { pages }
    }

    /// Add a page to the sample.
    pub fn add_page(&mut self, page: PageMeasurements) {
        self.pages.push(page);
    }

    /// Parse a sample from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the sample to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl PageSource for DocumentSample {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<PageMeasurements> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(Error::PageOutOfRange(index, self.pages.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_area() {
        let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(rect.area(), 50.0);
    }

    #[test]
    fn test_rect_area_degenerate() {
        // Inverted coordinates clamp to zero instead of going negative
        let rect = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(rect.area(), 0.0);
    }

    #[test]
    fn test_text_area_ignores_image_blocks() {
        let mut page = PageMeasurements::new(100.0).with_text_block(Rect::new(0.0, 0.0, 2.0, 2.0));
        page.text_blocks
            .push(TextBlock::image(Rect::new(0.0, 0.0, 50.0, 50.0)));
        assert_eq!(page.text_area(), 4.0);
    }

    #[test]
    fn test_sample_page_out_of_range() {
        let sample = DocumentSample::from_pages(vec![PageMeasurements::new(100.0)]);
        assert!(sample.page(0).is_ok());
        assert!(matches!(
            sample.page(3),
            Err(Error::PageOutOfRange(3, 1))
        ));
    }

    #[test]
    fn test_sample_json_round_trip() {
        let sample = DocumentSample::from_pages(vec![PageMeasurements::new(484704.0)
            .with_text_block(Rect::new(50.0, 50.0, 550.0, 700.0))
            .with_image(ImageInfo::unknown_bbox())
            .with_text("Hello world")]);

        let json = sample.to_json().unwrap();
        let restored = DocumentSample::from_json(&json).unwrap();
        assert_eq!(restored.pages.len(), 1);
        assert_eq!(restored.pages[0].raw_text, "Hello world");
        assert!(restored.pages[0].images[0].bbox.is_none());
    }
}
