//! Signal computation over sampled pages.
//!
//! Three independent signal groups feed the classifier: text density, text
//! quality, and image coverage. Each is computed over a small prefix of the
//! document; sampling only the first pages bounds cost on large documents at
//! the risk of misclassifying documents whose opening pages are
//! unrepresentative (a scanned cover on an otherwise native document). That
//! is a known approximation, not a bug.

use crate::error::Result;
use crate::inspect::PageSource;

/// Pages sampled for the text density signal.
pub const DENSITY_SAMPLE_PAGES: usize = 5;

/// Pages sampled for text quality and image coverage.
pub const QUALITY_SAMPLE_PAGES: usize = 3;

/// Weight of the alphanumeric ratio in the quality score.
const ALNUM_WEIGHT: f64 = 0.7;

/// Weight of the space ratio in the quality score.
const SPACE_WEIGHT: f64 = 0.3;

/// Fraction of page area assumed for an image with no obtainable bbox.
const UNKNOWN_IMAGE_COVERAGE: f64 = 0.5;

/// Computed signal values for a document, exposed for telemetry and tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Signals {
    /// Text-bearing area as a percentage of sampled page area.
    pub text_density: f64,

    /// Text quality score in [0, 1].
    pub text_quality: f64,

    /// Image area as a fraction of sampled page area.
    pub images_area_ratio: f64,

    /// Total images seen in the sampled pages (informational).
    pub image_count: usize,

    /// Average images per sampled page (informational).
    pub avg_images_per_page: f64,
}

/// Text density over up to [`DENSITY_SAMPLE_PAGES`] pages, as a percentage.
///
/// Returns `None` when the sampled page area sums to zero, which the caller
/// must treat as a scanned document.
pub fn text_density<S: PageSource>(source: &S) -> Result<Option<f64>> {
    let pages_to_check = source.page_count().min(DENSITY_SAMPLE_PAGES);

    let mut total_text_area = 0.0;
    let mut total_page_area = 0.0;

    for i in 0..pages_to_check {
        let page = source.page(i)?;
        total_page_area += page.area;
        total_text_area += page.text_area();
    }

    if total_page_area == 0.0 {
        return Ok(None);
    }

    Ok(Some(total_text_area / total_page_area * 100.0))
}

/// Text quality score over up to [`QUALITY_SAMPLE_PAGES`] pages.
///
/// Weighted blend of the alphanumeric-character ratio and the space ratio:
/// real prose is mostly letters separated by spaces, while OCR artifacts and
/// garbled encodings skew toward symbols. Zero sampled characters scores 0.
pub fn text_quality<S: PageSource>(source: &S) -> Result<f64> {
    let pages_to_check = source.page_count().min(QUALITY_SAMPLE_PAGES);

    let mut total_chars = 0usize;
    let mut alnum_chars = 0usize;
    let mut space_chars = 0usize;

    for i in 0..pages_to_check {
        let page = source.page(i)?;
        for ch in page.raw_text.chars() {
            total_chars += 1;
            if ch.is_alphanumeric() {
                alnum_chars += 1;
            }
            if ch == ' ' {
                space_chars += 1;
            }
        }
    }

    if total_chars == 0 {
        return Ok(0.0);
    }

    let alnum_ratio = alnum_chars as f64 / total_chars as f64;
    let space_ratio = space_chars as f64 / total_chars as f64;

    Ok(alnum_ratio * ALNUM_WEIGHT + space_ratio * SPACE_WEIGHT)
}

/// Image coverage metrics over up to [`QUALITY_SAMPLE_PAGES`] pages.
///
/// An image whose bounding box cannot be determined is estimated at
/// [`UNKNOWN_IMAGE_COVERAGE`] of its page's area.
pub fn image_coverage<S: PageSource>(source: &S) -> Result<(f64, usize, f64)> {
    let pages_to_check = source.page_count().min(QUALITY_SAMPLE_PAGES);

    let mut image_count = 0usize;
    let mut total_images_area = 0.0;
    let mut total_page_area = 0.0;

    for i in 0..pages_to_check {
        let page = source.page(i)?;
        total_page_area += page.area;
        image_count += page.images.len();

        for image in &page.images {
            total_images_area += match image.bbox {
                Some(bbox) => bbox.area(),
                None => page.area * UNKNOWN_IMAGE_COVERAGE,
            };
        }
    }

    let ratio = if total_page_area > 0.0 {
        total_images_area / total_page_area
    } else {
        0.0
    };
    let avg_per_page = if pages_to_check > 0 {
        image_count as f64 / pages_to_check as f64
    } else {
        0.0
    };

    Ok((ratio, image_count, avg_per_page))
}
