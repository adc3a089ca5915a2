//! Document-type classification.
//!
//! Decides whether a document carries native (selectable) text or scanned
//! (image-based) content, from three independent signal groups: text density,
//! text quality, and image coverage. Single-signal thresholds are fragile
//! (one full-page diagram trips density alone), so the rules are layered: a
//! strong negative signal overrides an otherwise-positive density, and a
//! native verdict requires two consistent positive signals.
//!
//! # Example
//!
//! ```
//! use docroute::classify::{Classifier, Verdict};
//! use docroute::inspect::{DocumentSample, PageMeasurements, Rect};
//!
//! let sample = DocumentSample::from_pages(vec![PageMeasurements::new(100.0)
//!     .with_text_block(Rect::new(0.0, 0.0, 12.0, 1.0))
//!     .with_text("This page is mostly readable prose with spaces.")]);
//!
//! let verdict = Classifier::default().identify_type(&sample);
//! assert_eq!(verdict, Verdict::Native);
//! ```

mod signals;
mod thresholds;

pub use signals::{
    image_coverage, text_density, text_quality, Signals, DENSITY_SAMPLE_PAGES,
    QUALITY_SAMPLE_PAGES,
};
pub use thresholds::Thresholds;

use crate::error::Result;
use crate::inspect::PageSource;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Classification verdict for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Text stored as selectable character data.
    Native,
    /// Page content stored as raster images; OCR is required.
    Scanned,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Native => write!(f, "NATIVE"),
            Verdict::Scanned => write!(f, "SCANNED"),
        }
    }
}

/// Heuristic document-type classifier.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    /// Create a classifier with custom thresholds.
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// The thresholds in effect.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify a document as native or scanned.
    ///
    /// Never fails: any inspection error maps to [`Verdict::Scanned`], the
    /// safe default, since OCR-based handling is always viable while
    /// native-text handling on a scanned document is not.
    pub fn identify_type<S: PageSource>(&self, source: &S) -> Verdict {
        match self.classify(source) {
            Ok((verdict, _)) => verdict,
            Err(err) => {
                warn!("document inspection failed, defaulting to SCANNED: {err}");
                Verdict::Scanned
            }
        }
    }

    /// Classify a document, returning the verdict together with the computed
    /// signals for telemetry.
    pub fn identify_with_signals<S: PageSource>(&self, source: &S) -> (Verdict, Signals) {
        match self.classify(source) {
            Ok(result) => result,
            Err(err) => {
                warn!("document inspection failed, defaulting to SCANNED: {err}");
                (Verdict::Scanned, Signals::default())
            }
        }
    }

    fn classify<S: PageSource>(&self, source: &S) -> Result<(Verdict, Signals)> {
        if source.page_count() == 0 {
            return Ok((Verdict::Scanned, Signals::default()));
        }

        let Some(text_density) = signals::text_density(source)? else {
            // Zero sampled page area: nothing to measure against.
            return Ok((Verdict::Scanned, Signals::default()));
        };

        let text_quality = signals::text_quality(source)?;
        let (images_area_ratio, image_count, avg_images_per_page) =
            signals::image_coverage(source)?;

        let computed = Signals {
            text_density,
            text_quality,
            images_area_ratio,
            image_count,
            avg_images_per_page,
        };
        debug!(
            "signals: density={text_density:.2}% quality={text_quality:.3} \
             image_ratio={images_area_ratio:.3} images={image_count}"
        );

        Ok((self.decide(&computed), computed))
    }

    /// Apply the decision rules in fixed priority order; first match wins.
    fn decide(&self, s: &Signals) -> Verdict {
        let t = &self.thresholds;

        // 1. Too little text presence to be a native document.
        if s.text_density < t.min_density {
            return Verdict::Scanned;
        }

        // 2. Dense but garbled text is the OCR-artifact signature.
        if s.text_density > t.artifact_density && s.text_quality < t.artifact_quality {
            return Verdict::Scanned;
        }

        // 3. Page dominated by image content.
        if s.images_area_ratio > t.max_image_ratio {
            return Verdict::Scanned;
        }

        // 4. Very high density with acceptable quality.
        if s.text_density > t.high_density && s.text_quality > t.high_density_quality {
            return Verdict::Native;
        }

        // 5. Moderate density with good quality.
        if s.text_density > t.moderate_density && s.text_quality > t.moderate_density_quality {
            return Verdict::Native;
        }

        // Default to the safer, OCR-capable path.
        Verdict::Scanned
    }
}
