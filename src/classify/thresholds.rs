//! Decision thresholds for the document-type classifier.

/// Tunable thresholds for the classification rules.
///
/// The defaults are the production values; they are exposed as a struct so
/// the decision policy can be tested and tuned independently of the
/// rule evaluation order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Text density (percent) below which a document is scanned.
    pub min_density: f64,

    /// Density above which poor text quality indicates OCR artifacts.
    pub artifact_density: f64,

    /// Quality below which dense text is treated as garbled.
    pub artifact_quality: f64,

    /// Image-to-page area ratio above which the page is image-dominated.
    pub max_image_ratio: f64,

    /// Density above which moderate quality is enough for a native verdict.
    pub high_density: f64,

    /// Quality floor paired with `high_density`.
    pub high_density_quality: f64,

    /// Density floor paired with `moderate_density_quality`.
    pub moderate_density: f64,

    /// Quality floor paired with `moderate_density`.
    pub moderate_density_quality: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_density: 2.0,
            artifact_density: 5.0,
            artifact_quality: 0.3,
            max_image_ratio: 0.7,
            high_density: 10.0,
            high_density_quality: 0.4,
            moderate_density: 3.0,
            moderate_density_quality: 0.5,
        }
    }
}

impl Thresholds {
    /// Create thresholds with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum text density.
    pub fn with_min_density(mut self, density: f64) -> Self {
        self.min_density = density;
        self
    }

    /// Set the image-dominance ratio.
    pub fn with_max_image_ratio(mut self, ratio: f64) -> Self {
        self.max_image_ratio = ratio;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = Thresholds::default();
        assert_eq!(t.min_density, 2.0);
        assert_eq!(t.artifact_density, 5.0);
        assert_eq!(t.max_image_ratio, 0.7);
        assert_eq!(t.moderate_density_quality, 0.5);
    }

    #[test]
    fn test_thresholds_builder() {
        let t = Thresholds::new()
            .with_min_density(1.5)
            .with_max_image_ratio(0.8);
        assert_eq!(t.min_density, 1.5);
        assert_eq!(t.max_image_ratio, 0.8);
    }
}
