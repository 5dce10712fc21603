//! Area-band classification.
//!
//! Bands are half-open `[previous.below, below)` and evaluated in ascending
//! order, so an area sitting exactly on a boundary belongs to the band that
//! starts there.

use crate::error::{Result, SynthesisError};
use fp_domain::Category;
use fp_domain::config::{ClassificationBand, ClassificationConfig};
use rand::Rng;

/// Validated band table.
#[derive(Debug, Clone)]
pub struct Classifier {
    bounded: Vec<ClassificationBand>,
    unbounded: ClassificationBand,
}

impl Classifier {
    /// # Errors
    /// [`SynthesisError::Configuration`] unless the table has at least one band,
    /// finite strictly ascending bounds, an unbounded last band only, and
    /// `base + spread <= 100` everywhere.
    pub fn new(config: &ClassificationConfig) -> Result<Self> {
        let Some((last, rest)) = config.bands.split_last() else {
            return Err(SynthesisError::configuration("classification needs at least one band"));
        };

        if last.below.is_some() {
            return Err(SynthesisError::configuration("the last classification band must be unbounded"));
        }

        let mut previous = f64::NEG_INFINITY;
        for band in rest {
            let Some(below) = band.below else {
                return Err(SynthesisError::configuration("only the last classification band may be unbounded"));
            };
            if !below.is_finite() || below <= previous {
                return Err(SynthesisError::configuration(format!(
                    "classification bounds must be finite and strictly ascending (got {below} after {previous})"
                )));
            }
            previous = below;
        }

        if let Some(band) = config.bands.iter().find(|b| b.max_confidence() > 100) {
            return Err(SynthesisError::configuration(format!(
                "confidence range of the {} band exceeds 100 ({})",
                band.category,
                band.max_confidence()
            )));
        }

        Ok(Self { bounded: rest.to_vec(), unbounded: last.clone() })
    }

    /// First band whose upper bound exceeds `area`.
    #[must_use]
    pub fn band_for(&self, area: f64) -> &ClassificationBand {
        self.bounded
            .iter()
            .find(|band| band.below.is_some_and(|below| area < below))
            .unwrap_or(&self.unbounded)
    }

    /// Deterministic half of classification.
    #[must_use]
    pub fn category_for(&self, area: f64) -> Category {
        self.band_for(area).category
    }

    /// Category plus a confidence drawn uniformly from the band's inclusive range.
    pub fn classify<R: Rng + ?Sized>(&self, area: f64, rng: &mut R) -> (Category, u8) {
        let band = self.band_for(area);
        let offset = rng.gen_range(0..=band.confidence_spread);
        (band.category, band.base_confidence + offset)
    }
}
