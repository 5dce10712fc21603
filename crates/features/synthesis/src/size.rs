//! Footprint area distribution.

use rand::Rng;
use std::ops::Range;

/// `(cumulative probability, area range in m²)`; the last band takes the rest.
const SIZE_BANDS: [(f64, Range<f64>); 4] = [
    (0.60, 50.0..200.0),
    (0.85, 200.0..500.0),
    (0.95, 500.0..1000.0),
    (1.00, 1000.0..2500.0),
];

/// Draws footprint areas: mostly small dwellings, a thin tail of large sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeSampler;

impl SizeSampler {
    /// Area in m², always within `[50, 2500)`.
    pub fn sample_area<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let band = size_band(rng.gen_range(0.0..1.0));
        rng.gen_range(band)
    }
}

/// Area range selected by a uniform draw `r` in `[0, 1)`.
#[must_use]
pub fn size_band(r: f64) -> Range<f64> {
    SIZE_BANDS
        .iter()
        .find(|(upper, _)| r < *upper)
        .map_or(1000.0..2500.0, |(_, range)| range.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn band_thresholds() {
        assert_eq!(size_band(0.0), 50.0..200.0);
        assert_eq!(size_band(0.599_999), 50.0..200.0);
        assert_eq!(size_band(0.60), 200.0..500.0);
        assert_eq!(size_band(0.85), 500.0..1000.0);
        assert_eq!(size_band(0.95), 1000.0..2500.0);
        assert_eq!(size_band(0.999_999), 1000.0..2500.0);
    }

    #[test]
    fn distribution_is_skewed_small() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let areas: Vec<f64> = (0..20_000).map(|_| SizeSampler.sample_area(&mut rng)).collect();

        assert!(areas.iter().all(|a| (50.0..2500.0).contains(a)));
        let small = areas.iter().filter(|a| **a < 200.0).count() as f64 / areas.len() as f64;
        assert!((0.57..0.63).contains(&small), "small share was {small}");
    }
}
