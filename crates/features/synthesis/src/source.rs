//! Boundary to external building datasets.

use crate::error::Result;
use fp_domain::{LonLat, Region, Ring};
use std::borrow::Cow;
use std::fmt;

/// A row as delivered by an external dataset, before reshaping.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBuildingRow {
    pub latitude: f64,
    pub longitude: f64,
    pub area_in_meters: f64,
    /// Either a fraction (`0.0..=1.0`) or a percentage.
    pub confidence: f64,
    /// Exterior ring of the footprint polygon.
    pub geometry: Ring,
}

impl RawBuildingRow {
    #[must_use]
    pub const fn center(&self) -> LonLat {
        LonLat::new(self.longitude, self.latitude)
    }
}

/// Something that can list real buildings for a region.
pub trait BuildingSource: fmt::Debug {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Rows for `region`. Implementations may return rows outside it; the
    /// assembler filters them.
    ///
    /// # Errors
    /// [`SynthesisError::Unavailable`](crate::SynthesisError::Unavailable) when
    /// the dataset cannot be read.
    fn fetch(&self, region: &Region) -> Result<Vec<RawBuildingRow>>;
}

/// Outcome of the startup probe for an external dataset.
#[derive(Debug)]
pub enum SourceCapability {
    Available(Box<dyn BuildingSource>),
    Unavailable(Cow<'static, str>),
}

impl SourceCapability {
    pub fn available(source: impl BuildingSource + 'static) -> Self {
        Self::Available(Box::new(source))
    }

    pub fn unavailable(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Unavailable(reason.into())
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Confidence as a whole percentage. Values up to `1.0` are read as fractions.
#[must_use]
pub fn normalize_confidence(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    let percent = if raw <= 1.0 { raw * 100.0 } else { raw };
    percent.round().clamp(0.0, 100.0) as u8
}
