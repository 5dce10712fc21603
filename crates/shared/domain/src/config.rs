use crate::category::Category;
use crate::cluster::ClusterTable;
use crate::geo::Region;
use serde::{Deserialize, Serialize};

/// Everything one generation run needs; immutable for the duration of the run.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub region: Region,
    pub clusters: ClusterTable,
    pub classification: ClassificationConfig,
    pub valuation: ValuationConfig,
    pub polygon: PolygonConfig,
    pub labels: DatasetLabels,
}

/// Area bands mapping a footprint to a category and a confidence range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Evaluated in order; the first band whose `below` exceeds the area wins.
    pub bands: Vec<ClassificationBand>,
}

/// Half-open band `[previous.below, below)`. `below: None` means unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationBand {
    #[serde(default)]
    pub below: Option<f64>,
    pub category: Category,
    pub base_confidence: u8,
    /// Inclusive width of the confidence range above `base_confidence`.
    pub confidence_spread: u8,
}

impl ClassificationBand {
    #[must_use]
    pub const fn new(
        below: Option<f64>,
        category: Category,
        base_confidence: u8,
        confidence_spread: u8,
    ) -> Self {
        Self { below, category, base_confidence, confidence_spread }
    }

    /// Highest confidence this band can produce.
    #[must_use]
    pub const fn max_confidence(&self) -> u16 {
        self.base_confidence as u16 + self.confidence_spread as u16
    }
}

/// Value per square meter for each category, in NGN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    pub residential: u64,
    pub commercial: u64,
    pub industrial: u64,
    pub institutional: u64,
}

impl ValuationConfig {
    #[must_use]
    pub const fn rate(&self, category: Category) -> u64 {
        match category {
            Category::Residential => self.residential,
            Category::Commercial => self.commercial,
            Category::Industrial => self.industrial,
            Category::Institutional => self.institutional,
        }
    }
}

/// Footprint shape options.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonConfig {
    /// Rotate footprints about their center. Off: rectangles stay axis-aligned.
    pub rotate: bool,
}

/// Descriptive strings written into the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetLabels {
    pub title: String,
    pub source: String,
    pub feature_source: String,
    pub external_source: String,
    pub region: String,
    pub detection_method: String,
    pub accuracy: String,
    pub coverage: String,
}

// --- Default ---

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            bands: vec![
                ClassificationBand::new(Some(100.0), Category::Residential, 82, 10),
                ClassificationBand::new(Some(300.0), Category::Residential, 85, 8),
                ClassificationBand::new(Some(500.0), Category::Commercial, 83, 12),
                ClassificationBand::new(Some(1000.0), Category::Commercial, 80, 15),
                ClassificationBand::new(Some(1500.0), Category::Institutional, 78, 15),
                ClassificationBand::new(None, Category::Industrial, 75, 18),
            ],
        }
    }
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self { residential: 150_000, commercial: 300_000, industrial: 100_000, institutional: 200_000 }
    }
}

impl Default for DatasetLabels {
    fn default() -> Self {
        Self {
            title: "Gombe State Building Footprints".to_owned(),
            source: "Google Open Buildings v3 + FastFind360 AI Classification".to_owned(),
            feature_source: "Google Open Buildings + FastFind360 AI".to_owned(),
            external_source: "Google Open Buildings v3".to_owned(),
            region: "Gombe State, Nigeria".to_owned(),
            detection_method: "Satellite imagery analysis + ML classification".to_owned(),
            accuracy: "85%".to_owned(),
            coverage: "65% of state area".to_owned(),
        }
    }
}
