//! GeoJSON wire schema for the output artifact.
//!
//! Field names follow the Open Buildings conventions (`area_in_meters`) so that
//! synthetic and real-derived files are interchangeable for consumers.

use crate::building::Building;
use crate::category::{Category, ClassificationBreakdown};
use crate::geo::{Region, Ring};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the features of a collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Synthetic,
    External,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub metadata: Metadata,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Breakdown total, declared total and feature count all agree.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let declared = self.metadata.total_buildings;
        self.metadata.classification_breakdown.total() == declared && self.features.len() == declared
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub source: String,
    pub region: String,
    pub total_buildings: usize,
    pub bounds: Region,
    #[serde(with = "iso8601_millis")]
    pub generated_at: DateTime<Utc>,
    pub classification_breakdown: ClassificationBreakdown,
    pub detection_method: String,
    pub accuracy: String,
    pub coverage: String,
    pub origin: Origin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub summary: Summary,
}

/// Aggregate figures over all features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Total footprint area in km², two decimals.
    pub total_area_sq_km: f64,
    /// Mean confidence, one decimal.
    pub average_confidence: f64,
    /// Mean footprint area in m², rounded.
    pub average_building_size: f64,
    /// Saturates at `u64::MAX`.
    pub total_estimated_value: u64,
}

impl Summary {
    #[must_use]
    pub fn from_buildings(buildings: &[Building]) -> Self {
        if buildings.is_empty() {
            return Self::default();
        }

        let count = buildings.len() as f64;
        let total_area: f64 = buildings.iter().map(|b| b.area).sum();
        let total_confidence: f64 = buildings.iter().map(|b| f64::from(b.confidence)).sum();

        Self {
            total_area_sq_km: round_to(total_area / 1_000_000.0, 2),
            average_confidence: round_to(total_confidence / count, 1),
            average_building_size: (total_area / count).round(),
            total_estimated_value: buildings
                .iter()
                .map(|b| b.estimated_value)
                .fold(0, u64::saturating_add),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
}

impl Geometry {
    /// Outer ring of the polygon.
    #[must_use]
    pub fn exterior(&self) -> Option<&Ring> {
        match self {
            Self::Polygon { coordinates } => coordinates.first(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub id: String,
    pub area_in_meters: f64,
    pub classification: Category,
    pub confidence: u8,
    pub estimated_value: u64,
    pub source: String,
    #[serde(with = "iso8601_millis")]
    pub detected_at: DateTime<Utc>,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Building> for Feature {
    fn from(building: &Building) -> Self {
        Self {
            properties: FeatureProperties {
                id: building.id.clone(),
                area_in_meters: round_to(building.area, 2),
                classification: building.category,
                confidence: building.confidence,
                estimated_value: building.estimated_value,
                source: building.source.clone(),
                detected_at: building.detected_at,
                location: building.location.clone(),
                latitude: building.center.lat,
                longitude: building.center.lon,
            },
            geometry: Geometry::Polygon { coordinates: vec![building.footprint.clone()] },
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// RFC 3339 timestamps in UTC with millisecond precision and a trailing `Z`.
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| serde::de::Error::custom(format!("Invalid timestamp '{raw}': {e}")))
    }
}
