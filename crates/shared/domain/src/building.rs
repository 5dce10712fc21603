use crate::category::Category;
use crate::geo::{LonLat, Ring};
use chrono::{DateTime, Utc};

/// One detected (or synthesized) building. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    /// Unique within a run (`building_17`, `ob_3`).
    pub id: String,
    /// Footprint area in square meters, always positive.
    pub area: f64,
    pub category: Category,
    /// Detection confidence in percent.
    pub confidence: u8,
    /// Area multiplied by the per-category rate, rounded.
    pub estimated_value: u64,
    pub center: LonLat,
    pub footprint: Ring,
    /// Name of the settlement cluster the building belongs to.
    pub location: String,
    /// Provenance label.
    pub source: String,
    pub detected_at: DateTime<Utc>,
}

impl Building {
    /// `true` if the footprint is a closed ring with at least four distinct corners.
    #[must_use]
    pub fn has_closed_footprint(&self) -> bool {
        let ring = &self.footprint;
        if ring.len() < 5 || ring.first() != ring.last() {
            return false;
        }

        let corners = &ring[..ring.len() - 1];
        let distinct =
            corners.iter().enumerate().filter(|&(i, p)| !corners[..i].contains(p)).count();
        distinct >= 4
    }
}
