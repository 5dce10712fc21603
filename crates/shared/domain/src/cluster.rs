//! Named settlement centers used to bias spatial sampling.

use crate::geo::LonLat;
use serde::{Deserialize, Serialize};

/// A named point with a relative density weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    /// Relative weight; weights need not sum to one.
    pub density: f64,
}

impl Cluster {
    pub fn new(name: impl Into<String>, lon: f64, lat: f64, density: f64) -> Self {
        Self { name: name.into(), lon, lat, density }
    }

    #[must_use]
    pub const fn center(&self) -> LonLat {
        LonLat::new(self.lon, self.lat)
    }
}

/// Ordered list of clusters. Order matters: weighted selection walks it front to back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterTable(Vec<Cluster>);

impl ClusterTable {
    #[must_use]
    pub const fn new(clusters: Vec<Cluster>) -> Self {
        Self(clusters)
    }

    /// Settlements of Gombe State with their observed density shares.
    #[must_use]
    pub fn gombe() -> Self {
        Self(vec![
            Cluster::new("Gombe Central", 11.1672, 10.2897, 0.30),
            Cluster::new("Nasarawo", 11.1450, 10.3100, 0.20),
            Cluster::new("Tudun Wada", 11.1900, 10.2700, 0.15),
            Cluster::new("Herwagana", 11.1820, 10.3010, 0.12),
            Cluster::new("Pantami", 11.1510, 10.2770, 0.10),
            Cluster::new("Bajoga", 11.2450, 10.3250, 0.08),
            Cluster::new("Kumo", 11.2100, 10.0500, 0.05),
        ])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Cluster] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.0.iter().map(|c| c.density).sum()
    }

    /// Case-insensitive lookup: exact name first, then the first substring match.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&Cluster> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.0
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
            .or_else(|| self.0.iter().find(|c| c.name.to_lowercase().contains(&needle)))
    }

    /// Cluster closest to `point` by planar degree distance; ties keep list order.
    #[must_use]
    pub fn nearest(&self, point: LonLat) -> Option<&Cluster> {
        let distance = |c: &Cluster| (c.lon - point.lon).powi(2) + (c.lat - point.lat).powi(2);
        self.0.iter().reduce(|best, c| if distance(c) < distance(best) { c } else { best })
    }
}

impl Default for ClusterTable {
    fn default() -> Self {
        Self::gombe()
    }
}

impl From<Vec<Cluster>> for ClusterTable {
    fn from(clusters: Vec<Cluster>) -> Self {
        Self(clusters)
    }
}

impl<'a> IntoIterator for &'a ClusterTable {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
