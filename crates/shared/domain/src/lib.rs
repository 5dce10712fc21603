//! # Domain Models
//!
//! Pure building-footprint types with minimal dependencies (`serde`, `chrono`).
//! Keep it lean: no I/O and no randomness, just data and simple helpers.

pub mod building;
pub mod category;
pub mod cluster;
pub mod config;
pub mod geo;
pub mod geojson;

pub use building::Building;
pub use category::{Category, ClassificationBreakdown};
pub use cluster::{Cluster, ClusterTable};
pub use geo::{LonLat, Region, Ring};
