//! Cluster-weighted point sampling inside a region.

use crate::error::{Result, SynthesisError};
use fp_domain::{Cluster, ClusterTable, LonLat, Region};
use rand::Rng;
use std::f64::consts::TAU;
use std::ops::Range;

/// Scatter radius around a cluster center, in degrees.
const SPREAD_DEG: Range<f64> = 0.01..0.035;

/// A sampled position and the cluster it was drawn around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub center: LonLat,
    pub cluster: &'a Cluster,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpatialSampler;

impl SpatialSampler {
    /// Picks a cluster by weight, scatters a point around it and clamps the
    /// point into `region`.
    ///
    /// The polar offset is scaled again by an independent factor in `[-1, 1)`
    /// per axis, which keeps the scatter inside the disk and denser near the center.
    ///
    /// # Errors
    /// [`SynthesisError::Configuration`] if `clusters` is empty or its total
    /// weight is not finite.
    pub fn sample_point<'a, R: Rng + ?Sized>(
        &self,
        clusters: &'a ClusterTable,
        region: &Region,
        rng: &mut R,
    ) -> Result<Placement<'a>> {
        let total_weight = clusters.total_weight();
        if !total_weight.is_finite() {
            return Err(SynthesisError::configuration(format!(
                "cluster weights sum to {total_weight}"
            )));
        }
        let r = if total_weight > 0.0 { rng.gen_range(0.0..total_weight) } else { 0.0 };
        let cluster = select_cluster(clusters.as_slice(), r)
            .ok_or_else(|| SynthesisError::configuration("cluster list is empty"))?;

        let spread = rng.gen_range(SPREAD_DEG);
        let angle = rng.gen_range(0.0..TAU);
        let radius = rng.gen_range(0.0..spread);
        let jitter_lon = rng.gen_range(-1.0..1.0);
        let jitter_lat = rng.gen_range(-1.0..1.0);

        let raw = LonLat::new(
            cluster.lon + radius * angle.cos() * jitter_lon,
            cluster.lat + radius * angle.sin() * jitter_lat,
        );

        Ok(Placement { center: region.clamp(raw), cluster })
    }
}

/// Walks `clusters` in order subtracting each weight from `r`; the first
/// cluster that brings `r` to zero or below wins. When rounding leaves `r`
/// positive after the last cluster, the last cluster is returned.
///
/// `None` only for an empty slice.
#[must_use]
pub fn select_cluster(clusters: &[Cluster], mut r: f64) -> Option<&Cluster> {
    for cluster in clusters {
        r -= cluster.density;
        if r <= 0.0 {
            return Some(cluster);
        }
    }
    clusters.last()
}
