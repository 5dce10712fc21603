//! Rectangular footprints around a center point.

use fp_domain::{LonLat, Ring};
use rand::Rng;

/// Meters per degree of longitude used for the footprint extent.
pub const METERS_PER_DEG_LON: f64 = 111_320.0;
/// Meters per degree of latitude.
pub const METERS_PER_DEG_LAT: f64 = 110_540.0;

/// Largest rotation applied when rotation is enabled, in radians.
const MAX_ROTATION: f64 = 0.15;

#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonSynthesizer {
    rotate: bool,
}

impl PolygonSynthesizer {
    #[must_use]
    pub const fn new(rotate: bool) -> Self {
        Self { rotate }
    }

    /// Closed 5-point ring whose extent roughly matches `area` m².
    ///
    /// Corners run `(-,-) (+,-) (+,+) (-,+)` around `center`, then the first
    /// corner repeats. Axis-aligned unless rotation is enabled, in which case
    /// no extra random draw happens.
    pub fn build_rectangle<R: Rng + ?Sized>(&self, center: LonLat, area: f64, rng: &mut R) -> Ring {
        let side = area.sqrt();
        let aspect = rng.gen_range(0.6..1.4);
        let lon_offset = side / METERS_PER_DEG_LON * rng.gen_range(0.8..1.2);
        let lat_offset = side / METERS_PER_DEG_LAT * rng.gen_range(0.8..1.2) * aspect;

        let ring = rectangle(center, lon_offset, lat_offset);
        if self.rotate {
            let angle = rng.gen_range(-MAX_ROTATION..MAX_ROTATION);
            rotate_ring(&ring, center, angle)
        } else {
            ring
        }
    }
}

/// Axis-aligned closed ring with the given full extents.
#[must_use]
pub fn rectangle(center: LonLat, lon_extent: f64, lat_extent: f64) -> Ring {
    let (dx, dy) = (lon_extent / 2.0, lat_extent / 2.0);
    let corner = |sx: f64, sy: f64| LonLat::new(center.lon + sx * dx, center.lat + sy * dy);
    let first = corner(-1.0, -1.0);
    vec![first, corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0), first]
}

fn rotate_ring(ring: &[LonLat], pivot: LonLat, angle: f64) -> Ring {
    let (sin, cos) = angle.sin_cos();
    ring.iter()
        .map(|p| {
            let (x, y) = (p.lon - pivot.lon, p.lat - pivot.lat);
            LonLat::new(pivot.lon + x * cos - y * sin, pivot.lat + x * sin + y * cos)
        })
        .collect()
}
