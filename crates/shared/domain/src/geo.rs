use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A WGS84 position in decimal degrees.
///
/// Serialized as a GeoJSON position: `[lon, lat]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl Serialize for LonLat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.lon, self.lat).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LonLat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (lon, lat) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(Self { lon, lat })
    }
}

/// A closed linear ring: the last position repeats the first.
pub type Ring = Vec<LonLat>;

/// Axis-aligned bounding box in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Region {
    /// Gombe State, Nigeria.
    pub const GOMBE: Self = Self { min_lon: 11.05, max_lon: 11.35, min_lat: 10.15, max_lat: 10.45 };

    /// `true` when both axes are finite and strictly increasing.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        [self.min_lon, self.max_lon, self.min_lat, self.max_lat].iter().all(|v| v.is_finite())
            && self.min_lon < self.max_lon
            && self.min_lat < self.max_lat
    }

    /// Inclusive containment on both axes.
    #[must_use]
    pub fn contains(&self, point: LonLat) -> bool {
        (self.min_lon..=self.max_lon).contains(&point.lon)
            && (self.min_lat..=self.max_lat).contains(&point.lat)
    }

    /// Hard-clamps a point onto the box. Only meaningful for a well-formed region.
    #[must_use]
    pub fn clamp(&self, point: LonLat) -> LonLat {
        LonLat {
            lon: point.lon.clamp(self.min_lon, self.max_lon),
            lat: point.lat.clamp(self.min_lat, self.max_lat),
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::GOMBE
    }
}
