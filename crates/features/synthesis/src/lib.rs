//! # Synthesis
//!
//! The building-footprint pipeline. Leaves first:
//!
//! * [`SizeSampler`]: footprint area from a skewed piecewise distribution.
//! * [`Classifier`]: area to land-use category and confidence.
//! * [`SpatialSampler`]: cluster-weighted position clamped into the region.
//! * [`PolygonSynthesizer`]: closed rectangular ring around a center.
//! * [`DatasetAssembler`]: runs the above N times, or reshapes rows from an
//!   external [`BuildingSource`], and emits a GeoJSON `FeatureCollection`.
//!
//! All randomness flows through an injected [`FootprintRng`] and all
//! timestamps through an injected [`Clock`]; a fixed seed and a fixed clock
//! give byte-identical output.
//!
//! ```rust
//! use fp_synthesis::{DatasetAssembler, FixedClock};
//! use chrono::{TimeZone, Utc};
//!
//! let mut assembler = DatasetAssembler::builder()
//!     .seed(42)
//!     .clock(FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()))
//!     .build()
//!     .unwrap();
//! let collection = assembler.generate(10).unwrap();
//! assert!(collection.is_consistent());
//! ```

pub mod assembler;
pub mod classifier;
pub mod clock;
mod error;
pub mod polygon;
pub mod rng;
pub mod size;
pub mod source;
pub mod spatial;

pub use assembler::{DatasetAssembler, DatasetAssemblerBuilder};
pub use classifier::Classifier;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, SynthesisError, SynthesisErrorExt};
pub use polygon::PolygonSynthesizer;
pub use rng::FootprintRng;
pub use size::SizeSampler;
pub use source::{BuildingSource, RawBuildingRow, SourceCapability};
pub use spatial::{Placement, SpatialSampler};
