//! # Ingest
//!
//! The external side of the pipeline: a file-backed [`BuildingSource`] for
//! rows exported from Google Open Buildings, and the startup [`probe`] that
//! turns an optional path into a [`SourceCapability`].
//!
//! [`BuildingSource`]: fp_synthesis::BuildingSource
//! [`SourceCapability`]: fp_synthesis::SourceCapability

mod error;
pub mod probe;
pub mod rows;
pub mod wkt;

pub use error::{IngestError, IngestErrorExt, Result};
pub use probe::probe;
pub use rows::JsonRowsSource;
pub use wkt::parse_polygon;
