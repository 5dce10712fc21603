//! JSON export of an Open Buildings style table.
//!
//! The file holds an array of objects with `latitude`, `longitude`,
//! `area_in_meters`, `confidence` and a WKT `geometry`, the columns of the
//! upstream CSV.

use crate::error::{IngestError, IngestErrorExt, Result};
use crate::wkt::parse_polygon;
use fp_domain::Region;
use fp_synthesis::{BuildingSource, RawBuildingRow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct RowRecord {
    latitude: f64,
    longitude: f64,
    area_in_meters: f64,
    confidence: f64,
    geometry: String,
}

impl RowRecord {
    fn into_row(self) -> Result<RawBuildingRow> {
        let numbers = [self.latitude, self.longitude, self.area_in_meters, self.confidence];
        if numbers.iter().any(|v| !v.is_finite()) || self.area_in_meters <= 0.0 {
            return Err(IngestError::InvalidRow {
                message: "non-finite value or non-positive area".into(),
                context: None,
            });
        }

        Ok(RawBuildingRow {
            latitude: self.latitude,
            longitude: self.longitude,
            area_in_meters: self.area_in_meters,
            confidence: self.confidence,
            geometry: parse_polygon(&self.geometry)?,
        })
    }
}

/// Reads building rows from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonRowsSource {
    path: PathBuf,
}

impl JsonRowsSource {
    /// # Errors
    /// [`IngestError::Unavailable`] if `path` is not an existing file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(IngestError::Unavailable {
                message: format!("{} is not a readable file", path.display()).into(),
                context: None,
            });
        }
        Ok(Self { path: path.to_path_buf() })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All rows of the file. Rows with unusable numbers or geometry are
    /// skipped and counted in the logs.
    ///
    /// # Errors
    /// [`IngestError::Io`] if the file cannot be read, [`IngestError::Json`]
    /// if it is not an array of row objects.
    pub fn read_rows(&self) -> Result<Vec<RawBuildingRow>> {
        let raw = fs::read(&self.path).context("Reading building rows")?;
        let records: Vec<RowRecord> = serde_json::from_slice(&raw).context("Parsing building rows")?;
        let total = records.len();

        let mut skipped = 0usize;
        let rows: Vec<RawBuildingRow> = records
            .into_iter()
            .enumerate()
            .filter_map(|(idx, record)| match record.into_row() {
                Ok(row) => Some(row),
                Err(err) => {
                    skipped += 1;
                    debug!(row = idx, error = %err, "Skipping building row");
                    None
                }
            })
            .collect();

        if skipped > 0 {
            warn!(path = %self.path.display(), skipped, total, "Some building rows were unusable");
        }
        Ok(rows)
    }
}

impl BuildingSource for JsonRowsSource {
    fn name(&self) -> &str {
        "json-rows"
    }

    fn fetch(&self, _region: &Region) -> fp_synthesis::Result<Vec<RawBuildingRow>> {
        Ok(self.read_rows()?)
    }
}
