//! Writing the finished artifact to disk.

use crate::error::{KernelErrorExt, Result};
use fp_domain::geojson::FeatureCollection;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Serializes `collection` as pretty-printed JSON (2-space indent) into `path`,
/// creating missing parent directories and replacing any existing file.
///
/// Returns the number of bytes written.
///
/// # Errors
/// Returns [`KernelError::Io`](crate::KernelError::Io) when the directory or
/// file cannot be written, [`KernelError::Json`](crate::KernelError::Json) if
/// serialization fails.
pub fn write_collection(path: &Path, collection: &FeatureCollection) -> Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Creating output directory")?;
        debug!(dir = %parent.display(), "Output directory ready");
    }

    let body = serde_json::to_vec_pretty(collection).context("Serializing feature collection")?;
    fs::write(path, &body).context("Writing feature collection")?;

    let bytes = body.len() as u64;
    info!(path = %path.display(), bytes, features = collection.len(), "Artifact written");
    Ok(bytes)
}
