use crate::rows::JsonRowsSource;
use fp_synthesis::SourceCapability;
use std::path::Path;
use tracing::debug;

/// Startup check for the external dataset. Never fails: a missing source is
/// reported as [`SourceCapability::Unavailable`] with the reason.
#[must_use]
pub fn probe(path: Option<&Path>) -> SourceCapability {
    let Some(path) = path else {
        return SourceCapability::unavailable("no external source configured");
    };

    match JsonRowsSource::open(path) {
        Ok(source) => {
            debug!(path = %path.display(), "External building source available");
            SourceCapability::available(source)
        }
        Err(err) => SourceCapability::unavailable(err.to_string()),
    }
}
