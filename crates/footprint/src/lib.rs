//! Facade crate for the footprint pipeline and its shared modules.
//! Re-exports domain/kernel primitives and the pipeline slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `footprint` (the `ingest` feature is on by default).
//! - Resolve the external source once with [`capability`], then hand it to
//!   [`synthesis::DatasetAssembler::assemble`].

pub use fp_domain as domain;
#[cfg(feature = "ingest")]
pub use fp_ingest as ingest;
pub use fp_kernel as kernel;
pub use fp_synthesis as synthesis;

use fp_synthesis::SourceCapability;
use std::path::Path;

/// Build-time enabled features (by Cargo feature).
pub const ENABLED: &[&str] = &[
    "synthesis",
    #[cfg(feature = "ingest")]
    "ingest",
];

#[must_use]
pub fn is_enabled(name: &str) -> bool {
    ENABLED.contains(&name)
}

/// Startup capability check for the external building source.
#[must_use]
pub fn capability(source: Option<&Path>) -> SourceCapability {
    #[cfg(feature = "ingest")]
    {
        fp_ingest::probe(source)
    }
    #[cfg(not(feature = "ingest"))]
    {
        match source {
            Some(_) => SourceCapability::unavailable("built without the `ingest` feature"),
            None => SourceCapability::unavailable("no external source configured"),
        }
    }
}
