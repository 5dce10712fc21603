//! Layered configuration: optional file, then `FOOTPRINT__*` environment overrides.

use crate::error::{KernelErrorExt, Result};
use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix for environment overrides (`FOOTPRINT__POLYGON__ROTATE=true`).
pub const ENV_PREFIX: &str = "FOOTPRINT";
/// Separator between nesting levels in environment keys.
pub const ENV_SEPARATOR: &str = "__";

/// Loads `T` from an optional file with environment overrides on top.
///
/// Without a file, `T` is built from its serde defaults plus whatever the
/// environment overrides. The file format follows its extension
/// (`.toml`, `.json`, `.yaml`).
///
/// # Errors
/// Returns [`KernelError::Config`](crate::KernelError::Config) if the file is
/// missing or unreadable, or if the merged values do not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut loader = ConfigLoader::new();
    if let Some(path) = path {
        loader = loader.file(path);
    }
    loader.load()
}

/// Builder behind [`load_config`]. Lets callers pin the environment source,
/// which keeps tests independent from the process environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env: Option<Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Required file layer.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the process environment with a fixed set of variables.
    #[must_use]
    pub fn env_source(mut self, vars: Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Merges the layers and deserializes the result.
    ///
    /// # Errors
    /// See [`load_config`].
    pub fn load<T: DeserializeOwned>(self) -> Result<T> {
        let mut builder = Config::builder();

        if let Some(path) = &self.file {
            info!(path = %path.display(), "Loading config file");
            builder = builder.add_source(File::from(path.as_path()).required(true));
        } else {
            debug!("No config file given; using defaults");
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(self.env),
        );

        let config = builder
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")?;

        Ok(config)
    }
}
