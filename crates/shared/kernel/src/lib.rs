//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading and writing the finished artifact.
//!
//! ## Config loading
//! ```rust,no_run
//! use fp_kernel::config::load_config;
//! use fp_kernel::domain::config::GeneratorConfig;
//!
//! let cfg: GeneratorConfig = load_config(Some("footprint.toml")).unwrap_or_default();
//! ```
pub mod config;
pub mod error;
pub mod output;

pub use error::{KernelError, KernelErrorExt};
pub use fp_domain as domain;
