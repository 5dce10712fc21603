#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the footprint workspace.
//! Currently a single attribute, [`macro@fp_error`], which wires an error enum
//! into `thiserror` and the workspace-wide context conventions.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! fp-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Type Aliasing**: Emits `pub type Result<T, E = Name> = std::result::Result<T, E>;`
///   next to the enum.
/// * **Context Support**: Generates a companion `NameExt` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Conversions**: `From<Source>` for each variant carrying a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * **Kind**: a `kind()` accessor returning the variant name, handy as a log field.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source error must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use fp_derive::fp_error;
/// use std::borrow::Cow;
///
/// #[fp_error]
/// pub enum IngestError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal ingest error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String> {
///     std::fs::read_to_string(path).context("Reading building rows")
/// }
/// ```
#[proc_macro_attribute]
pub fn fp_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
