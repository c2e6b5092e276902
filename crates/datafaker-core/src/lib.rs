//! Core contracts for the datafaker toolbox.
//!
//! This crate owns the compiled-in generator catalog and the output-kind
//! extension table. Both are immutable, ordered, and free of I/O; the
//! generation engine in `datafaker-generate` builds on top of them.

pub mod catalog;
mod catalog_gen;
pub mod descriptor;
pub mod error;
pub mod extension;

pub use catalog::{Catalog, find_by_name, list_all, list_by_group};
pub use descriptor::GeneratorDescriptor;
pub use error::{Error, Result};
pub use extension::{
    FileExtensionType, OutputKind, extensions_for, file_extension_types, is_custom,
    resolve_suffix,
};
