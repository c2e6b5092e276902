//! Fake-data generation for datafaker.
//!
//! A `GenerationRequest` names a table, a row count and one source per
//! field (catalog descriptor, number range, sequence or regex). The engine
//! turns it into a deterministic `Batch`, which the output sinks write as
//! CSV, JSON Lines or SQL and a `Store` can insert into a database.

pub mod adapter;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod locales;
pub mod model;
pub mod output;
pub mod producer;
pub mod store;
pub mod value;

pub use adapter::{adapt_column, adapt_columns};
pub use engine::{AssembledBatch, GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use generators::preview_regex;
pub use locales::LocaleKey;
pub use model::{
    Batch, FieldReport, FieldSource, FieldSpec, FileTarget, GenerateOptions, GenerationReport,
    GenerationRequest, OutputFormat, OutputReport,
};
pub use producer::{FakeProducer, ValueProducer};
pub use store::{MemoryStore, SqliteStore, Store};
pub use value::GeneratedValue;
