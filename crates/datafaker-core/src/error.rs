use thiserror::Error;

/// Errors raised by catalog and extension lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No descriptor in the catalog carries this name.
    #[error("generator descriptor not found: {0}")]
    LookupMiss(String),
    /// The output kind is not one of the enumerated keys.
    #[error("unknown output kind: {0}")]
    UnknownKind(String),
    /// The suffix is not allowed for the output kind.
    #[error("invalid suffix for {kind}: {suffix}")]
    InvalidSuffix { kind: String, suffix: String },
}

/// Convenience alias for results returned by the core crate.
pub type Result<T> = std::result::Result<T, Error>;
