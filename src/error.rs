//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, dump and serialization errors, and provides semantic
//! variants for caller contract violations and malformed upstream input.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Structural dump error: {0}")]
    Dump(#[from] crate::io::DumpError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot transform null input")]
    EmptyInput,

    #[error("Missing field `{field}` in {segment}")]
    MissingField {
        segment: String,
        field: &'static str,
    },
}
