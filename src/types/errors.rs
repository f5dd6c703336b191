//! Error types used across Signoff.
use thiserror::Error;

/// High-level error categories for type-level operations and resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("invalid path")]
    InvalidPath,
    #[error("path not found")]
    NotFound,
    #[error("no ownership listing")]
    MissingOwners,
    #[error("malformed listing")]
    MalformedListing,
    #[error("io error")]
    Io,
}

/// Structured error with a kind and human message.
/// The message always names the offending path so a missing or broken
/// `OWNERS`/`DEPENDENCIES` entry can be fixed from the diagnostic alone.
#[derive(Debug, Error)]
#[error("{kind:?}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
