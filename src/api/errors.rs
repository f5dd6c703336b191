use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("path not found: {0}")]
    NotFound(String),
    #[error("no ownership listing: {0}")]
    MissingOwners(String),
    #[error("malformed listing: {0}")]
    MalformedListing(String),
    #[error("read failed: {0}")]
    Io(String),
}

impl From<crate::types::errors::Error> for ApiError {
    fn from(e: crate::types::errors::Error) -> Self {
        use crate::types::errors::ErrorKind::{
            InvalidPath, Io, MalformedListing, MissingOwners, NotFound,
        };
        match e.kind {
            InvalidPath => ApiError::InvalidPath(e.msg),
            NotFound => ApiError::NotFound(e.msg),
            MissingOwners => ApiError::MissingOwners(e.msg),
            MalformedListing => ApiError::MalformedListing(e.msg),
            Io => ApiError::Io(e.msg),
        }
    }
}

// Stable identifiers for facts emission and CI exit codes.
// SCREAMING_SNAKE_CASE intentionally matches the emitted IDs.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorId {
    E_INSUFFICIENT,
    E_NOT_FOUND,
    E_MISSING_OWNERS,
    E_MALFORMED_LISTING,
    E_INVALID_PATH,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_INSUFFICIENT => "E_INSUFFICIENT",
        ErrorId::E_NOT_FOUND => "E_NOT_FOUND",
        ErrorId::E_MISSING_OWNERS => "E_MISSING_OWNERS",
        ErrorId::E_MALFORMED_LISTING => "E_MALFORMED_LISTING",
        ErrorId::E_INVALID_PATH => "E_INVALID_PATH",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

/// Process exit code for an error class. Insufficiency gets its own nonzero
/// code so CI can gate on it without string-matching stdout.
#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_INSUFFICIENT => 10,
        ErrorId::E_NOT_FOUND => 20,
        ErrorId::E_MISSING_OWNERS => 30,
        ErrorId::E_MALFORMED_LISTING => 40,
        ErrorId::E_INVALID_PATH => 50,
        ErrorId::E_GENERIC => 1,
    }
}

/// Classify a public API error for facts emission and exit-code mapping.
#[must_use]
pub const fn error_id_for(e: &ApiError) -> ErrorId {
    match e {
        ApiError::InvalidPath(_) => ErrorId::E_INVALID_PATH,
        ApiError::NotFound(_) => ErrorId::E_NOT_FOUND,
        ApiError::MissingOwners(_) => ErrorId::E_MISSING_OWNERS,
        ApiError::MalformedListing(_) => ErrorId::E_MALFORMED_LISTING,
        ApiError::Io(_) => ErrorId::E_GENERIC,
    }
}
