//! Shared crate-wide constants for Signoff.
//!
//! Centralizes magic values and default labels used across modules.
//! Adjusting these here will propagate through the crate.

/// Default filename of the per-directory ownership listing.
pub const OWNERS_FILE: &str = "OWNERS";

/// Default filename of the per-directory dependency listing.
pub const DEPENDENCIES_FILE: &str = "DEPENDENCIES";

/// UUIDv5 namespace tag for deterministic run IDs.
/// Two runs over the same changed paths and claimed approvers share an ID.
pub const NS_TAG: &str = "https://signoff/run";
