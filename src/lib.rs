#![forbid(unsafe_code)]
//! Signoff: ownership sign-off validation for hierarchically-owned trees.
//!
//! A change touching a path must be approved by someone named in the nearest
//! enclosing `OWNERS` listing; per-directory `DEPENDENCIES` listings pull
//! further paths into the affected set. The crate computes the closure of
//! that relation breadth-first (visited-once, cycle-safe) and then checks
//! whether the claimed approvers cover every affected directory.
//!
//! Model highlights:
//! - All traversal runs against the `PathOracle` capability trait; production
//!   wires `DiskOracle`, tests and embedders use `MemoryOracle` fixtures.
//! - Public APIs operate on `RepoPath` only: root-anchored, normalized, no
//!   `..` escape.
//! - This crate forbids `unsafe`.

pub mod adapters;
pub mod api;
pub mod constants;
pub mod logging;
pub mod policy;
pub mod resolve;
pub mod types;

pub use api::*;
