//! Policy configuration for validation runs.
//!
//! The `policy` module centralizes the knobs that change how a run
//! interprets a tree: listing filenames, the resolution base for
//! dependency entries, and the per-directory approval quorum. Consumers
//! typically start from [`Policy::default`] or a preset and customize
//! fields before creating a [`Signoff`](crate::Signoff) instance.
//!
//! Submodules:
//! - `config`: policy struct and presets
//! - `types`: small policy enums

pub mod config;
pub mod types;

pub use config::Policy;
pub use types::{DependencyBase, Quorum};
