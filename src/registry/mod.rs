//! # Registry
//!
//! The command directory registry: scans a directory for plugin files,
//! loads each eligible file as a module and serves command lookups under
//! qualified names.

#[allow(clippy::module_inception)]
pub mod registry;

// Re-export registry.rs
pub use registry::*;
