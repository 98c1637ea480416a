//! # Cli
//!
//! Cli seam of the crate: the traits implemented by the commands and command
//! groups plugin modules expose, along with the opaque context front ends
//! thread through listings and lookups.

#[allow(clippy::module_inception)]
pub mod cli;

// Re-export cli.rs
pub use cli::*;
