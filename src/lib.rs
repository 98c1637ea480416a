//! # Cmddir
//!
//! Discover and register command line subcommands from the files of a
//! directory. Each eligible source file in the directory stands for a plugin
//! module exposing either a single command or a group of commands; the
//! registry flattens them under `"<module>:<command>"` qualified names and
//! serves lookups against a mapping built once, on first use.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use anyhow::Result;
//! use cmddir::{CommandDir, Context, EntryPoint, FactoryLoader, FnCommand, ScanConfig};
//!
//! fn main() -> Result<()> {
//!     let mut loader = FactoryLoader::new();
//!     loader.register("greet", || {
//!         let hello = FnCommand::new(clap::Command::new("hello"), |_, _| Ok(()));
//!         Ok(EntryPoint::Single(Arc::new(hello)))
//!     })?;
//!
//!     let dir = CommandDir::new(&ScanConfig::new("plugins/commands"), &loader)?;
//!     let ctx = Context::default();
//!     for name in dir.list_commands(&ctx)? {
//!         println!("{name}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub use cli::*;

pub mod config;
pub use config::*;

pub mod module;
pub use module::*;

pub mod registry;
pub use registry::*;
