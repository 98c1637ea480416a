//! # Module
//!
//! A plugin module is the executable unit behind a single file of a command
//! directory, keyed by the file's stem. Its designated entry point is the
//! one well-known value the registry inspects to find commands.

use std::{collections::HashMap, fmt, path::Path, sync::Arc};

use anyhow::{anyhow, bail, Result};
use log::debug;

use crate::cli::{Command, CommandGroup};

/// Designated entry point of a plugin module. Produced at the plugin
/// boundary; the registry never inspects plugin types at runtime.
#[derive(Debug)]
pub enum EntryPoint {
    /// The module exposes one command.
    Single(Arc<dyn Command>),
    /// The module exposes a group of commands, flattened into the parent
    /// namespace by the registry.
    Group(Arc<dyn CommandGroup>),
}

/// Specific types of errors module handling can generate.
#[derive(thiserror::Error, Debug)]
pub enum ModuleError {
    /// Emitted when a module's designated export is neither a command nor a
    /// command group.
    #[error("module '{0}' does not export a command or a command group")]
    BadEntryPoint(String),
}

/// A loaded plugin module.
pub trait PluginModule: Send + Sync {
    /// Module key: the backing file's name without extension.
    fn stem(&self) -> &str;

    /// Returns the module's entry point. Fails with
    /// [`ModuleError::BadEntryPoint`] when the designated export is not
    /// command-shaped.
    fn entry_point(&self) -> Result<EntryPoint>;
}

impl fmt::Debug for dyn PluginModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PluginModule ({})", self.stem())
    }
}

/// Loads plugin modules on behalf of a registry. The registry decides which
/// files are eligible; the loader decides how a file maps to executable
/// code. Load failures are fatal for the registry being built.
pub trait ModuleLoader {
    fn load(&self, stem: &str, path: &Path) -> Result<Box<dyn PluginModule>>;
}

type EntryPointFn = Arc<dyn Fn() -> Result<EntryPoint> + Send + Sync>;

/// [`PluginModule`] backed by an entry point factory. The factory runs when
/// the registry classifies the module, not at load time.
pub struct StaticModule {
    stem: String,
    entry: EntryPointFn,
}

impl StaticModule {
    pub fn new<F>(stem: &str, entry: F) -> StaticModule
    where
        F: Fn() -> Result<EntryPoint> + Send + Sync + 'static,
    {
        StaticModule {
            stem: stem.to_string(),
            entry: Arc::new(entry),
        }
    }
}

impl PluginModule for StaticModule {
    fn stem(&self) -> &str {
        &self.stem
    }

    fn entry_point(&self) -> Result<EntryPoint> {
        (self.entry)()
    }
}

/// [`ModuleLoader`] resolving files against entry point factories registered
/// at build time, keyed by the file stem they stand for. Runtime code
/// loading from arbitrary files is not something we do in a statically
/// compiled tool; a discovered file with no matching factory is a broken
/// deployment and fails the load.
#[derive(Default)]
pub struct FactoryLoader {
    factories: HashMap<String, EntryPointFn>,
}

impl FactoryLoader {
    pub fn new() -> FactoryLoader {
        FactoryLoader::default()
    }

    /// Register an entry point factory for files whose stem is `stem`.
    pub fn register<F>(&mut self, stem: &str, factory: F) -> Result<&mut Self>
    where
        F: Fn() -> Result<EntryPoint> + Send + Sync + 'static,
    {
        // Ensure uniqueness of the stem. This is important as it is used as
        // a key at load time.
        if self.factories.contains_key(stem) {
            bail!("could not insert factory '{}'; stem already registered", stem);
        }

        self.factories.insert(stem.to_string(), Arc::new(factory));
        Ok(self)
    }
}

impl ModuleLoader for FactoryLoader {
    fn load(&self, stem: &str, path: &Path) -> Result<Box<dyn PluginModule>> {
        debug!("Loading module '{stem}' from {}", path.display());

        let entry = self
            .factories
            .get(stem)
            .ok_or_else(|| anyhow!("no plugin registered for {}", path.display()))?;

        Ok(Box::new(StaticModule {
            stem: stem.to_string(),
            entry: Arc::clone(entry),
        }))
    }
}
