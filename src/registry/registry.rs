//! # Registry
//!
//! [`CommandDir`] looks up subcommands in a directory: its eligible source
//! files are loaded as plugin modules at construction time and their entry
//! points are flattened, once, into a mapping from qualified name
//! (`"<module>:<command>"`) to command.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};
use log::{debug, warn};
use once_cell::sync::OnceCell;

use crate::{
    cli::{Command, Context},
    config::ScanConfig,
    module::{EntryPoint, ModuleLoader, PluginModule},
};

/// Recognized extension for plugin source files, matched case-insensitively.
const MODULE_SUFFIX: &str = "rs";
/// Module initializer file name. Never loaded as a plugin, regardless of its
/// content; matched case-insensitively.
const INIT_FILE: &str = "mod.rs";
/// Separator between a module stem and a member command name.
const QUALIFIER: char = ':';

/// Build the qualified name a command is registered under.
pub fn qualify(stem: &str, name: &str) -> String {
    format!("{stem}{QUALIFIER}{name}")
}

/// Registry of the commands found in a directory.
///
/// Modules are loaded eagerly, when the registry is built; the command
/// mapping is built lazily, once, on the first listing or lookup, and is
/// never rebuilt even if the underlying files change.
pub struct CommandDir {
    /// Display name of the directory.
    name: String,
    /// The scanned directory.
    path: PathBuf,
    /// Loaded modules, keyed by file stem.
    modules: HashMap<String, Box<dyn PluginModule>>,
    /// Qualified name to command mapping. Filled at most once; concurrent
    /// first callers all observe the completed mapping.
    commands: OnceCell<BTreeMap<String, Arc<dyn Command>>>,
}

impl CommandDir {
    /// Scan the configured directory and load all eligible plugin files.
    /// Fails if the directory cannot be read or if any eligible file fails
    /// to load.
    pub fn new(config: &ScanConfig, loader: &dyn ModuleLoader) -> Result<CommandDir> {
        let mut modules: HashMap<String, Box<dyn PluginModule>> = HashMap::new();

        for entry in fs::read_dir(&config.path).with_context(|| {
            format!("could not read command directory {}", config.path.display())
        })? {
            let path = entry?.path();

            if !path.is_file() || !Self::eligible(&path, &config.exclude) {
                continue;
            }

            // eligible() checked the file name is valid UTF-8.
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };

            debug!("Loading command module '{stem}' from {}", path.display());

            // The same stem spelled under two extensions keeps the last
            // file loaded, silently.
            modules.insert(stem.clone(), loader.load(&stem, &path)?);
        }

        let name = match &config.name {
            Some(name) => name.clone(),
            None => config
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("commands")
                .to_string(),
        };

        Ok(CommandDir {
            name,
            path: config.path.clone(),
            modules,
            commands: OnceCell::new(),
        })
    }

    /// Returns the display name of the directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the scanned directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the sorted list of all qualified command names.
    ///
    /// The first call builds the command mapping from the loaded modules;
    /// subsequent calls are served from it without touching the filesystem.
    pub fn list_commands(&self, ctx: &Context) -> Result<Vec<String>> {
        Ok(self.populated(ctx)?.keys().cloned().collect())
    }

    /// Look up a command by qualified name. A miss is not an error: front
    /// ends routinely probe names typed by the user.
    pub fn get_command(&self, ctx: &Context, name: &str) -> Result<Option<Arc<dyn Command>>> {
        Ok(self.populated(ctx)?.get(name).cloned())
    }

    /// Graft all registered commands onto a front end clap Command, as
    /// subcommands named by their qualified names. The commands themselves
    /// keep their own short name.
    pub fn augment(&self, ctx: &Context, mut command: clap::Command) -> Result<clap::Command> {
        for (qname, cmd) in self.populated(ctx)?.iter() {
            command = command.subcommand(cmd.command().name(qname.clone()));
        }
        Ok(command)
    }

    fn populated(&self, ctx: &Context) -> Result<&BTreeMap<String, Arc<dyn Command>>> {
        self.commands.get_or_try_init(|| self.populate(ctx))
    }

    /// Flatten the entry points of all loaded modules into the qualified
    /// name mapping. Runs at most once per registry; a classification
    /// failure aborts the whole pass and no command is served.
    fn populate(&self, ctx: &Context) -> Result<BTreeMap<String, Arc<dyn Command>>> {
        let mut commands: BTreeMap<String, Arc<dyn Command>> = BTreeMap::new();

        for (stem, module) in self.modules.iter() {
            let entry = module
                .entry_point()
                .with_context(|| format!("could not classify entry point of module '{stem}'"))?;

            match entry {
                EntryPoint::Single(command) => {
                    // Colliding qualified names keep the last registration.
                    commands.insert(qualify(stem, &command.name()), command);
                }
                EntryPoint::Group(group) => {
                    for member in group.list_commands(ctx) {
                        let Some(command) = group.get_command(ctx, &member) else {
                            warn!("Group '{stem}' listed '{member}' but could not resolve it");
                            continue;
                        };
                        commands.insert(qualify(stem, &member), command);
                    }
                }
            }
        }

        debug!(
            "Command directory '{}' serves {} command(s)",
            self.name,
            commands.len()
        );
        Ok(commands)
    }

    /// A directory entry is eligible when it is a source file that is
    /// neither the module initializer nor excluded by name. The caller
    /// checks it is a regular file.
    fn eligible(path: &Path, exclude: &HashSet<String>) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if !path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case(MODULE_SUFFIX))
        {
            return false;
        }

        !name.eq_ignore_ascii_case(INIT_FILE) && !exclude.contains(name)
    }
}
