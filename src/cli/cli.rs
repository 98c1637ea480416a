//! # Cli
//!
//! Defines the contract between the registry and the command line parsing
//! front end: what a command is, what a group of commands is and the opaque
//! context handed through when groups enumerate and resolve their members.

use std::{ffi::OsString, fmt::Debug, sync::Arc};

use anyhow::{bail, Result};
use clap::ArgMatches;

/// Opaque front end state threaded through listings and lookups. The
/// registry does not interpret it; command groups receive it as-is when
/// enumerating and resolving their members.
#[derive(Debug, Default)]
pub struct Context {
    /// Raw command line, as received by the front end.
    pub args: Vec<OsString>,
    /// Whether hidden commands show up in listings.
    pub show_hidden: bool,
}

/// A single command exposed by a plugin module.
///
/// Group members keep their own short name; qualification with the module
/// stem is the registry's job.
pub trait Command: Send + Sync {
    /// Returns the unique name of the command.
    fn name(&self) -> String;

    /// Generate the clap Command the front end parses arguments with.
    fn command(&self) -> clap::Command;

    /// Run the command with parsed arguments.
    fn run(&self, ctx: &Context, args: &ArgMatches) -> Result<()>;
}

impl Debug for dyn Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Command ({})", self.name())
    }
}

/// A set of commands exposed under a single entry point. Polymorphic with
/// [`Command`] for naming purposes; the registry flattens its members into
/// the parent namespace.
pub trait CommandGroup: Send + Sync {
    /// Returns the unique name of the group.
    fn name(&self) -> String;

    /// Enumerate the names of the member commands.
    fn list_commands(&self, ctx: &Context) -> Vec<String>;

    /// Resolve a member by name, or None when no member matches.
    fn get_command(&self, ctx: &Context, name: &str) -> Option<Arc<dyn Command>>;
}

impl Debug for dyn CommandGroup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CommandGroup ({})", self.name())
    }
}

/// Command implementation wrapping a clap definition and a run function.
/// This is the easiest way for a plugin to define a command without much
/// boilerplate.
pub struct FnCommand<F>
where
    F: Fn(&Context, &ArgMatches) -> Result<()>,
{
    command: clap::Command,
    func: F,
}

impl<F> FnCommand<F>
where
    F: Fn(&Context, &ArgMatches) -> Result<()>,
{
    pub fn new(command: clap::Command, func: F) -> Self {
        Self { command, func }
    }
}

impl<F> Command for FnCommand<F>
where
    F: Fn(&Context, &ArgMatches) -> Result<()> + Send + Sync,
{
    fn name(&self) -> String {
        self.command.get_name().to_string()
    }

    fn command(&self) -> clap::Command {
        self.command.clone()
    }

    fn run(&self, ctx: &Context, args: &ArgMatches) -> Result<()> {
        (self.func)(ctx, args)
    }
}

struct Member {
    command: Arc<dyn Command>,
    hidden: bool,
}

/// Ready-made [`CommandGroup`] backed by a fixed set of commands, in
/// registration order. Hidden members resolve but are not listed unless the
/// context asks for them.
pub struct StaticGroup {
    name: String,
    members: Vec<Member>,
}

impl StaticGroup {
    pub fn new(name: &str) -> StaticGroup {
        StaticGroup {
            name: name.to_string(),
            members: Vec::new(),
        }
    }

    /// Register a command in the group.
    pub fn add_command(&mut self, command: Arc<dyn Command>) -> Result<&mut Self> {
        self.add(command, false)
    }

    /// Register a command that resolves but does not show up in listings.
    pub fn add_hidden_command(&mut self, command: Arc<dyn Command>) -> Result<&mut Self> {
        self.add(command, true)
    }

    fn add(&mut self, command: Arc<dyn Command>, hidden: bool) -> Result<&mut Self> {
        let name = command.name();

        // Ensure uniqueness of the command name. This is important as their
        // name is used as a key.
        if self.members.iter().any(|m| m.command.name() == name) {
            bail!("could not insert command '{}'; name already registered", name);
        }

        self.members.push(Member { command, hidden });
        Ok(self)
    }
}

impl CommandGroup for StaticGroup {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn list_commands(&self, ctx: &Context) -> Vec<String> {
        self.members
            .iter()
            .filter(|m| ctx.show_hidden || !m.hidden)
            .map(|m| m.command.name())
            .collect()
    }

    fn get_command(&self, _: &Context, name: &str) -> Option<Arc<dyn Command>> {
        self.members
            .iter()
            .find(|m| m.command.name() == name)
            .map(|m| Arc::clone(&m.command))
    }
}
