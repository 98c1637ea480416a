use std::sync::Arc;

use anyhow::Result;

use cmddir::{EntryPoint, FnCommand, StaticGroup};

pub fn entry_point() -> Result<EntryPoint> {
    let mut group = StaticGroup::new("command_group");
    group
        .add_command(Arc::new(FnCommand::new(clap::Command::new("a"), |_, _| {
            Ok(())
        })))?
        .add_command(Arc::new(FnCommand::new(clap::Command::new("b"), |_, _| {
            Ok(())
        })))?;
    Ok(EntryPoint::Group(Arc::new(group)))
}
