use std::sync::Arc;

use anyhow::Result;

use cmddir::{EntryPoint, FnCommand};

pub fn entry_point() -> Result<EntryPoint> {
    let command = FnCommand::new(clap::Command::new("custom_name"), |_, _| Ok(()));
    Ok(EntryPoint::Single(Arc::new(command)))
}
