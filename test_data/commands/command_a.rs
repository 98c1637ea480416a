use std::sync::Arc;

use anyhow::Result;

use cmddir::{EntryPoint, FnCommand};

pub fn entry_point() -> Result<EntryPoint> {
    let cli = FnCommand::new(clap::Command::new("cli"), |_, _| Ok(()));
    Ok(EntryPoint::Single(Arc::new(cli)))
}
