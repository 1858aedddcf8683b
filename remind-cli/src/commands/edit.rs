use std::env;
use std::process::Command;

use anyhow::{Context, Result, bail};
use remind_core::Store;

/// Open the event file with the user's editor.
pub fn run(store: &Store) -> Result<()> {
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    let status = Command::new(&editor)
        .arg(store.path())
        .status()
        .with_context(|| format!("Could not launch editor '{editor}'"))?;

    if !status.success() {
        bail!("Editor '{editor}' exited with {status}");
    }

    Ok(())
}
