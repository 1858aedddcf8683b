use anyhow::{Result, bail};
use remind_core::Store;

pub fn run(store: &mut Store, id: usize) -> Result<()> {
    if id == 0 {
        bail!("Out of range, id must be greater than 0");
    }
    if id > store.len() {
        bail!(
            "Out of range, id must be less than or equal to {}",
            store.len()
        );
    }

    let removed = store.remove(id)?;
    store.save()?;

    tracing::info!(id, "removed event");
    println!("Removed: {}", removed.text);

    Ok(())
}
