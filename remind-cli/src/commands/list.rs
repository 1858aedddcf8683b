use anyhow::Result;
use remind_core::Store;

use crate::render;

pub fn run(store: &Store) -> Result<()> {
    println!("{}", render::rule());
    println!("{}", render::list_header());
    println!("{}", render::rule());

    for (position, event) in store.events().iter().enumerate() {
        println!("{}", render::list_row(position + 1, event));
    }

    Ok(())
}
