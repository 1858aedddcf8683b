use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use remind_core::{Store, summarize};

use crate::commands::HORIZON_DAYS;
use crate::render;

pub fn run(store: &Store) -> Result<()> {
    let today = Local::now().date_naive();
    let occurrences = summarize(store.events(), today, HORIZON_DAYS, HORIZON_DAYS);

    tracing::debug!(
        events = store.len(),
        occurrences = occurrences.len(),
        "expanded summary window"
    );

    println!("{}", render::rule());
    println!("{}", render::summary_header());
    println!("{}", render::rule());

    if occurrences.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    for occurrence in &occurrences {
        println!("{}", render::summary_row(occurrence, today));
    }

    Ok(())
}
