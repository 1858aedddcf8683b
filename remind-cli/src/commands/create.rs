use anyhow::{Result, bail};
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;
use remind_core::parse::{self, ParsedDate};
use remind_core::{Event, Store};

use crate::render;

pub fn run(
    store: &mut Store,
    start: Option<String>,
    interval: Option<String>,
    limit: Option<u32>,
    description: Option<String>,
) -> Result<()> {
    let start = match start {
        Some(input) => match parse::parse_start_date(&input) {
            Some(date) => date,
            None => bail!("Not a valid date: \"{input}\""),
        },
        None => prompt_start_date()?,
    };

    let interval = match interval {
        Some(input) => match parse::parse_interval(&input) {
            0 => bail!("Not a valid interval: \"{input}\""),
            months => Some(months),
        },
        None => prompt_interval()?,
    };

    let limit = match limit {
        Some(0) => bail!("Limit must be greater than 0"),
        Some(n) => Some(n),
        None => prompt_limit()?,
    };

    let text = match description {
        Some(text) => text,
        None => Input::<String>::new()
            .with_prompt("Event description")
            .interact_text()?,
    };

    let event = Event {
        text,
        year: start.year,
        month: start.month,
        day: start.day,
        interval,
        limit,
    };

    println!("{}", render::rule());
    println!("{}", render::file_header());
    println!("{}", render::rule());
    println!("{event}");
    println!();

    if Confirm::new().with_prompt("Save").default(true).interact()? {
        store.append(event);
        store.save()?;
        tracing::info!(events = store.len(), "event file rewritten");
        println!("{}", "Saved.".green());
    } else {
        println!("Cancelled.");
    }

    Ok(())
}

/// Prompt until the input resolves to a date.
fn prompt_start_date() -> Result<ParsedDate> {
    loop {
        let input: String = Input::new().with_prompt("Start date").interact_text()?;
        match parse::parse_start_date(&input) {
            Some(date) => return Ok(date),
            None => eprintln!("{}", format!("Not a valid date: \"{input}\"").red()),
        }
    }
}

/// Empty or unrecognized input means non-repeating.
fn prompt_interval() -> Result<Option<u32>> {
    let input: String = Input::new()
        .with_prompt("Repeat interval (return for none)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    match parse::parse_interval(&input) {
        0 => Ok(None),
        months => Ok(Some(months)),
    }
}

fn prompt_limit() -> Result<Option<u32>> {
    let input: String = Input::new()
        .with_prompt("Limit occurrences (return for none)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    Ok(parse::parse_limit(&input))
}
