//! Terminal rendering for remind output.
//!
//! The pure past/present/future classification lives in remind-core;
//! everything ANSI-colored is here.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use remind_core::summary::{Occurrence, TimeClass};
use remind_core::{Event, storage};

/// Horizontal rule matching the event file preamble.
pub fn rule() -> &'static str {
    storage::RULE
}

/// Column header with the id column, as printed by `list`.
pub fn list_header() -> String {
    storage::header(true)
}

/// Column header without ids, as written to the event file and shown in
/// the create preview.
pub fn file_header() -> String {
    storage::header(false)
}

pub fn summary_header() -> &'static str {
    "#ID |     Date    | Description"
}

/// One summary line: id, resolved date and description, colored by the
/// occurrence's position relative to today.
pub fn summary_row(occurrence: &Occurrence, today: NaiveDate) -> String {
    let line = format!(
        "{:3} | {} | {}",
        occurrence.index,
        occurrence.date_label(),
        occurrence.event.text
    );

    match occurrence.time_class(today) {
        TimeClass::Future => line.green().to_string(),
        TimeClass::Past => line.bright_black().to_string(),
        TimeClass::Present => line,
    }
}

/// One `list` line: 1-based id followed by the event's file row.
pub fn list_row(id: usize, event: &Event) -> String {
    format!("{id:3}| {event}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- rows ---

    #[test]
    fn list_row_pads_the_id() {
        let event = Event {
            text: "water plants".to_string(),
            year: 2024,
            month: 1,
            day: Some(15),
            interval: None,
            limit: None,
        };
        assert_eq!(
            list_row(1, &event),
            "  1| 15 Jan 2024 |           |       | water plants"
        );
    }

    #[test]
    fn present_summary_row_is_uncolored() {
        let event = Event {
            text: "water plants".to_string(),
            year: 2024,
            month: 6,
            day: Some(15),
            interval: None,
            limit: None,
        };
        let occurrence = Occurrence {
            year: 2024,
            month: 6,
            day: Some(15),
            delta: 0,
            index: 1,
            event: &event,
        };
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(
            summary_row(&occurrence, today),
            "  1 | 15 Jun 2024 | water plants"
        );
    }
}
